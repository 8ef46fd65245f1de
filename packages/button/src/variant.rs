use std::{fmt, str::FromStr};

use crate::ParseError;

/// The semantic color of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Info,
    Warning,
    Danger,
}

impl ButtonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Success,
        ButtonVariant::Info,
        ButtonVariant::Warning,
        ButtonVariant::Danger,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Success => "success",
            ButtonVariant::Info => "info",
            ButtonVariant::Warning => "warning",
            ButtonVariant::Danger => "danger",
        }
    }

    /// Human readable name, e.g. `"Success"`.
    pub const fn label(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "Primary",
            ButtonVariant::Success => "Success",
            ButtonVariant::Info => "Info",
            ButtonVariant::Warning => "Warning",
            ButtonVariant::Danger => "Danger",
        }
    }

    /// The utility classes for this variant, either filled or outlined.
    pub const fn style(self, outline: bool) -> &'static str {
        match (self, outline) {
            (ButtonVariant::Primary, false) => {
                "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500"
            }
            (ButtonVariant::Primary, true) => {
                "border-2 border-blue-600 text-blue-600 hover:bg-blue-50 focus:ring-blue-500"
            }
            (ButtonVariant::Success, false) => {
                "bg-green-600 text-white hover:bg-green-700 focus:ring-green-500"
            }
            (ButtonVariant::Success, true) => {
                "border-2 border-green-600 text-green-600 hover:bg-green-50 focus:ring-green-500"
            }
            (ButtonVariant::Info, false) => {
                "bg-sky-600 text-white hover:bg-sky-700 focus:ring-sky-500"
            }
            (ButtonVariant::Info, true) => {
                "border-2 border-sky-600 text-sky-600 hover:bg-sky-50 focus:ring-sky-500"
            }
            (ButtonVariant::Warning, false) => {
                "bg-yellow-500 text-white hover:bg-yellow-600 focus:ring-yellow-500"
            }
            (ButtonVariant::Warning, true) => {
                "border-2 border-yellow-500 text-yellow-600 hover:bg-yellow-50 focus:ring-yellow-500"
            }
            (ButtonVariant::Danger, false) => {
                "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500"
            }
            (ButtonVariant::Danger, true) => {
                "border-2 border-red-600 text-red-600 hover:bg-red-50 focus:ring-red-500"
            }
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| ParseError::UnknownVariant(s.to_string()))
    }
}
