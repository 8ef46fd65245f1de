//! The playground's single source of truth: the props currently applied to the
//! previewed button, and the one-field updates the controls emit.

use std::fmt;

use reactive_button::{ButtonSize, ButtonVariant, ParseError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub text: String,
    pub disabled: bool,
    pub loading: bool,
    pub outline: bool,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            text: "Hello Button".to_string(),
            disabled: false,
            loading: false,
            outline: false,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
        }
    }
}

impl Settings {
    /// Returns a copy of these settings with exactly one field replaced.
    pub fn with(self, update: SettingUpdate) -> Self {
        match update {
            SettingUpdate::Text(text) => Self { text, ..self },
            SettingUpdate::Disabled(disabled) => Self { disabled, ..self },
            SettingUpdate::Loading(loading) => Self { loading, ..self },
            SettingUpdate::Outline(outline) => Self { outline, ..self },
            SettingUpdate::Variant(variant) => Self { variant, ..self },
            SettingUpdate::Size(size) => Self { size, ..self },
        }
    }

    /// Applies `update` in place.
    pub fn apply(&mut self, update: SettingUpdate) {
        *self = std::mem::take(self).with(update);
    }

    pub fn text_of(&self, key: SettingKey) -> Option<&str> {
        match key {
            SettingKey::Text => Some(&self.text),
            _ => None,
        }
    }

    pub fn flag_of(&self, key: SettingKey) -> Option<bool> {
        match key {
            SettingKey::Disabled => Some(self.disabled),
            SettingKey::Loading => Some(self.loading),
            SettingKey::Outline => Some(self.outline),
            _ => None,
        }
    }

    /// The raw option value a select control should mark as active.
    pub fn option_of(&self, key: SettingKey) -> Option<&'static str> {
        match key {
            SettingKey::Variant => Some(self.variant.as_str()),
            SettingKey::Size => Some(self.size.as_str()),
            _ => None,
        }
    }
}

/// Names one field of [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Text,
    Disabled,
    Loading,
    Outline,
    Variant,
    Size,
}

impl SettingKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            SettingKey::Text => "text",
            SettingKey::Disabled => "disabled",
            SettingKey::Loading => "loading",
            SettingKey::Outline => "outline",
            SettingKey::Variant => "variant",
            SettingKey::Size => "size",
        }
    }

    /// Builds the update for a boolean field.
    pub fn flag(self, value: bool) -> Result<SettingUpdate, SettingsError> {
        match self {
            SettingKey::Disabled => Ok(SettingUpdate::Disabled(value)),
            SettingKey::Loading => Ok(SettingUpdate::Loading(value)),
            SettingKey::Outline => Ok(SettingUpdate::Outline(value)),
            _ => Err(SettingsError::NotAFlag(self)),
        }
    }

    /// Builds the update for a text field.
    pub fn text(self, value: String) -> Result<SettingUpdate, SettingsError> {
        match self {
            SettingKey::Text => Ok(SettingUpdate::Text(value)),
            _ => Err(SettingsError::NotText(self)),
        }
    }

    /// Builds the update for a select field from one of its option values.
    pub fn parse_option(self, value: &str) -> Result<SettingUpdate, SettingsError> {
        match self {
            SettingKey::Variant => Ok(SettingUpdate::Variant(value.parse()?)),
            SettingKey::Size => Ok(SettingUpdate::Size(value.parse()?)),
            _ => Err(SettingsError::NoOptions(self)),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A new value for exactly one field of [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingUpdate {
    Text(String),
    Disabled(bool),
    Loading(bool),
    Outline(bool),
    Variant(ButtonVariant),
    Size(ButtonSize),
}

impl SettingUpdate {
    pub const fn key(&self) -> SettingKey {
        match self {
            SettingUpdate::Text(_) => SettingKey::Text,
            SettingUpdate::Disabled(_) => SettingKey::Disabled,
            SettingUpdate::Loading(_) => SettingKey::Loading,
            SettingUpdate::Outline(_) => SettingKey::Outline,
            SettingUpdate::Variant(_) => SettingKey::Variant,
            SettingUpdate::Size(_) => SettingKey::Size,
        }
    }
}

impl fmt::Display for SettingUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingUpdate::Text(text) => write!(f, "text = {text:?}"),
            SettingUpdate::Disabled(value)
            | SettingUpdate::Loading(value)
            | SettingUpdate::Outline(value) => write!(f, "{} = {value}", self.key()),
            SettingUpdate::Variant(variant) => write!(f, "variant = {variant}"),
            SettingUpdate::Size(size) => write!(f, "size = {size}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("setting `{0}` is not a toggle")]
    NotAFlag(SettingKey),

    #[error("setting `{0}` does not hold text")]
    NotText(SettingKey),

    #[error("setting `{0}` has no options to select from")]
    NoOptions(SettingKey),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
