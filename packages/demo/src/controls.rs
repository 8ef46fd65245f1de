use reactive_button::{ButtonSize, ButtonVariant};

use crate::SettingKey;

/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &'static str) -> Self {
        Self {
            value,
            label: capitalize(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Toggle,
    Select(Vec<SelectOption>),
}

/// How one settings field is presented and bound in the control panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    pub key: SettingKey,
    pub label: &'static str,
    pub kind: ControlKind,
}

impl ControlDescriptor {
    pub fn text(key: SettingKey, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ControlKind::Text,
        }
    }

    pub fn toggle(key: SettingKey, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ControlKind::Toggle,
        }
    }

    pub fn select(
        key: SettingKey,
        label: &'static str,
        values: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self {
            key,
            label,
            kind: ControlKind::Select(values.into_iter().map(SelectOption::new).collect()),
        }
    }

    /// Placeholder text for text inputs, e.g. `Enter button text`.
    pub fn placeholder(&self) -> String {
        format!("Enter {}", self.label.to_lowercase())
    }
}

/// The control panel, top to bottom.
pub fn control_descriptors() -> Vec<ControlDescriptor> {
    vec![
        ControlDescriptor::text(SettingKey::Text, "Button Text"),
        ControlDescriptor::toggle(SettingKey::Disabled, "Disabled"),
        ControlDescriptor::toggle(SettingKey::Loading, "Loading"),
        ControlDescriptor::toggle(SettingKey::Outline, "Outline"),
        ControlDescriptor::select(
            SettingKey::Variant,
            "Variant",
            ButtonVariant::ALL.map(ButtonVariant::as_str),
        ),
        ControlDescriptor::select(
            SettingKey::Size,
            "Size",
            ButtonSize::ALL.map(ButtonSize::as_str),
        ),
    ]
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
