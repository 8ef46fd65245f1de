//! A playground page for [`reactive_button::Button`]: a live preview, one
//! control per prop and a generated usage example.

mod controls;
mod page;
mod settings;
mod snippet;

pub use controls::{control_descriptors, ControlDescriptor, ControlKind, SelectOption};
pub use page::{select_option_class, App, Playground, PlaygroundProps};
pub use settings::{SettingKey, SettingUpdate, Settings, SettingsError};
pub use snippet::usage_snippet;
