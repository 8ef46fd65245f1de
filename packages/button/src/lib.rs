//! A styled button component for Dioxus.
//!
//! [`Button`] renders a native `<button>` whose classes are resolved from a
//! [`ButtonVariant`], a [`ButtonSize`] and an outline flag. While loading, the
//! label is replaced by a spinner and the button is disabled.
//!
//! ```rust, no_run
//! use dioxus::prelude::*;
//! use reactive_button::{Button, ButtonSize, ButtonVariant};
//!
//! fn app() -> Element {
//!     rsx! {
//!         Button {
//!             variant: ButtonVariant::Success,
//!             size: ButtonSize::Large,
//!             outline: true,
//!             "Save"
//!         }
//!     }
//! }
//! ```

mod button;
mod error;
mod size;
mod spinner;
mod style;
mod variant;

pub use button::{is_effectively_disabled, Button, ButtonProps, LOADING_TEXT};
pub use error::ParseError;
pub use size::ButtonSize;
pub use spinner::Spinner;
pub use style::{class_list, resolve_class, BASE_STYLES};
pub use variant::ButtonVariant;
