use dioxus::prelude::*;

use crate::{resolve_class, ButtonSize, ButtonVariant, Spinner};

/// The label shown in place of the children while a button is loading.
pub const LOADING_TEXT: &str = "Loading...";

/// A loading button is always disabled, whatever its `disabled` prop says.
pub const fn is_effectively_disabled(disabled: bool, is_loading: bool) -> bool {
    disabled || is_loading
}

/// The props for the [`Button`] component
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,

    #[props(default)]
    pub size: ButtonSize,

    /// Draw a border on a transparent background instead of a solid fill.
    #[props(default)]
    pub outline: bool,

    #[props(default)]
    pub disabled: bool,

    /// Replace the children with a spinner and disable the button.
    #[props(default)]
    pub is_loading: bool,

    /// Extra classes, appended after the resolved ones.
    #[props(into)]
    pub class: Option<String>,

    pub onclick: Option<EventHandler<MouseEvent>>,

    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,

    pub children: Element,
}

/// A native `<button>` styled by variant and size.
///
/// # Example
/// ```rust, no_run
/// # use dioxus::prelude::*;
/// # use reactive_button::{Button, ButtonVariant};
/// fn Toolbar() -> Element {
///     let mut saving = use_signal(|| false);
///
///     rsx! {
///         Button {
///             variant: ButtonVariant::Success,
///             is_loading: saving(),
///             onclick: move |_| saving.set(true),
///             "Save"
///         }
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let ButtonProps {
        variant,
        size,
        outline,
        disabled,
        is_loading,
        class,
        onclick,
        attributes,
        children,
    } = props;

    let disabled = is_effectively_disabled(disabled, is_loading);
    let class = resolve_class(variant, size, outline, class.as_deref());

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            disabled,
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..attributes,
            if is_loading {
                Spinner {}
                {LOADING_TEXT}
            } else {
                {children}
            }
        }
    }
}
