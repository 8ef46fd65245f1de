use crate::Settings;

/// Renders an `rsx!` usage example that reproduces the current preview.
pub fn usage_snippet(settings: &Settings) -> String {
    let Settings {
        text,
        disabled,
        loading,
        outline,
        variant,
        size,
    } = settings;

    // rsx! reads braces in a string literal as interpolation
    let text = format!("{text:?}").replace('{', "{{").replace('}', "}}");

    format!(
        r#"use reactive_button::{{Button, ButtonSize, ButtonVariant}};

rsx! {{
    Button {{
        variant: ButtonVariant::{variant},
        size: ButtonSize::{size},
        disabled: {disabled},
        is_loading: {loading},
        outline: {outline},
        {text}
    }}
}}"#,
        variant = variant.label(),
        size = size.label(),
    )
}
