use crate::{ButtonSize, ButtonVariant};

/// Classes shared by every button regardless of variant or size.
pub const BASE_STYLES: &str = "inline-flex items-center justify-center font-medium rounded-md transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

/// Joins class fragments with single spaces, skipping empty ones.
pub fn class_list<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts.into_iter().map(str::trim).filter(|part| !part.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Resolves the full class string of a button.
///
/// The caller's `extra` classes come last so they win over the defaults when
/// both set the same utility.
pub fn resolve_class(
    variant: ButtonVariant,
    size: ButtonSize,
    outline: bool,
    extra: Option<&str>,
) -> String {
    class_list([
        BASE_STYLES,
        variant.style(outline),
        size.style(),
        extra.unwrap_or_default(),
    ])
}
