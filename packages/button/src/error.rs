use thiserror::Error;

/// Returned when a string does not name a known variant or size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown button variant `{0}`")]
    UnknownVariant(String),

    #[error("unknown button size `{0}`")]
    UnknownSize(String),
}
