use thiserror::Error;

/// Raised when a version-like input yields no usable components.
///
/// Covers an absent input, text without any digit runs, and text whose
/// digit runs are all zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed version: {input:?}")]
pub struct MalformedVersion {
    /// The offending input, rendered as text.
    pub input: String,
}

impl MalformedVersion {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Error for an absent (`None`) input.
    pub fn absent() -> Self {
        Self::new("<none>")
    }
}
