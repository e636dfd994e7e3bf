//! Widget Errors
//!
//! Failures surfaced by the page behaviors.

use thiserror::Error;

/// Common result type for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("no document available")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("index {index} out of range for {len} {list} elements")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    #[error(".{0} element has no next sibling")]
    MissingSibling(String),

    #[error("checkbox {index} has no paired input: {reason}")]
    UnpairedCheckbox { index: usize, reason: String },

    #[error("element is not an input")]
    NotAnInput,

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WidgetError::IndexOutOfRange { list: "hidden checkbox", index: 2, len: 1 };
        assert_eq!(err.to_string(), "index 2 out of range for 1 hidden checkbox elements");
        assert_eq!(
            WidgetError::MissingSibling("account".into()).to_string(),
            ".account element has no next sibling"
        );
    }
}
