//! Error types for the timeline engine.
//!
//! Illegal moves are not errors (see [`crate::Rejection`]). The only
//! explicit failure is a caller handing the engine an argument it cannot
//! honor, such as a history step that was never recorded.

use derive_more::{Display, Error};
use tracing::instrument;

/// Invalid argument with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid argument: {} at {}:{}", message, file, line)]
pub struct InvalidArgument {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidArgument {
    /// Creates a new invalid argument error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_and_location_in_display() {
        let err = InvalidArgument::new("step 7 out of range");
        let rendered = err.to_string();
        assert!(rendered.starts_with("Invalid argument: step 7 out of range at "));
        assert!(rendered.contains("error.rs"));
    }
}
