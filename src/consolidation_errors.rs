//! # Consolidation Error Types Module
//!
//! The consolidation functions themselves never fail. These errors cover the
//! few fallible surfaces around them, such as building a consolidator from a
//! custom configuration.

/// Custom error types for consolidation setup
#[derive(Debug, Clone, PartialEq)]
pub enum ConsolidationError {
    /// A configured descriptor word is blank
    InvalidDescriptor(String),
    /// A descriptor pattern failed to compile
    InvalidPattern(String),
}

impl std::fmt::Display for ConsolidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsolidationError::InvalidDescriptor(word) => {
                write!(f, "Invalid descriptor: '{word}' must contain a word")
            }
            ConsolidationError::InvalidPattern(msg) => write!(f, "Invalid pattern: {msg}"),
        }
    }
}

impl std::error::Error for ConsolidationError {}

impl From<regex::Error> for ConsolidationError {
    fn from(err: regex::Error) -> Self {
        ConsolidationError::InvalidPattern(err.to_string())
    }
}
