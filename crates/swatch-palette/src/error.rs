//! Error types for palette generation.

use thiserror::Error;

/// Errors raised by palette generators.
///
/// Only parameters with a closed set of meaningful values are validated;
/// everything else is computed as given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A parameter fell outside the values the generator supports.
    #[error("invalid parameter `{name}`: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: usize,
        expected: &'static str,
    },
}

/// Result type alias for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
