//! Error types for the SpiceGrid netlist parser and layout engine.
//!
//! Parsing is fail-soft: recoverable problems in a netlist are reported as
//! [`Diagnostic`](crate::netlist::Diagnostic)s next to the parsed circuit.
//! [`SpiceGridError`] covers the failures that do stop an operation: I/O,
//! strict-mode rejections, bad caller options and serialization.

use thiserror::Error;

/// Result type alias using [`SpiceGridError`].
pub type Result<T> = std::result::Result<T, SpiceGridError>;

/// Unified error type for all SpiceGrid operations.
#[derive(Error, Debug)]
pub enum SpiceGridError {
    // ============ Netlist Errors ============
    /// A diagnostic escalated to an error by strict parsing
    #[error("Rejected netlist at line {line}: {message}")]
    Rejected { line: usize, message: String },

    /// Invalid caller-supplied option
    #[error("Invalid option: {message}")]
    InvalidOption { message: String },

    // ============ I/O Errors ============
    /// Error reading a netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error serializing the model or geometry
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl SpiceGridError {
    /// Create a strict-mode rejection error
    pub fn rejected(line: usize, message: impl Into<String>) -> Self {
        Self::Rejected {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid option error
    pub fn invalid_option(message: impl Into<String>) -> Self {
        Self::InvalidOption {
            message: message.into(),
        }
    }
}
