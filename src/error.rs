//! Error types for the Transim circuit simulator.
//!
//! The propagation engine itself is total: recomputing or rendering a
//! well-formed network never fails. [`TransimError`] covers everything around
//! it: looking circuits up in the template library, validating what a builder
//! produced, parsing sequential input steps, and writing results out.

use thiserror::Error;

/// Result type alias using [`TransimError`].
pub type Result<T> = std::result::Result<T, TransimError>;

/// Unified error type for all Transim operations.
#[derive(Error, Debug)]
pub enum TransimError {
    // ============ Library Errors ============
    /// No template with this name exists
    #[error("Unknown circuit '{name}' (use --list to see available circuits)")]
    UnknownCircuit { name: String },

    // ============ Circuit Validation Errors ============
    /// The circuit declares nothing to capture
    #[error("Circuit '{circuit}' produced no declared outputs")]
    NoOutputs { circuit: String },

    // ============ Simulation Errors ============
    /// A sequential input step could not be applied
    #[error("Invalid input step #{index} '{step}': {message}")]
    InvalidStep {
        index: usize,
        step: String,
        message: String,
    },

    // ============ I/O Errors ============
    /// Error writing a rendered graph to disk
    #[error("Failed to write graph file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing renderings to stdout
    #[error("Output error: {message}")]
    OutputError { message: String },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl TransimError {
    /// Create an unknown circuit error
    pub fn unknown_circuit(name: impl Into<String>) -> Self {
        Self::UnknownCircuit { name: name.into() }
    }

    /// Create an invalid step error
    pub fn invalid_step(index: usize, step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidStep {
            index,
            step: step.into(),
            message: message.into(),
        }
    }
}
