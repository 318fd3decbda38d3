// In: src/error.rs

//! This module defines the single, unified error type for the entire guidorder library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Comparison itself never fails: every 128-bit pattern is a legal identifier.
//! Errors only arise at the edges: building identifiers from untrusted byte
//! buffers, loading configuration, and the one-time startup checks.

use thiserror::Error;

use crate::capability::Requirement;
use crate::compare::Strategy;

#[derive(Error, Debug)]
pub enum GuidOrderError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    #[error("Invalid identifier length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Strategy '{strategy}' requires {required}, which this host does not provide")]
    UnsupportedStrategy {
        strategy: Strategy,
        required: Requirement,
    },

    #[error("Unknown comparison strategy: {0}")]
    UnknownStrategy(String),

    #[error("Startup self-test failed (this is a bug): {0}")]
    SelfTestFailed(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem, e.g. a missing config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while reading configuration.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error from a safe byte-casting operation failing.
    #[error("Byte slice casting error: {0}")]
    PodCast(String), // Manual `From` impl is needed as bytemuck::PodCastError doesn't impl Error
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<bytemuck::PodCastError> for GuidOrderError {
    fn from(err: bytemuck::PodCastError) -> Self {
        GuidOrderError::PodCast(err.to_string())
    }
}
