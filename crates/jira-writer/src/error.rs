/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for writer configuration.
//!
//! Rendering itself never fails; only turning host-supplied options into
//! [`WriterOptions`](crate::options::WriterOptions) can.

use thiserror::Error;

/// Errors that can occur while reading writer options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WriterError {
    /// An option was given a value outside its accepted set.
    #[error("Invalid value '{value}' for writer option '{option}'")]
    InvalidOptionValue { option: String, value: String },

    /// An option was given a JSON value of the wrong type.
    #[error("Writer option '{option}' must be a {expected}")]
    InvalidOptionType {
        option: String,
        expected: &'static str,
    },
}

/// Result type for writer configuration.
pub type WriterResult<T> = Result<T, WriterError>;
