//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur during trace parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("No valid trace found")]
    NoTraceFound,
}

/// Errors that can occur while decoding a single call line
///
/// These never escape the decorator: the node keeps its original text.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Decoder returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid decoder response: {0}")]
    InvalidResponse(String),

    #[error("Not a call line: {0}")]
    NotACall(String),

    #[error("Invalid function selector: {0}")]
    InvalidSelector(String),
}

/// Errors that abort a whole decoration pass
#[derive(Error, Debug)]
pub enum DecorateError {
    #[error("Decode task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    #[error("Decode scheduler closed unexpectedly")]
    SchedulerClosed,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
