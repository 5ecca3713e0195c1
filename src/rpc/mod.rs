//! Client for the remote calldata decoding service.

pub mod client;
pub mod types;

// Re-export main types
pub use client::DecoderClient;
pub use types::{DecodedCall, RawArg};
