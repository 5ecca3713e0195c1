//! Calldata decoding of trace call lines.
//!
//! Call lines look like `[gas] <address>::<selector>(<hex params>)`. This
//! module recognises them, asks a [`CalldataDecoder`] for the function name
//! and arguments, and rebuilds the line in readable form:
//! - `call_line` - splitting a line into target, selector and params
//! - `format` - rendering decoded arguments
//! - `decorate` - concurrent decoding of a whole forest

pub mod call_line;
pub mod decorate;
pub mod format;

// Re-export main types and functions
pub use call_line::CallLine;
pub use decorate::{decode_content, NodeDecoder};
pub use format::{format_arg, format_call, format_scalar, parse_integer};

use crate::rpc::types::DecodedCall;
use crate::utils::error::DecodeError;
use std::future::Future;

/// Source of decoded function calls for raw calldata
///
/// Implemented by [`crate::rpc::DecoderClient`] for the remote service.
pub trait CalldataDecoder: Send + Sync + 'static {
    /// Decode `0x`-prefixed calldata (selector followed by params)
    fn decode(
        &self,
        calldata: &str,
    ) -> impl Future<Output = Result<DecodedCall, DecodeError>> + Send;
}
