//! Forge Stack Tracer
//!
//! Turns the call traces printed by `forge test -vvvv` into collapsible
//! call trees, with raw calldata decoded into readable function calls.
//!
//! ## Getting Started
//!
//! ```bash
//! forge test --mt test_swap -vvvv | fst render --depth 2
//! forge test --mt test_swap -vvvv | fst html
//! ```
//!
//! As a library:
//!
//! ```ignore
//! use forge_stack_tracer::decoder::NodeDecoder;
//! use forge_stack_tracer::parser::parse_trace;
//! use forge_stack_tracer::rpc::DecoderClient;
//!
//! let forest = parse_trace(&trace)?;
//! let decoder = NodeDecoder::new(DecoderClient::new(DEFAULT_DECODER_URL)?);
//! let decorated = decoder.decorate(&forest).await?;
//! ```

pub mod commands;
pub mod decoder;
pub mod output;
pub mod parser;
pub mod rpc;
pub mod utils;
