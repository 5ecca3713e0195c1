//! Trace parsing and tree data model.
//!
//! This module handles:
//! - Splitting raw `forge test` output into trace blocks
//! - Recovering call depth from box-drawing glyphs
//! - Storing the result as an arena-backed forest

pub mod forge_trace;
pub mod schema;

// Re-export main types
pub use forge_trace::parse_trace;
pub use schema::{NodeId, NodeRef, TraceForest, TraceNode, TraceTree};
