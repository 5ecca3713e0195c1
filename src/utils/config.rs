//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default calldata decoding endpoint
pub const DEFAULT_DECODER_URL: &str = "https://swiss-knife.xyz/api/calldata/decoder-recursive";

/// Transport timeout for a single decode request
pub const DEFAULT_DECODE_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on decode requests in flight at once
pub const DEFAULT_MAX_IN_FLIGHT: usize = 16;

// Line shapes recognised by the trace parser
pub const TRACE_BLOCK_MARKER: &str = "Traces:";
pub const PASS_LINE_PREFIX: &str = "[PASS]";
pub const VERTICAL_BAR: char = '│';
pub const BOX_GLYPHS: &[char] = &['│', '├', '─', '└'];

// Call line shape: `<target>::<selector>(<params>)`
pub const CALL_SEPARATOR: &str = "::";
pub const SELECTOR_HEX_LEN: usize = 8;

/// Integers with more digits than this get a `[<d>e<n>]` hint
pub const PLAIN_NUMBER_MAX_DIGITS: usize = 6;

/// Global the HTML viewer reads the raw trace from
pub const TRACE_DATA_GLOBAL: &str = "TRACE_DATA";

/// Directory for generated HTML when no output path is given
pub const DEFAULT_OUTPUT_DIR: &str = "out/_fst";
