use crate::utils::config::{DEFAULT_DECODER_URL, DEFAULT_MAX_IN_FLIGHT};
use std::path::PathBuf;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Trace file (stdin when absent)
    pub input: Option<PathBuf>,

    /// Decode call lines through the decoding service
    pub decode: bool,

    /// Decoding service endpoint
    pub decoder_url: String,

    /// Decode requests allowed in flight at once
    pub max_in_flight: usize,

    /// Tree levels expanded below each root (None = all)
    pub expand_levels: Option<usize>,

    /// Color return and revert lines
    pub color: bool,

    /// Also write the forest as JSON
    pub output_json: Option<PathBuf>,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: None,
            decode: true,
            decoder_url: DEFAULT_DECODER_URL.to_string(),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            expand_levels: None,
            color: true,
            output_json: None,
        }
    }
}

/// Arguments for the html command
#[derive(Debug, Clone, Default)]
pub struct HtmlArgs {
    /// Trace file (stdin when absent)
    pub input: Option<PathBuf>,

    /// Viewer page template (built-in page when absent)
    pub template: Option<PathBuf>,

    /// Output path (timestamped file under out/_fst when absent)
    pub output: Option<PathBuf>,

    /// Open the page in the system viewer once written
    pub open: bool,
}
