//! Render command implementation.
//!
//! The render command:
//! 1. Reads the trace from a file or stdin
//! 2. Parses it into a forest
//! 3. Decodes call lines (unless disabled)
//! 4. Prints the tree and optionally writes JSON

use super::models::RenderArgs;
use super::utils::read_trace_input;
use crate::decoder::NodeDecoder;
use crate::output::{render_tree, write_forest, TreeStyle};
use crate::parser::{parse_trace, TraceForest};
use crate::rpc::DecoderClient;
use anyhow::{Context, Result};
use log::{error, info};
use std::time::Instant;

/// Maximum accepted value for `max_in_flight`
const MAX_IN_FLIGHT_LIMIT: usize = 1024;

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// If the decoding pass as a whole fails, the undecoded tree is still
/// printed before the error is returned.
pub async fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Reading trace input...");
    let trace = read_trace_input(args.input.as_deref())?;

    info!("Step 2/3: Parsing trace...");
    let forest = parse_trace(&trace).context("Failed to parse trace")?;
    info!(
        "Found {} trace blocks ({} lines, max depth {})",
        forest.roots().len(),
        forest.len(),
        forest.max_depth()
    );

    let style = TreeStyle {
        expand_levels: args.expand_levels,
        color: args.color,
    };

    let forest = if args.decode {
        info!("Step 3/3: Decoding calldata via {}...", args.decoder_url);
        match decorate_forest(&forest, &args).await {
            Ok(decorated) => decorated,
            Err(e) => {
                error!("Error decoding nodes: {:#}", e);
                print!("{}", render_tree(&forest, &style));
                anyhow::bail!("An error occurred while decoding the trace data. Please try again.");
            }
        }
    } else {
        info!("Step 3/3: Skipping calldata decoding (disabled)");
        forest
    };

    print!("{}", render_tree(&forest, &style));

    if let Some(json_path) = &args.output_json {
        write_forest(&forest, json_path).context("Failed to write trace JSON")?;
        info!("✓ Trace JSON written to: {}", json_path.display());
    }

    info!("Render completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

async fn decorate_forest(forest: &TraceForest, args: &RenderArgs) -> Result<TraceForest> {
    let client = DecoderClient::new(&args.decoder_url).context("Failed to create decoder client")?;
    let decoder = NodeDecoder::new(client).with_max_in_flight(args.max_in_flight);

    let decorated = decoder.decorate(forest).await?;
    Ok(decorated)
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_render_args(args: &RenderArgs) -> Result<()> {
    if args.decode {
        if args.decoder_url.is_empty() {
            anyhow::bail!("Decoder URL cannot be empty");
        }

        if !args.decoder_url.starts_with("http://") && !args.decoder_url.starts_with("https://") {
            anyhow::bail!("Decoder URL must start with http:// or https://");
        }
    }

    if args.max_in_flight == 0 {
        anyhow::bail!("max_in_flight must be greater than 0");
    }

    if args.max_in_flight > MAX_IN_FLIGHT_LIMIT {
        anyhow::bail!("max_in_flight is too large (max {})", MAX_IN_FLIGHT_LIMIT);
    }

    if let Some(path) = &args.output_json {
        if path.as_os_str().is_empty() {
            anyhow::bail!("JSON output path cannot be empty");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_default() {
        assert!(validate_render_args(&RenderArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_url() {
        let args = RenderArgs {
            decoder_url: String::new(),
            ..Default::default()
        };
        assert!(validate_render_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_invalid_url_scheme() {
        let args = RenderArgs {
            decoder_url: "ftp://decoder.local".to_string(),
            ..Default::default()
        };
        assert!(validate_render_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_url_ignored_without_decode() {
        let args = RenderArgs {
            decode: false,
            decoder_url: String::new(),
            ..Default::default()
        };
        assert!(validate_render_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_max_in_flight_bounds() {
        let zero = RenderArgs {
            max_in_flight: 0,
            ..Default::default()
        };
        assert!(validate_render_args(&zero).is_err());

        let huge = RenderArgs {
            max_in_flight: 5000,
            ..Default::default()
        };
        assert!(validate_render_args(&huge).is_err());
    }

    #[test]
    fn test_validate_args_empty_json_path() {
        let args = RenderArgs {
            output_json: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(validate_render_args(&args).is_err());
    }

    #[tokio::test]
    async fn test_execute_render_without_decoding() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("trace.txt");
        let json = dir.path().join("out/trace.json");
        std::fs::write(&input, "Traces:\n  [1] T::test()\n    └─ ← [Stop]\n").unwrap();

        let args = RenderArgs {
            input: Some(input),
            decode: false,
            color: false,
            output_json: Some(json.clone()),
            ..Default::default()
        };
        execute_render(args).await.unwrap();

        let forest = crate::output::read_forest(&json).unwrap();
        assert_eq!(forest.len(), 2);
    }

    #[tokio::test]
    async fn test_execute_render_no_trace() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("trace.txt");
        std::fs::write(&input, "\n[PASS] test_a() (gas: 1)\n\n").unwrap();

        let args = RenderArgs {
            input: Some(input),
            decode: false,
            ..Default::default()
        };
        assert!(execute_render(args).await.is_err());
    }
}
