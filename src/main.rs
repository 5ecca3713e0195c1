//! Forge Stack Tracer CLI
//!
//! Reads `forge test -vvvv` output and renders its call traces as trees,
//! either in the terminal or as an HTML viewer page.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use forge_stack_tracer::commands::{
    display_version, execute_html, execute_render, validate_html_args, validate_render_args,
    HtmlArgs, RenderArgs,
};
use forge_stack_tracer::utils::config::{DEFAULT_DECODER_URL, DEFAULT_MAX_IN_FLIGHT};

/// Forge Stack Tracer - collapsible call trees for Foundry traces
#[derive(Parser, Debug)]
#[command(name = "fst")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the trace as a tree, decoding calldata
    Render {
        /// Trace file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Skip calldata decoding
        #[arg(long)]
        no_decode: bool,

        /// Calldata decoding endpoint
        #[arg(long, env = "FST_DECODER_URL", default_value = DEFAULT_DECODER_URL)]
        decoder_url: String,

        /// Maximum decode requests in flight
        #[arg(long, env = "FST_MAX_IN_FLIGHT", default_value_t = DEFAULT_MAX_IN_FLIGHT)]
        max_in_flight: usize,

        /// Tree levels to expand below each root
        #[arg(short, long)]
        depth: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Also write the (decoded) tree as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Write an HTML viewer page with the trace embedded
    Html {
        /// Trace file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Viewer page template with a closing </body> tag
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Output path (defaults to out/_fst/fst-<timestamp>.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the written page in the system viewer
        #[arg(long)]
        open: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            input,
            no_decode,
            decoder_url,
            max_in_flight,
            depth,
            no_color,
            json,
        } => {
            let args = RenderArgs {
                input,
                decode: !no_decode,
                decoder_url,
                max_in_flight,
                expand_levels: depth,
                color: !no_color,
                output_json: json,
            };

            validate_render_args(&args)?;
            execute_render(args).await?;
        }

        Commands::Html {
            input,
            template,
            output,
            open,
        } => {
            let args = HtmlArgs {
                input,
                template,
                output,
                open,
            };

            validate_html_args(&args)?;
            execute_html(args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
