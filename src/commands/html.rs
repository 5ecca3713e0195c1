//! HTML command implementation.
//!
//! Echoes the trace, embeds it in the viewer page and writes the page.

use super::models::HtmlArgs;
use super::utils::{open_in_viewer, read_trace_input};
use crate::output::html::DEFAULT_TEMPLATE;
use crate::output::{default_output_path, write_html};
use crate::parser::parse_trace;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use std::path::PathBuf;

/// Execute the html command, returning the written path
///
/// **Public** - main entry point called from main.rs
pub fn execute_html(args: HtmlArgs) -> Result<PathBuf> {
    let trace = read_trace_input(args.input.as_deref())?;

    // The trace is passed through to the terminal unchanged
    println!("{}", trace);

    // The page parses on its own; this only warns early
    if let Err(e) = parse_trace(&trace) {
        warn!("Input does not look like a forge trace: {}", e);
    }

    let template = match &args.template {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let output_path = match args.output {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
            default_output_path(&cwd, Utc::now())
        }
    };

    write_html(&template, &trace, &output_path).context("Failed to write HTML output")?;

    info!("✓ HTML written to: {}", output_path.display());
    println!(
        "Forge Stack Tracer output generated successfully: {}",
        output_path.display()
    );

    if args.open {
        open_in_viewer(&output_path);
    }

    Ok(output_path)
}

/// Validate html arguments
pub fn validate_html_args(args: &HtmlArgs) -> Result<()> {
    if let Some(path) = &args.output {
        if path.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    if let Some(template) = &args.template {
        if !template.is_file() {
            anyhow::bail!("Template not found: {}", template.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_html_with_template() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("trace.txt");
        let template = dir.path().join("index.html");
        let output = dir.path().join("page/out.html");
        std::fs::write(&input, "Traces:\n  [1] T::test()\n").unwrap();
        std::fs::write(&template, "<html><body><main></main></body></html>").unwrap();

        let args = HtmlArgs {
            input: Some(input),
            template: Some(template),
            output: Some(output.clone()),
            open: false,
        };
        assert!(validate_html_args(&args).is_ok());

        let written = execute_html(args).unwrap();
        assert_eq!(written, output);

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.starts_with("<html><body><main></main>\n<script>"));
        assert!(html.contains(r#"window.TRACE_DATA = "Traces:\n  [1] T::test()";"#));
    }

    #[test]
    fn test_validate_html_args_missing_template() {
        let args = HtmlArgs {
            template: Some(PathBuf::from("/no/such/template.html")),
            ..Default::default()
        };
        assert!(validate_html_args(&args).is_err());
    }

    #[test]
    fn test_validate_html_args_empty_output() {
        let args = HtmlArgs {
            output: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(validate_html_args(&args).is_err());
    }
}
