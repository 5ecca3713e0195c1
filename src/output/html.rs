//! HTML viewer output writer.
//!
//! The viewer page reads the raw trace from `window.TRACE_DATA`; this module
//! injects that assignment into a page template and writes the result.

use super::{ensure_parent_dir, validate_path};
use crate::utils::config::{DEFAULT_OUTPUT_DIR, TRACE_DATA_GLOBAL};
use crate::utils::error::OutputError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Minimal page used when no viewer template is supplied
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>Forge Stack Tracer UI</title>
</head>
<body>
  <div id="root"></div>
  <script>
    document.getElementById("root").textContent = window.TRACE_DATA || "";
  </script>
</body>
</html>
"#;

/// Insert the trace assignment just before `</body>`
///
/// The trace is embedded as a JSON string literal; `</` is escaped so trace
/// text can never close the surrounding script element. Templates without a
/// `</body>` get the script appended.
pub fn inject_trace_data(template: &str, trace: &str) -> Result<String, OutputError> {
    let literal = serde_json::to_string(trace)
        .map_err(OutputError::SerializationFailed)?
        .replace("</", "<\\/");

    let script = format!(
        "\n<script>\n  window.{} = {};\n</script>\n",
        TRACE_DATA_GLOBAL, literal
    );

    let html = match template.find("</body>") {
        Some(pos) => format!("{}{}{}", &template[..pos], script, &template[pos..]),
        None => format!("{}{}", template, script),
    };

    Ok(html)
}

/// Write the viewer page for `trace` to `output_path`
///
/// **Public** - main entry point for HTML output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_html(
    template: &str,
    trace: &str,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing HTML to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let html = inject_trace_data(template, trace)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(html.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!("HTML written ({} bytes)", html.len());

    Ok(())
}

/// `out/_fst/fst-<UTC timestamp>.html` under `base`
pub fn default_output_path(base: &Path, now: DateTime<Utc>) -> PathBuf {
    base.join(DEFAULT_OUTPUT_DIR)
        .join(format!("fst-{}.html", now.format("%Y-%m-%dT%H-%M-%S")))
}
