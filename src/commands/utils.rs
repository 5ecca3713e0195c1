use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::Read;
use std::path::Path;
use std::process::Command;

/// Read the whole trace from a file, or stdin when no path is given
///
/// The input is trimmed as a whole; individual lines are left alone.
pub fn read_trace_input(input: Option<&Path>) -> Result<String> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read trace from stdin")?;
            buffer
        }
    };

    Ok(raw.trim().to_string())
}

/// Program and leading arguments that open a file on `os`
pub fn viewer_command(os: &str) -> (&'static str, &'static [&'static str]) {
    match os {
        "macos" => ("open", &[]),
        // `start` is a cmd builtin; the empty string is the window title
        "windows" => ("cmd", &["/C", "start", ""]),
        _ => ("xdg-open", &[]),
    }
}

/// Hand `path` to the platform viewer without waiting for it
///
/// A missing viewer only produces a warning; the page is already written.
pub fn open_in_viewer(path: &Path) {
    let (program, leading) = viewer_command(std::env::consts::OS);
    debug!("Opening {} with {}", path.display(), program);

    if let Err(e) = Command::new(program).args(leading).arg(path).spawn() {
        warn!("Could not open {} with {}: {}", path.display(), program, e);
    }
}

/// Display version information
pub fn display_version() {
    println!("Forge Stack Tracer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Collapsible call trees for `forge test -vvvv` traces.");
}
