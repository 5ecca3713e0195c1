//! Main trace parser for `forge test -vvvv` output.
//!
//! Converts box-drawing annotated trace text into a [`TraceForest`] in a
//! single forward pass over the lines.

use super::schema::{NodeId, TraceForest};
use crate::utils::config::{BOX_GLYPHS, PASS_LINE_PREFIX, TRACE_BLOCK_MARKER, VERTICAL_BAR};
use crate::utils::error::ParseError;
use log::debug;

/// Parse trace text into a forest, one tree per trace block
///
/// **Public** - main entry point for parsing
///
/// A block opens at the first non-blank line that is not a `[PASS]` line,
/// either at the start of input or after a `Traces:` marker. Following lines
/// that start with whitespace or box glyphs attach under the nearest open
/// ancestor whose `│` count is strictly smaller.
///
/// # Errors
/// * `ParseError::NoTraceFound` - input produced no root line
pub fn parse_trace(trace: &str) -> Result<TraceForest, ParseError> {
    let mut forest = TraceForest::new();
    let mut current_root: Option<NodeId> = None;
    let mut stack: Vec<NodeId> = Vec::new();

    for line in trace.lines() {
        let trimmed = line.trim();

        if trimmed == TRACE_BLOCK_MARKER {
            if let Some(root) = current_root.take() {
                forest.push_root(root);
            }
            stack.clear();
            continue;
        }

        if current_root.is_none() && !trimmed.is_empty() && !line.starts_with(PASS_LINE_PREFIX) {
            let root = forest.alloc(trimmed.to_string(), 0);
            current_root = Some(root);
            stack.push(root);
            continue;
        }

        if !is_continuation_line(line) {
            continue;
        }

        let content = strip_box_glyphs(line);
        if content.is_empty() {
            continue;
        }
        let depth = count_depth(line);

        // Only reachable with an open root, so the stack is never empty here
        while stack.len() > 1 && stack_top_depth(&forest, &stack) >= depth {
            stack.pop();
        }
        let Some(&parent) = stack.last() else {
            continue;
        };

        let node = forest.alloc(content, depth);
        forest.attach(parent, node);
        stack.push(node);
    }

    if let Some(root) = current_root {
        forest.push_root(root);
    }

    if forest.roots().is_empty() {
        return Err(ParseError::NoTraceFound);
    }

    debug!(
        "Parsed {} trace blocks with {} nodes",
        forest.roots().len(),
        forest.len()
    );

    Ok(forest)
}

/// A line that opens with whitespace or box-drawing glyphs
///
/// **Public** - exposed for testing
pub fn is_continuation_line(line: &str) -> bool {
    line.chars()
        .next()
        .is_some_and(|c| c.is_whitespace() || BOX_GLYPHS.contains(&c))
}

/// Remove every glyph and the whitespace run after it, then trim
///
/// **Public** - exposed for testing
pub fn strip_box_glyphs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if BOX_GLYPHS.contains(&c) {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }

    out.trim().to_string()
}

/// Depth is the number of `│` anywhere on the raw line
///
/// **Public** - exposed for testing
pub fn count_depth(line: &str) -> usize {
    line.chars().filter(|&c| c == VERTICAL_BAR).count()
}

fn stack_top_depth(forest: &TraceForest, stack: &[NodeId]) -> usize {
    stack.last().map(|&id| forest.node(id).depth).unwrap_or(0)
}
