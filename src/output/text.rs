//! Terminal tree view of a trace forest.
//!
//! Mirrors the HTML viewer: nodes with children carry a `▼`/`▶` chevron,
//! return lines are green and reverts red. Expansion can be limited to a
//! number of tree levels below each root.

use crate::parser::{NodeRef, TraceForest};
use colored::*;

/// Rendering options for [`render_tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStyle {
    /// Levels expanded below each root; `None` expands everything
    pub expand_levels: Option<usize>,

    /// Color return and revert lines
    pub color: bool,
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self {
            expand_levels: None,
            color: true,
        }
    }
}

impl TreeStyle {
    pub fn plain() -> Self {
        Self {
            expand_levels: None,
            color: false,
        }
    }

    pub fn with_expand_levels(mut self, levels: Option<usize>) -> Self {
        self.expand_levels = levels;
        self
    }
}

/// Render every tree of the forest, separated by blank lines
pub fn render_tree(forest: &TraceForest, style: &TreeStyle) -> String {
    let mut out = String::new();

    for (index, &root) in forest.roots().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let root = forest.get(root);
        out.push_str(&node_label(&root, 0, style));
        out.push('\n');
        render_children(&root, 0, "", style, &mut out);
    }

    out
}

fn render_children(
    node: &NodeRef<'_>,
    level: usize,
    prefix: &str,
    style: &TreeStyle,
    out: &mut String,
) {
    if !is_expanded(level, style) {
        return;
    }

    let children: Vec<NodeRef<'_>> = node.children().collect();
    let last = children.len().saturating_sub(1);

    for (index, child) in children.iter().enumerate() {
        let (branch, continuation) = if index == last {
            ("└─ ", "   ")
        } else {
            ("├─ ", "│  ")
        };

        out.push_str(prefix);
        out.push_str(branch);
        out.push_str(&node_label(child, level + 1, style));
        out.push('\n');

        let child_prefix = format!("{}{}", prefix, continuation);
        render_children(child, level + 1, &child_prefix, style, out);
    }
}

fn is_expanded(level: usize, style: &TreeStyle) -> bool {
    style.expand_levels.map_or(true, |limit| level < limit)
}

fn node_label(node: &NodeRef<'_>, level: usize, style: &TreeStyle) -> String {
    let content = colorize(node.content(), style);
    if !node.has_children() {
        return content;
    }

    let chevron = if is_expanded(level, style) { "▼" } else { "▶" };
    format!("{} {}", chevron, content)
}

fn colorize(content: &str, style: &TreeStyle) -> String {
    if !style.color || !content.starts_with('←') {
        return content.to_string();
    }

    if content.starts_with("← [Revert]") {
        content.red().to_string()
    } else {
        content.green().to_string()
    }
}
