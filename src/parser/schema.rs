//! Trace tree data model.
//!
//! Nodes live in a flat arena owned by [`TraceForest`] and refer to their
//! children by [`NodeId`]. The parser only ever holds ids, never references
//! into the arena, so building the tree needs no shared mutable state.

use crate::utils::config::{PASS_LINE_PREFIX, TRACE_BLOCK_MARKER, VERTICAL_BAR};
use serde::{Deserialize, Serialize};

/// Index of a node inside its [`TraceForest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One call frame or log line of a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceNode {
    /// Line payload with box-drawing glyphs stripped, never empty
    pub content: String,

    /// Number of `│` glyphs on the source line
    pub depth: usize,

    /// Child ids in source order
    pub children: Vec<NodeId>,
}

/// Ordered set of independently rooted trace trees
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceForest {
    nodes: Vec<TraceNode>,
    roots: Vec<NodeId>,
}

impl TraceForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a detached node
    pub(crate) fn alloc(&mut self, content: String, depth: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TraceNode {
            content,
            depth,
            children: Vec::new(),
        });
        id
    }

    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
    }

    pub(crate) fn push_root(&mut self, root: NodeId) {
        self.roots.push(root);
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &TraceNode {
        &self.nodes[id.0]
    }

    /// Borrowed view of a node, convenient for recursive walks
    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { forest: self, id }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Total number of nodes across all trees
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in arena order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Depth-first walk of one tree, parents before children
    pub fn iter_preorder(&self, root: NodeId) -> Preorder<'_> {
        Preorder {
            forest: self,
            stack: vec![root],
        }
    }

    /// Largest `depth` value in the forest
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Build a structurally identical forest with new node contents
    ///
    /// Used by the decorator so the parsed forest stays untouched.
    pub fn map_content<F>(&self, mut f: F) -> TraceForest
    where
        F: FnMut(NodeId, &TraceNode) -> String,
    {
        let nodes = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| TraceNode {
                content: f(NodeId(index), node),
                depth: node.depth,
                children: node.children.clone(),
            })
            .collect();

        TraceForest {
            nodes,
            roots: self.roots.clone(),
        }
    }

    /// Reconstruct trace text that parses back into this forest
    ///
    /// Each descendant line carries exactly `depth` vertical bars, so the
    /// parser recovers the same depths and therefore the same shape.
    pub fn to_trace_text(&self) -> String {
        let mut out = String::new();

        for &root in &self.roots {
            out.push_str(TRACE_BLOCK_MARKER);
            out.push('\n');

            let root_content = &self.node(root).content;
            // An unindented `[PASS]` line would not open a block
            if root_content.starts_with(PASS_LINE_PREFIX) {
                out.push(' ');
            }
            out.push_str(root_content);
            out.push('\n');

            for id in self.iter_preorder(root).skip(1) {
                let node = self.node(id);
                for _ in 0..node.depth {
                    out.push(VERTICAL_BAR);
                    out.push(' ');
                }
                out.push_str("├─ ");
                out.push_str(&node.content);
                out.push('\n');
            }
        }

        out
    }

    /// Owned nested copy, the shape written to JSON
    pub fn to_trees(&self) -> Vec<TraceTree> {
        self.roots.iter().map(|&id| self.get(id).to_tree()).collect()
    }

    /// Rebuild an arena from nested trees
    pub fn from_trees(trees: &[TraceTree]) -> Self {
        let mut forest = Self::new();
        for tree in trees {
            let root = forest.insert_tree(tree);
            forest.push_root(root);
        }
        forest
    }

    fn insert_tree(&mut self, tree: &TraceTree) -> NodeId {
        let id = self.alloc(tree.content.clone(), tree.depth);
        for child in &tree.children {
            let child_id = self.insert_tree(child);
            self.attach(id, child_id);
        }
        id
    }
}

/// Preorder iterator over one tree
pub struct Preorder<'a> {
    forest: &'a TraceForest,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.forest.children(id).iter().rev().copied());
        Some(id)
    }
}

/// Borrowed handle to a node and the forest it lives in
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    forest: &'a TraceForest,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn content(&self) -> &'a str {
        &self.forest.node(self.id).content
    }

    pub fn depth(&self) -> usize {
        self.forest.node(self.id).depth
    }

    pub fn has_children(&self) -> bool {
        !self.forest.children(self.id).is_empty()
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let forest = self.forest;
        forest
            .children(self.id)
            .iter()
            .map(move |&id| NodeRef { forest, id })
    }

    pub fn to_tree(&self) -> TraceTree {
        TraceTree {
            content: self.content().to_string(),
            depth: self.depth(),
            children: self.children().map(|c| c.to_tree()).collect(),
        }
    }
}

/// Nested, owned form of a trace tree (JSON output schema)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceTree {
    pub content: String,
    pub depth: usize,
    pub children: Vec<TraceTree>,
}
