//! AST module for the treelit front end
//!
//! Programs are trees of leaves (literals, identifiers) and compound forms
//! (an operator name applied to ordered children). Every node carries the
//! source location it was produced from.

// ============================================================================
// IMPORTS
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Source location attached to every node.
///
/// Lines and columns are 1-based.
///
/// # Examples
///
/// ```rust
/// use treelit::ast::Metadata;
/// let meta = Metadata::new("main.se", 3, 7);
/// assert_eq!(meta.line, 3);
/// assert_eq!(meta.to_string(), "main.se 3:7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metadata {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

/// A node of the program tree.
///
/// A `Leaf` never has children; a `Compound` always has an operator name,
/// even with zero children. Children are owned exclusively and kept in
/// source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Leaf {
        value: String,
        #[serde(default)]
        metadata: Metadata,
    },
    Compound {
        value: String,
        #[serde(default)]
        children: Vec<Node>,
        #[serde(default)]
        metadata: Metadata,
    },
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Metadata {
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            file: "main".to_string(),
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.file, self.line, self.column)
    }
}

impl Node {
    /// Builds a leaf node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treelit::ast::{Metadata, Node};
    /// let leaf = Node::leaf("0xff", Metadata::default());
    /// assert!(leaf.is_leaf());
    /// assert_eq!(leaf.value(), "0xff");
    /// ```
    pub fn leaf(value: impl Into<String>, metadata: Metadata) -> Self {
        Node::Leaf {
            value: value.into(),
            metadata,
        }
    }

    /// Builds a compound node from an operator name and its children.
    pub fn compound(value: impl Into<String>, children: Vec<Node>, metadata: Metadata) -> Self {
        Node::Compound {
            value: value.into(),
            children,
            metadata,
        }
    }

    /// The leaf text, or the operator name of a compound.
    pub fn value(&self) -> &str {
        match self {
            Node::Leaf { value, .. } | Node::Compound { value, .. } => value,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        match self {
            Node::Leaf { metadata, .. } | Node::Compound { metadata, .. } => metadata,
        }
    }

    /// Children of a compound; always empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Compound { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Rebuilds the tree bottom-up, handing every leaf to `f`.
    ///
    /// Compound nodes keep their operator and metadata.
    pub fn map_leaves<F>(self, f: &mut F) -> Node
    where
        F: FnMut(Node) -> Node,
    {
        match self {
            leaf @ Node::Leaf { .. } => f(leaf),
            Node::Compound {
                value,
                children,
                metadata,
            } => Node::Compound {
                value,
                children: children.into_iter().map(|c| c.map_leaves(f)).collect(),
                metadata,
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
