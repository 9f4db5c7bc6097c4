//! # Tree Printing
//!
//! Renders program trees for diagnostics:
//!
//! - [`print_flat`]: space-joined values of a node sequence
//! - [`print_compact`]: the whole tree on one line
//! - [`print_wrapped`]: column-aware layout used in error output
//!
//! The wrapped layout packs as many children as fit onto the operator's line
//! and puts the rest on their own, indented lines followed by a lone `)`.
//! Children of the block operator (`seq` by default) never share the
//! operator's line.

use crate::ast::Node;
use crate::config::PrinterConfig;
use crate::text::{indent_lines_by, join_lines};
use unicode_width::UnicodeWidthStr;

// ============================================================================
// SIMPLE RENDERINGS
// ============================================================================

/// Space-joined values of a flat node sequence. No recursion.
pub fn print_flat(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(Node::value)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a tree on a single line.
///
/// # Examples
///
/// ```rust
/// use treelit::ast::{Metadata, Node};
/// use treelit::printer::print_compact;
/// let m = Metadata::default();
/// let tree = Node::compound("add", vec![Node::leaf("1", m.clone()), Node::leaf("x", m.clone())], m);
/// assert_eq!(print_compact(&tree), "(add 1 x)");
/// ```
pub fn print_compact(tree: &Node) -> String {
    match tree {
        Node::Leaf { value, .. } => value.clone(),
        Node::Compound {
            value, children, ..
        } => {
            let mut out = format!("({}", value);
            for child in children {
                out.push(' ');
                out.push_str(&print_compact(child));
            }
            out.push(')');
            out
        }
    }
}

/// Number of leaves in a tree.
pub fn tree_size(tree: &Node) -> usize {
    match tree {
        Node::Leaf { .. } => 1,
        Node::Compound { children, .. } => children.iter().map(tree_size).sum(),
    }
}

/// Renders a tree with the default 80-column layout.
pub fn print_wrapped(tree: &Node, include_metadata: bool) -> String {
    Printer::default().wrapped(tree, include_metadata)
}

// ============================================================================
// WRAPPED RENDERING
// ============================================================================

/// Column-aware renderer parameterized by a [`PrinterConfig`].
#[derive(Debug, Clone, Default)]
pub struct Printer {
    config: PrinterConfig,
}

impl Printer {
    pub fn new(config: PrinterConfig) -> Self {
        Self { config }
    }

    pub fn wrapped(&self, tree: &Node, include_metadata: bool) -> String {
        self.wrapped_at(tree, include_metadata, self.config.width)
    }

    /// Renders `tree` so its lines stay below `budget` columns.
    ///
    /// Children on their own lines are indented, so they get `budget`
    /// minus one indent step.
    fn wrapped_at(&self, tree: &Node, include_metadata: bool, budget: usize) -> String {
        match tree {
            Node::Leaf { value, .. } => value.clone(),
            Node::Compound {
                value,
                children,
                metadata,
            } => {
                let child_budget = budget.saturating_sub(self.config.indent);
                let rendered: Vec<String> = children
                    .iter()
                    .map(|child| self.wrapped_at(child, include_metadata, child_budget))
                    .collect();

                let mut line = String::from("(");
                if include_metadata {
                    line.push_str(&format!(
                        "{} {}:{}: ",
                        metadata.file, metadata.line, metadata.column
                    ));
                }
                line.push_str(value);

                let packed = if *value == self.config.block_operator {
                    0
                } else {
                    pack(&mut line, &rendered, budget)
                };

                if packed == rendered.len() {
                    line.push(')');
                    return line;
                }

                let rest = indent_lines_by(&join_lines(&rendered[packed..]), self.config.indent);
                format!("{}\n{}\n)", line, rest)
            }
        }
    }
}

/// Appends children to `line` while they fit, returning how many were packed.
fn pack(line: &mut String, rendered: &[String], budget: usize) -> usize {
    let mut width = line.width();
    let mut packed = 0;
    for child in rendered {
        if child.contains('\n') {
            break;
        }
        let next = width + 1 + child.width();
        if next >= budget {
            break;
        }
        line.push(' ');
        line.push_str(child);
        width = next;
        packed += 1;
    }
    packed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Metadata;

    fn leaf(v: &str) -> Node {
        Node::leaf(v, Metadata::default())
    }

    fn node(op: &str, children: Vec<Node>) -> Node {
        Node::compound(op, children, Metadata::default())
    }

    #[test]
    fn flat_joins_values() {
        assert_eq!(print_flat(&[leaf("a"), node("b", vec![]), leaf("c")]), "a b c");
        assert_eq!(print_flat(&[]), "");
    }

    #[test]
    fn compact_empty_compound() {
        assert_eq!(print_compact(&node("seq", vec![])), "(seq)");
    }

    #[test]
    fn size_counts_leaves_only() {
        let tree = node("a", vec![leaf("1"), node("b", vec![leaf("2"), leaf("3")]), node("c", vec![])]);
        assert_eq!(tree_size(&tree), 3);
        assert_eq!(tree_size(&leaf("x")), 1);
    }

    #[test]
    fn short_form_stays_on_one_line() {
        let tree = node("add", vec![leaf("1"), node("mul", vec![leaf("2"), leaf("3")])]);
        assert_eq!(print_wrapped(&tree, false), "(add 1 (mul 2 3))");
    }

    #[test]
    fn empty_compound_wraps_to_parens() {
        assert_eq!(print_wrapped(&node("stop", vec![]), false), "(stop)");
        assert_eq!(print_wrapped(&node("seq", vec![]), false), "(seq)");
    }

    #[test]
    fn seq_children_get_own_lines() {
        let tree = node("seq", vec![leaf("a"), leaf("b")]);
        assert_eq!(print_wrapped(&tree, false), "(seq\n    a\n    b\n)");
    }

    #[test]
    fn long_line_spills_remaining_children() {
        let long = "x".repeat(40);
        let tree = node("f", vec![leaf(&long), leaf(&long), leaf("y")]);
        let expected = format!("(f {}\n    {}\n    y\n)", long, long);
        assert_eq!(print_wrapped(&tree, false), expected);
    }

    #[test]
    fn multiline_child_stops_packing() {
        let tree = node("if", vec![leaf("c"), node("seq", vec![leaf("a")]), leaf("z")]);
        assert_eq!(
            print_wrapped(&tree, false),
            "(if c\n    (seq\n        a\n    )\n    z\n)"
        );
    }

    #[test]
    fn nested_child_wraps_within_its_indented_width() {
        // Alone, (b y40 z34) is 79 columns; indented under (a it must split.
        let y = "y".repeat(40);
        let z = "z".repeat(34);
        let tree = node("a", vec![node("b", vec![leaf(&y), leaf(&z)])]);
        let out = print_wrapped(&tree, false);
        assert_eq!(out, format!("(a\n    (b {}\n        {}\n    )\n)", y, z));
        assert!(out.lines().all(|line| line.len() <= 80));
    }

    #[test]
    fn metadata_prefix_on_compounds_only() {
        let meta = Metadata::new("a.se", 3, 14);
        let tree = Node::compound("set", vec![Node::leaf("x", meta.clone())], meta);
        assert_eq!(print_wrapped(&tree, true), "(a.se 3:14: set x)");
    }

    #[test]
    fn custom_width_applies() {
        let printer = Printer::new(PrinterConfig {
            width: 10,
            ..PrinterConfig::default()
        });
        let tree = node("op", vec![leaf("aaa"), leaf("bbb"), leaf("ccc")]);
        assert_eq!(printer.wrapped(&tree, false), "(op aaa\n    bbb\n    ccc\n)");
    }
}
