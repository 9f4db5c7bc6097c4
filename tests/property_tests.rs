//! Property tests for the line utilities, byte encoder and printer.

use proptest::prelude::*;
use treelit::ast::{Metadata, Node};
use treelit::bytes::to_bytes;
use treelit::decimal::Decimal;
use treelit::literal::canonicalize;
use treelit::printer::{print_compact, print_wrapped, tree_size};
use treelit::text::{join_lines, split_lines};

fn minimal_bytes(n: u64) -> usize {
    let bits = 64 - n.leading_zeros() as usize;
    bits.div_ceil(8).max(1)
}

fn arb_tree() -> impl Strategy<Value = Node> {
    let leaf = "[a-z0-9]{1,12}".prop_map(|v| Node::leaf(v, Metadata::default()));
    leaf.prop_recursive(4, 48, 6, |inner| {
        (
            prop_oneof![Just("seq".to_string()), "[a-z]{1,8}"],
            prop::collection::vec(inner, 0..6),
        )
            .prop_map(|(op, children)| Node::compound(op, children, Metadata::default()))
    })
}

/// True when every leaf, and every bare `(op)`, fits the columns left at its depth.
fn fits_budget(node: &Node, budget: usize) -> bool {
    match node {
        Node::Leaf { value, .. } => value.len() <= budget,
        Node::Compound { value, children, .. } => {
            value.len() + 2 <= budget
                && children.iter().all(|c| fits_budget(c, budget.saturating_sub(4)))
        }
    }
}

fn reversed(node: Node) -> Node {
    match node {
        Node::Compound {
            value,
            children,
            metadata,
        } => Node::compound(value, children.into_iter().rev().map(reversed).collect(), metadata),
        leaf => leaf,
    }
}

proptest! {
    #[test]
    fn split_then_join_is_identity(s in "[a-z \\n]{0,40}") {
        prop_assert_eq!(join_lines(&split_lines(&s)), s);
    }

    #[test]
    fn byte_length_and_value(n in any::<u64>(), min_len in 0usize..12) {
        let bytes = to_bytes(&Decimal::from(n), &Metadata::default(), min_len);
        prop_assert_eq!(bytes.len(), min_len.max(minimal_bytes(n)));
        let rebuilt = bytes.iter().fold(0u128, |acc, b| {
            acc * 256 + b.value().parse::<u128>().unwrap()
        });
        prop_assert_eq!(rebuilt, n as u128);
    }

    #[test]
    fn decimal_literals_canonicalize_to_themselves(n in any::<u64>()) {
        prop_assert_eq!(canonicalize(&n.to_string()).unwrap().to_u64(), Some(n));
    }

    #[test]
    fn hex_literals_match_native_parse(n in any::<u64>()) {
        let literal = format!("0x{:x}", n);
        prop_assert_eq!(canonicalize(&literal).unwrap().to_u64(), Some(n));
    }

    #[test]
    fn compact_is_single_line(tree in arb_tree()) {
        prop_assert!(!print_compact(&tree).contains('\n'));
    }

    #[test]
    fn seq_never_packs_children(children in prop::collection::vec(arb_tree(), 1..5)) {
        let tree = Node::compound("seq", children, Metadata::default());
        let out = print_wrapped(&tree, false);
        prop_assert_eq!(out.lines().next(), Some("(seq"));
    }

    #[test]
    fn size_ignores_sibling_order(tree in arb_tree()) {
        prop_assert_eq!(tree_size(&reversed(tree.clone())), tree_size(&tree));
    }

    #[test]
    fn nested_forms_fit_in_80_columns(tree in arb_tree()) {
        prop_assume!(fits_budget(&tree, 80));
        let out = print_wrapped(&tree, false);
        for line in out.lines() {
            prop_assert!(line.len() <= 80, "line too long: {:?}", line);
        }
    }

    #[test]
    fn wide_flat_forms_fit_in_80_columns(leaves in prop::collection::vec("[a-z]{1,40}", 0..30)) {
        let children = leaves
            .into_iter()
            .map(|v| Node::leaf(v, Metadata::default()))
            .collect();
        let tree = Node::compound("op", vec![Node::compound("inner", children, Metadata::default())], Metadata::default());
        let out = print_wrapped(&tree, false);
        for line in out.lines() {
            prop_assert!(line.len() <= 80, "line too long: {:?}", line);
        }
    }
}
