use std::fmt::Write;

use crate::parser::Node;

/// Renders the tree as a Graphviz digraph. Nodes are numbered in pre-order.
pub fn to_dot(root: &Node) -> String {
    let mut out = String::new();
    out.push_str("digraph AST {\n");
    out.push_str("  node [shape=box, style=filled, fillcolor=lightgray];\n");
    let mut next_id = 0;
    write_node(&mut out, root, None, &mut next_id);
    out.push_str("}\n");
    out
}

fn write_node(out: &mut String, node: &Node, parent: Option<usize>, next_id: &mut usize) {
    let id = *next_id;
    *next_id += 1;

    let mut label = node.kind.to_string();
    if !node.value.is_empty() {
        label.push_str("\\n");
        label.push_str(&escape(&node.value));
    }
    // Writing to a String cannot fail.
    let _ = writeln!(out, "  node{id} [label=\"{label}\"]");
    if let Some(parent) = parent {
        let _ = writeln!(out, "  node{parent} -> node{id}");
    }

    for child in &node.children {
        write_node(out, child, Some(id), next_id);
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
