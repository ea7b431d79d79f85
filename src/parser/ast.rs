use std::fmt;

use crate::analyzer::Ty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Block,
    VarDecl,
    Assign,
    If,
    While,
    Add,
    Sub,
    Mul,
    Lt,
    Eq,
    Int,
    Var,
    Str,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Block => "Block",
            NodeKind::VarDecl => "VarDecl",
            NodeKind::Assign => "Assign",
            NodeKind::If => "If",
            NodeKind::While => "While",
            NodeKind::Add => "Add",
            NodeKind::Sub => "Sub",
            NodeKind::Mul => "Mul",
            NodeKind::Lt => "Lt",
            NodeKind::Eq => "Eq",
            NodeKind::Int => "Int",
            NodeKind::Var => "Var",
            NodeKind::Str => "Str",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `value` holds the variable name for `VarDecl`/`Assign`/`Var` and the literal
/// text for `Int`/`Str`; it is empty otherwise. `ty` is only set on `VarDecl`.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub value: String,
    pub ty: Option<Ty>,
    pub line: usize,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, line: usize) -> Self {
        Self {
            kind,
            value: String::new(),
            ty: None,
            line,
            children: vec![],
        }
    }

    pub fn with_value(kind: NodeKind, value: &str, line: usize) -> Self {
        Self {
            value: value.to_string(),
            ..Self::new(kind, line)
        }
    }

    pub fn binary(kind: NodeKind, left: Option<Node>, right: Option<Node>, line: usize) -> Self {
        let mut node = Self::new(kind, line);
        node.children.extend(left);
        node.children.extend(right);
        node
    }

    pub fn push(&mut self, child: Option<Node>) {
        self.children.extend(child);
    }

    pub fn child(&self, i: usize) -> Option<&Node> {
        self.children.get(i)
    }
}
