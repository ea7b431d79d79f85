use std::fmt;

use crate::parser::NodeKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IrOp {
    Add,
    Sub,
    Mul,
    Lt,
    Eq,
    Assign,
}

impl IrOp {
    pub fn from_node_kind(kind: NodeKind) -> Option<Self> {
        match kind {
            NodeKind::Add => Some(IrOp::Add),
            NodeKind::Sub => Some(IrOp::Sub),
            NodeKind::Mul => Some(IrOp::Mul),
            NodeKind::Lt => Some(IrOp::Lt),
            NodeKind::Eq => Some(IrOp::Eq),
            _ => None,
        }
    }
}

impl fmt::Display for IrOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IrOp::Add => "Add",
            IrOp::Sub => "Sub",
            IrOp::Mul => "Mul",
            IrOp::Lt => "Lt",
            IrOp::Eq => "Eq",
            IrOp::Assign => "=",
        };
        f.write_str(s)
    }
}

/// `(op, arg1, arg2, result)`. `arg2` is empty for assignments.
#[derive(Clone, Debug, PartialEq)]
pub struct Quadruple {
    pub op: IrOp,
    pub arg1: String,
    pub arg2: String,
    pub result: String,
}

impl Quadruple {
    pub fn new(op: IrOp, arg1: &str, arg2: &str, result: &str) -> Self {
        Self {
            op,
            arg1: arg1.to_string(),
            arg2: arg2.to_string(),
            result: result.to_string(),
        }
    }
}

/// Four space-separated fields; empty fields stay empty.
impl fmt::Display for Quadruple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.op, self.arg1, self.arg2, self.result)
    }
}
