use tracing::debug;

use crate::parser::{Node, NodeKind};

use super::{IrOp, Quadruple};

/// Lowers a checked AST to quadruples in post-order.
///
/// `If` and `While` only recurse into their children; no branch or label
/// instructions are emitted for them.
#[derive(Debug, Default)]
pub struct IrGen {
    temp_index: usize,
    quads: Vec<Quadruple>,
}

impl IrGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Temporaries restart at `t0` on every call, so the output is repeatable.
    pub fn generate(&mut self, program: &Node) -> Vec<Quadruple> {
        self.temp_index = 0;
        self.quads.clear();
        self.gen_node(program);
        debug!(
            quads = self.quads.len(),
            temps = self.temp_index,
            "IR generation finished"
        );
        std::mem::take(&mut self.quads)
    }

    fn new_temp(&mut self) -> String {
        let s = format!("t{}", self.temp_index);
        self.temp_index += 1;
        s
    }

    fn emit(&mut self, op: IrOp, arg1: &str, arg2: &str, result: &str) {
        self.quads.push(Quadruple::new(op, arg1, arg2, result));
    }

    fn gen_operand(&mut self, node: Option<&Node>) -> String {
        node.map(|n| self.gen_node(n)).unwrap_or_default()
    }

    /// Returns the name holding the node's value, or an empty string for statements.
    fn gen_node(&mut self, node: &Node) -> String {
        match node.kind {
            NodeKind::Int | NodeKind::Var | NodeKind::Str => node.value.clone(),
            NodeKind::Add | NodeKind::Sub | NodeKind::Mul | NodeKind::Lt | NodeKind::Eq => {
                self.gen_binop(node)
            }
            NodeKind::Assign => {
                let rhs = self.gen_operand(node.child(0));
                self.emit(IrOp::Assign, &rhs, "", &node.value);
                node.value.clone()
            }
            NodeKind::VarDecl => {
                if let Some(init) = node.child(0) {
                    let rhs = self.gen_node(init);
                    self.emit(IrOp::Assign, &rhs, "", &node.value);
                }
                String::new()
            }
            NodeKind::Program | NodeKind::Block | NodeKind::If | NodeKind::While => {
                for child in &node.children {
                    self.gen_node(child);
                }
                String::new()
            }
        }
    }

    fn gen_binop(&mut self, node: &Node) -> String {
        let left = self.gen_operand(node.child(0));
        let right = self.gen_operand(node.child(1));
        let temp = self.new_temp();
        if let Some(op) = IrOp::from_node_kind(node.kind) {
            self.emit(op, &left, &right, &temp);
        }
        temp
    }
}
