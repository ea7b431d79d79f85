use tracing::debug;

use crate::error::SemanticError;
use crate::parser::{Node, NodeKind};

use super::{SymbolTable, Ty};

/// Flat-scope type checker. Diagnostics are collected; the check itself never fails.
pub struct SemanticVisitor {
    symbol_table: SymbolTable,
    errors: Vec<SemanticError>,
}

impl SemanticVisitor {
    pub fn new() -> Self {
        Self {
            symbol_table: SymbolTable::new(),
            errors: vec![],
        }
    }

    /// Always returns `true` so that IR generation proceeds regardless of diagnostics.
    pub fn check(&mut self, program: &Node) -> bool {
        self.visit(program);
        debug!(
            symbols = self.symbol_table.len(),
            errors = self.errors.len(),
            "semantic check finished"
        );
        true
    }

    pub fn errors(&self) -> &[SemanticError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SemanticError> {
        self.errors
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    fn visit(&mut self, node: &Node) {
        match node.kind {
            NodeKind::VarDecl => self.visit_var_decl(node),
            NodeKind::Assign => self.visit_assign(node),
            NodeKind::Program
            | NodeKind::Block
            | NodeKind::If
            | NodeKind::While
            | NodeKind::Add
            | NodeKind::Sub
            | NodeKind::Mul
            | NodeKind::Lt
            | NodeKind::Eq
            | NodeKind::Int
            | NodeKind::Var
            | NodeKind::Str => {}
        }

        for child in &node.children {
            self.visit(child);
        }
    }

    fn visit_var_decl(&mut self, node: &Node) {
        let Some(ty) = node.ty else {
            return;
        };
        self.symbol_table.declare_var(&node.value, ty);
        if let Some(init) = node.child(0) {
            self.check_compatible(node, ty, init);
        }
    }

    fn visit_assign(&mut self, node: &Node) {
        let Some(ty) = self.symbol_table.get_var_type(&node.value) else {
            self.errors.push(SemanticError::UndefinedVariable {
                name: node.value.clone(),
                line: node.line,
            });
            return;
        };
        if let Some(rhs) = node.child(0) {
            self.check_compatible(node, ty, rhs);
        }
    }

    /// An unresolved right-hand side is not reported here.
    fn check_compatible(&mut self, node: &Node, expected: Ty, expr: &Node) {
        match self.get_type(expr) {
            Some(actual) if actual != expected => {
                self.errors.push(SemanticError::TypeMismatch {
                    name: node.value.clone(),
                    line: node.line,
                });
            }
            _ => {}
        }
    }

    /// Arithmetic and comparisons are `int` whatever their operands are.
    pub fn get_type(&self, expr: &Node) -> Option<Ty> {
        match expr.kind {
            NodeKind::Int => Some(Ty::Int),
            NodeKind::Str => Some(Ty::String),
            NodeKind::Var => self.symbol_table.get_var_type(&expr.value),
            NodeKind::Add | NodeKind::Sub | NodeKind::Mul | NodeKind::Lt | NodeKind::Eq => {
                Some(Ty::Int)
            }
            NodeKind::Program
            | NodeKind::Block
            | NodeKind::VarDecl
            | NodeKind::Assign
            | NodeKind::If
            | NodeKind::While => None,
        }
    }
}

impl Default for SemanticVisitor {
    fn default() -> Self {
        Self::new()
    }
}
