pub mod analyzer;
pub mod diagnostic;
pub mod dot;
pub mod error;
pub mod irgen;
pub mod lexer;
pub mod output;
pub mod parser;

use analyzer::SemanticVisitor;
use diagnostic::Stage;
use error::{SemanticError, SyntaxError};
use irgen::{IrGen, Quadruple};
use lexer::{Lexed, Lexer};
use parser::{Node, Parser};

/// Results of every stage that ran. Semantic checking and IR generation are
/// skipped when the AST is absent or any syntax error was recorded.
#[derive(Debug)]
pub struct Compilation {
    pub lexed: Lexed,
    pub ast: Option<Node>,
    pub syntax_errors: Vec<SyntaxError>,
    pub semantic_errors: Vec<SemanticError>,
    pub ir: Option<Vec<Quadruple>>,
}

impl Compilation {
    pub fn is_well_formed(&self) -> bool {
        self.ast.is_some() && self.syntax_errors.is_empty()
    }

    /// Well-formed AST, only when it is safe to use downstream.
    pub fn checked_ast(&self) -> Option<&Node> {
        self.ast.as_ref().filter(|_| self.syntax_errors.is_empty())
    }

    pub fn report(&self) {
        diagnostic::report_all(Stage::Lexical, &self.lexed.errors);
        diagnostic::report_all(Stage::Syntax, &self.syntax_errors);
        diagnostic::report_all(Stage::Semantic, &self.semantic_errors);
    }
}

pub fn compile(source: &str) -> Compilation {
    let lexed = Lexer::tokenize(source);
    let (ast, syntax_errors) = Parser::from_lexed(&lexed).parse();

    let mut compilation = Compilation {
        lexed,
        ast,
        syntax_errors,
        semantic_errors: vec![],
        ir: None,
    };

    if let Some(ast) = compilation.checked_ast() {
        let mut visitor = SemanticVisitor::new();
        if visitor.check(ast) {
            let ir = IrGen::new().generate(ast);
            compilation.semantic_errors = visitor.into_errors();
            compilation.ir = Some(ir);
        }
    }

    compilation
}
