use tracing::debug;

use crate::analyzer::Ty;
use crate::error::{Pos, SyntaxError, SyntaxErrorKind};
use crate::lexer::{Interner, Keyword, Lexed, Token, TokenKind};

use super::{Node, NodeKind};

/// Recursive descent over the token stream with one token of lookahead.
///
/// Missing tokens are recorded and then treated as present, so a single
/// error never stops tree construction. Callers must not trust the tree
/// when [`Parser::parse`] returns any error.
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: &'a [Token],
    identifiers: &'a Interner,
    constants: &'a Interner,
    index: usize,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], identifiers: &'a Interner, constants: &'a Interner) -> Self {
        Self {
            tokens,
            identifiers,
            constants,
            index: 0,
            errors: vec![],
        }
    }

    pub fn from_lexed(lexed: &'a Lexed) -> Self {
        Self::new(&lexed.tokens, &lexed.identifiers, &lexed.constants)
    }

    /// The root is `None` only when the main body could not be parsed; a
    /// returned Program node always has exactly one child.
    pub fn parse(mut self) -> (Option<Node>, Vec<SyntaxError>) {
        let program = self.parse_program();
        debug!(errors = self.errors.len(), "parsing finished");
        (program, self.errors)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn is_eof(&self) -> bool {
        self.peek().map_or(true, |t| t.kind == TokenKind::Eof)
    }

    fn line(&self) -> usize {
        self.peek().map_or(0, |t| t.line)
    }

    fn error(&mut self, kind: SyntaxErrorKind) {
        let pos = self.peek().map(|t| Pos {
            line: t.line,
            column: t.column,
        });
        self.errors.push(SyntaxError { kind, pos });
    }

    fn consume_if(&mut self, f: impl Fn(&TokenKind) -> bool) -> Option<&'a Token> {
        let t = self.peek().filter(|t| f(&t.kind))?;
        self.index += 1;
        Some(t)
    }

    fn consume(&mut self, kind: &TokenKind) -> bool {
        self.consume_if(|k| k == kind).is_some()
    }

    fn consume_delimiter(&mut self, c: char) -> bool {
        self.consume(&TokenKind::Delimiter(c))
    }

    fn consume_keyword(&mut self, kw: Keyword) -> bool {
        self.consume(&TokenKind::Keyword(kw))
    }

    fn consume_any_keyword(&mut self) -> Option<Keyword> {
        match self.consume_if(|k| matches!(k, TokenKind::Keyword(_)))?.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    fn consume_ident(&mut self) -> Option<&'a str> {
        match self.consume_if(|k| matches!(k, TokenKind::Ident(_)))?.kind {
            TokenKind::Ident(i) => self.identifiers.get(i),
            _ => None,
        }
    }

    fn expect_delimiter(&mut self, c: char, missing: SyntaxErrorKind) {
        if !self.consume_delimiter(c) {
            self.error(missing);
        }
    }

    /// program = "class" ident "{" kw kw kw kw "(" kw? "[" "]" ident ")" stmt "}"
    ///
    /// The header keywords are taken positionally; only their category is checked.
    fn parse_program(&mut self) -> Option<Node> {
        if self.consume_any_keyword().is_none() {
            self.error(SyntaxErrorKind::MissingClass);
        }
        if self.consume_ident().is_none() {
            self.error(SyntaxErrorKind::MissingClassName);
        }
        self.expect_delimiter('{', SyntaxErrorKind::MissingClassOpen);
        for _ in 0..4 {
            if self.consume_any_keyword().is_none() {
                self.error(SyntaxErrorKind::MissingMainHeader);
            }
        }
        self.expect_delimiter('(', SyntaxErrorKind::MissingMainParen);
        self.consume_any_keyword();
        self.consume_delimiter('[');
        self.consume_delimiter(']');
        self.consume_ident();
        self.consume_delimiter(')');

        let body = self.parse_stmt();

        self.expect_delimiter('}', SyntaxErrorKind::MissingClassClose);

        let mut program = Node::new(NodeKind::Program, 0);
        program.push(Some(body?));
        Some(program)
    }

    /// stmt = "{" stmt* "}"
    ///      | ("int" | "String") ident ("=" expr)? ";"
    ///      | "if" "(" expr ")" stmt "else" stmt
    ///      | "while" "(" expr ")" stmt
    ///      | ident "=" expr ";"
    fn parse_stmt(&mut self) -> Option<Node> {
        let line = self.line();

        if self.consume_delimiter('{') {
            return Some(self.parse_block(line));
        }
        if self.consume_keyword(Keyword::Int) {
            return self.parse_var_decl(Ty::Int);
        }
        if self.consume_keyword(Keyword::String) {
            return self.parse_var_decl(Ty::String);
        }
        match self.consume_any_keyword() {
            Some(Keyword::If) => return Some(self.parse_if(line)),
            Some(Keyword::While) => return Some(self.parse_while(line)),
            Some(_) => {}
            None => {
                if let Some(name) = self.consume_ident() {
                    if self.consume(&TokenKind::Operator('=')) {
                        let mut assign = Node::with_value(NodeKind::Assign, name, line);
                        assign.push(self.parse_expr());
                        self.expect_delimiter(';', SyntaxErrorKind::MissingSemicolon);
                        return Some(assign);
                    }
                }
            }
        }

        self.error(SyntaxErrorKind::UnparseableStatement);
        None
    }

    /// Every iteration either closes the block or consumes at least one token.
    fn parse_block(&mut self, line: usize) -> Node {
        let mut block = Node::new(NodeKind::Block, line);
        while !self.consume_delimiter('}') {
            if self.is_eof() {
                self.error(SyntaxErrorKind::MissingCloseBrace);
                break;
            }
            let start = self.index;
            block.push(self.parse_stmt());
            if self.index == start {
                self.index += 1;
            }
        }
        block
    }

    fn parse_var_decl(&mut self, ty: Ty) -> Option<Node> {
        let line = self.line();
        let Some(name) = self.consume_ident() else {
            self.error(SyntaxErrorKind::MissingDeclIdent);
            return None;
        };

        let mut decl = Node::with_value(NodeKind::VarDecl, name, line);
        decl.ty = Some(ty);
        if self.consume(&TokenKind::Operator('=')) {
            decl.push(self.parse_expr());
        }
        self.expect_delimiter(';', SyntaxErrorKind::MissingSemicolon);
        Some(decl)
    }

    fn parse_condition(&mut self) -> Option<Node> {
        self.expect_delimiter('(', SyntaxErrorKind::MissingOpenParen);
        let cond = self.parse_expr();
        self.expect_delimiter(')', SyntaxErrorKind::MissingCloseParen);
        cond
    }

    /// A missing `else` is reported, and the next statement still becomes the else branch.
    fn parse_if(&mut self, line: usize) -> Node {
        let mut node = Node::new(NodeKind::If, line);
        node.push(self.parse_condition());
        node.push(self.parse_stmt());
        if !self.consume_keyword(Keyword::Else) {
            self.error(SyntaxErrorKind::MissingElse);
        }
        node.push(self.parse_stmt());
        node
    }

    fn parse_while(&mut self, line: usize) -> Node {
        let mut node = Node::new(NodeKind::While, line);
        node.push(self.parse_condition());
        node.push(self.parse_stmt());
        node
    }

    fn parse_expr(&mut self) -> Option<Node> {
        self.parse_relational()
    }

    /// Folds `next (op next)*` to the left, with `ops` mapping operator characters to node kinds.
    fn parse_left_assoc(
        &mut self,
        ops: &[(char, NodeKind)],
        next: fn(&mut Self) -> Option<Node>,
    ) -> Option<Node> {
        let mut left = next(self);
        loop {
            let line = self.line();
            let kind = ops
                .iter()
                .find(|(c, _)| self.consume(&TokenKind::Operator(*c)))
                .map(|(_, kind)| *kind);
            let Some(kind) = kind else {
                return left;
            };
            let right = next(self);
            left = Some(Node::binary(kind, left, right, line));
        }
    }

    /// relational = add (("<" | "=") add)*
    fn parse_relational(&mut self) -> Option<Node> {
        self.parse_left_assoc(&[('<', NodeKind::Lt), ('=', NodeKind::Eq)], Self::parse_add)
    }

    /// add = mul (("+" | "-") mul)*
    fn parse_add(&mut self) -> Option<Node> {
        self.parse_left_assoc(&[('+', NodeKind::Add), ('-', NodeKind::Sub)], Self::parse_mul)
    }

    /// mul = primary ("*" primary)*
    fn parse_mul(&mut self) -> Option<Node> {
        self.parse_left_assoc(&[('*', NodeKind::Mul)], Self::parse_primary)
    }

    /// primary = num | ident | str | "(" expr ")"
    fn parse_primary(&mut self) -> Option<Node> {
        let Some(t) = self.peek() else {
            self.error(SyntaxErrorKind::UnknownExpression);
            return None;
        };

        let (kind, text) = match t.kind {
            TokenKind::IntLiteral(i) => (NodeKind::Int, self.constants.get(i)),
            TokenKind::Ident(i) => (NodeKind::Var, self.identifiers.get(i)),
            TokenKind::StrLiteral(i) => (NodeKind::Str, self.constants.get(i)),
            TokenKind::Delimiter('(') => {
                self.index += 1;
                let expr = self.parse_expr();
                self.expect_delimiter(')', SyntaxErrorKind::MissingCloseParen);
                return expr;
            }
            _ => {
                self.error(SyntaxErrorKind::UnknownExpression);
                return None;
            }
        };

        self.index += 1;
        Some(Node::with_value(kind, text.unwrap_or_default(), t.line))
    }
}
