use tracing::debug;

use crate::error::{LexError, LexErrorKind};

use super::{
    token::{DELIMITERS, KEYWORDS, OPERATORS},
    Interner, Token, TokenKind,
};

/// Everything a lexing run produces. The tables belong to the caller once returned.
#[derive(Clone, Debug, Default)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub identifiers: Interner,
    pub constants: Interner,
    pub errors: Vec<LexError>,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(is_ident_start) && chars.all(is_ident_continue)
}

#[derive(Debug, Default)]
pub struct Lexer {
    out: Lexed,
    line: usize,
    index: usize,
}

impl Lexer {
    fn new() -> Self {
        Self::default()
    }

    fn column(&self) -> usize {
        self.index + 1
    }

    fn new_token(&mut self, kind: TokenKind, column: usize) {
        self.out.tokens.push(Token::new(kind, self.line, column));
    }

    fn error(&mut self, kind: LexErrorKind, column: usize, ch: char) {
        self.out.errors.push(LexError {
            kind,
            line: self.line,
            column,
            ch,
        });
    }

    fn take_while(&mut self, chars: &[char], f: impl Fn(char) -> bool) -> String {
        let s: String = chars[self.index..].iter().take_while(|&&c| f(c)).collect();
        self.index += s.chars().count();
        s
    }

    fn parse_identifier(&mut self, chars: &[char]) {
        let column = self.column();
        let s = self.take_while(chars, is_ident_continue);

        if let Some(kw) = KEYWORDS.get(s.as_str()) {
            self.new_token(TokenKind::Keyword(*kw), column);
        } else if !is_valid_identifier(&s) {
            let last = s.chars().last().unwrap_or(chars[column - 1]);
            self.error(LexErrorKind::InvalidIdentifier, column, last);
        } else {
            let index = self.out.identifiers.intern(&s);
            self.new_token(TokenKind::Ident(index), column);
        }
    }

    fn parse_number(&mut self, chars: &[char]) {
        let column = self.column();
        let leading_zero = chars[self.index] == '0'
            && chars.get(self.index + 1).is_some_and(|c| c.is_ascii_digit());
        if leading_zero {
            self.error(LexErrorKind::InvalidNumber, column, '0');
        }

        let s = self.take_while(chars, |c| c.is_ascii_digit());

        if let Some(&c) = chars.get(self.index).filter(|&&c| is_ident_start(c)) {
            self.error(LexErrorKind::InvalidIdentifier, column, c);
            self.take_while(chars, is_ident_continue);
            return;
        }

        if !leading_zero {
            let index = self.out.constants.intern(&s);
            self.new_token(TokenKind::IntLiteral(index), column);
        }
    }

    fn parse_string(&mut self, chars: &[char]) {
        let column = self.column();
        self.index += 1;

        let s = self.take_while(chars, |c| c != '"');
        if self.index >= chars.len() {
            self.error(LexErrorKind::UnterminatedString, column, '"');
            return;
        }
        self.index += 1;

        let index = self.out.constants.intern(&s);
        self.new_token(TokenKind::StrLiteral(index), column);
    }

    fn tokenize_line(&mut self, line: &str) {
        let chars: Vec<_> = line.chars().collect();
        self.index = 0;

        while self.index < chars.len() {
            let c = chars[self.index];
            let column = self.column();

            if c.is_whitespace() {
                self.index += 1;
            } else if is_ident_start(c) {
                self.parse_identifier(&chars);
            } else if c.is_ascii_digit() {
                self.parse_number(&chars);
            } else if c == '"' {
                self.parse_string(&chars);
            } else if OPERATORS.contains(&c) {
                self.new_token(TokenKind::Operator(c), column);
                self.index += 1;
            } else if DELIMITERS.contains(&c) {
                self.new_token(TokenKind::Delimiter(c), column);
                self.index += 1;
            } else if c == '$' {
                self.new_token(TokenKind::Eof, column);
                self.index += 1;
            } else if c == '/' && chars.get(self.index + 1) == Some(&'/') {
                break;
            } else {
                self.error(LexErrorKind::UnknownChar, column, c);
                self.index += 1;
            }
        }
    }

    /// Scans `source` line by line. Errors are collected, never fatal.
    pub fn tokenize(source: &str) -> Lexed {
        let mut lexer = Lexer::new();
        for (i, line) in source.lines().enumerate() {
            lexer.line = i + 1;
            lexer.tokenize_line(line);
        }

        debug!(
            tokens = lexer.out.tokens.len(),
            identifiers = lexer.out.identifiers.len(),
            constants = lexer.out.constants.len(),
            errors = lexer.out.errors.len(),
            "lexing finished"
        );
        lexer.out
    }
}
