use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unknown character")]
    UnknownChar,
    #[error("invalid identifier")]
    InvalidIdentifier,
    #[error("invalid number")]
    InvalidNumber,
    #[error("unterminated string")]
    UnterminatedString,
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("line {line}, column {column}: {kind} '{ch}'")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
    pub column: usize,
    /// The character that triggered the error.
    pub ch: char,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("missing `class`")]
    MissingClass,
    #[error("missing class name")]
    MissingClassName,
    #[error("missing `{{` opening the class body")]
    MissingClassOpen,
    #[error("missing keyword in `public static void main` header")]
    MissingMainHeader,
    #[error("missing `(` after `main`")]
    MissingMainParen,
    #[error("missing `}}` closing the class body")]
    MissingClassClose,
    #[error("missing `}}` closing the block")]
    MissingCloseBrace,
    #[error("missing `(`")]
    MissingOpenParen,
    #[error("missing `)`")]
    MissingCloseParen,
    #[error("missing identifier in variable declaration")]
    MissingDeclIdent,
    #[error("missing `;`")]
    MissingSemicolon,
    #[error("missing `else`")]
    MissingElse,
    #[error("unrecognized expression")]
    UnknownExpression,
    #[error("unparseable statement")]
    UnparseableStatement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
}

/// `pos` is `None` when the error was detected past the last token.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub pos: Option<Pos>,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(Pos { line, column }) = self.pos {
            write!(f, " (line {}, column {})", line, column)?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SemanticError {
    #[error("type mismatch for variable `{name}` (line {line})")]
    TypeMismatch { name: String, line: usize },
    #[error("undefined variable `{name}` (line {line})")]
    UndefinedVariable { name: String, line: usize },
}

/// Failures of the driver itself, as opposed to diagnostics about the program.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read input")]
    Input(#[source] clap_stdin::StdinError),

    #[error("Failed to create output directory: {0}")]
    CreateDir(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}
