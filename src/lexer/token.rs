use phf::phf_map;

pub static KEYWORDS: phf::Map<&str, Keyword> = phf_map! {
    "class" => Keyword::Class,
    "public" => Keyword::Public,
    "static" => Keyword::Static,
    "void" => Keyword::Void,
    "main" => Keyword::Main,
    "if" => Keyword::If,
    "else" => Keyword::Else,
    "while" => Keyword::While,
    "return" => Keyword::Return,
    "true" => Keyword::True,
    "false" => Keyword::False,
    "String" => Keyword::String,
    "int" => Keyword::Int,
};

pub const OPERATORS: [char; 5] = ['+', '-', '*', '<', '='];
pub const DELIMITERS: [char; 8] = ['{', '}', '(', ')', '[', ']', ';', ','];

/// Reserved words. The discriminant is the keyword code written to the token listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    Class = 0,
    Public,
    Static,
    Void,
    Main,
    If,
    Else,
    While,
    Return,
    True,
    False,
    String,
    Int,
}

impl Keyword {
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Keyword(Keyword),
    /// Index into the identifier table.
    Ident(usize),
    /// Index into the constant table.
    IntLiteral(usize),
    /// Index into the constant table.
    StrLiteral(usize),
    Operator(char),
    Delimiter(char),
    /// Explicit `$` marker, not stream exhaustion.
    Eof,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// Category code used by the token listing. `7` belongs to the error
    /// category, which never reaches the stream.
    pub fn type_code(&self) -> u8 {
        match self.kind {
            TokenKind::Keyword(_) => 1,
            TokenKind::Ident(_) => 2,
            TokenKind::IntLiteral(_) => 3,
            TokenKind::StrLiteral(_) => 4,
            TokenKind::Operator(_) => 5,
            TokenKind::Delimiter(_) => 6,
            TokenKind::Eof => 8,
        }
    }

    pub fn value(&self) -> i64 {
        match self.kind {
            TokenKind::Keyword(kw) => kw.code() as i64,
            TokenKind::Ident(i) | TokenKind::IntLiteral(i) | TokenKind::StrLiteral(i) => i as i64,
            TokenKind::Operator(c) | TokenKind::Delimiter(c) => c as i64,
            TokenKind::Eof => -1,
        }
    }
}
