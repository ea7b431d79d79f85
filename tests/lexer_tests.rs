use mjc::error::LexErrorKind;
use mjc::lexer::{Keyword, Lexer, TokenKind};
use mjc::output::{table_listing, token_listing};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize(source)
        .tokens
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn error_kinds(source: &str) -> Vec<LexErrorKind> {
    Lexer::tokenize(source)
        .errors
        .into_iter()
        .map(|e| e.kind)
        .collect()
}

#[test]
fn keywords_operators_and_delimiters() {
    assert_eq!(
        kinds("if (x < 1) { } else while"),
        vec![
            TokenKind::Keyword(Keyword::If),
            TokenKind::Delimiter('('),
            TokenKind::Ident(0),
            TokenKind::Operator('<'),
            TokenKind::IntLiteral(0),
            TokenKind::Delimiter(')'),
            TokenKind::Delimiter('{'),
            TokenKind::Delimiter('}'),
            TokenKind::Keyword(Keyword::Else),
            TokenKind::Keyword(Keyword::While),
        ]
    );
}

#[test]
fn keywords_are_case_sensitive() {
    let lexed = Lexer::tokenize("String string Int int");
    let k: Vec<_> = lexed.tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(
        k,
        vec![
            TokenKind::Keyword(Keyword::String),
            TokenKind::Ident(0),
            TokenKind::Ident(1),
            TokenKind::Keyword(Keyword::Int),
        ]
    );
    assert_eq!(lexed.identifiers.get(0), Some("string"));
    assert_eq!(lexed.identifiers.get(1), Some("Int"));
}

#[test]
fn keyword_codes_follow_declaration_order() {
    assert_eq!(Keyword::Class.code(), 0);
    assert_eq!(Keyword::If.code(), 5);
    assert_eq!(Keyword::String.code(), 11);
    assert_eq!(Keyword::Int.code(), 12);
}

#[test]
fn identifiers_are_interned_once() {
    let lexed = Lexer::tokenize("a b a\nb _c1 a");
    let k: Vec<_> = lexed.tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(
        k,
        vec![
            TokenKind::Ident(0),
            TokenKind::Ident(1),
            TokenKind::Ident(0),
            TokenKind::Ident(1),
            TokenKind::Ident(2),
            TokenKind::Ident(0),
        ]
    );
    assert_eq!(lexed.identifiers.len(), 3);
    assert_eq!(lexed.identifiers.get(2), Some("_c1"));
}

#[test]
fn numbers_and_strings_share_the_constant_table() {
    let lexed = Lexer::tokenize("42 \"hi\" 42 \"42\"");
    let k: Vec<_> = lexed.tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(
        k,
        vec![
            TokenKind::IntLiteral(0),
            TokenKind::StrLiteral(1),
            TokenKind::IntLiteral(0),
            TokenKind::StrLiteral(0),
        ]
    );
    assert_eq!(lexed.constants.len(), 2);
    assert!(lexed.errors.is_empty());
}

#[test]
fn leading_zero_is_an_invalid_number() {
    let lexed = Lexer::tokenize("int a = 01;");
    assert_eq!(lexed.errors.len(), 1);
    assert_eq!(lexed.errors[0].kind, LexErrorKind::InvalidNumber);
    assert_eq!(lexed.errors[0].column, 9);
    assert!(lexed
        .tokens
        .iter()
        .all(|t| !matches!(t.kind, TokenKind::IntLiteral(_))));
    assert_eq!(lexed.tokens.last().map(|t| &t.kind), Some(&TokenKind::Delimiter(';')));
}

#[test]
fn single_zero_is_fine() {
    assert_eq!(kinds("0"), vec![TokenKind::IntLiteral(0)]);
    assert!(error_kinds("0 10 100").is_empty());
}

#[test]
fn digits_followed_by_letters_are_an_invalid_identifier() {
    let lexed = Lexer::tokenize("12x_y3 + 1");
    assert_eq!(lexed.errors.len(), 1);
    assert_eq!(lexed.errors[0].kind, LexErrorKind::InvalidIdentifier);
    assert_eq!(lexed.errors[0].ch, 'x');
    let k: Vec<_> = lexed.tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(k, vec![TokenKind::Operator('+'), TokenKind::IntLiteral(0)]);
    assert_eq!(lexed.constants.get(0), Some("1"));
    assert!(lexed.identifiers.is_empty());
}

#[test]
fn unterminated_string_reports_once() {
    let lexed = Lexer::tokenize("s = \"abc\nx");
    assert_eq!(error_kinds("s = \"abc"), vec![LexErrorKind::UnterminatedString]);
    assert!(lexed
        .tokens
        .iter()
        .all(|t| !matches!(t.kind, TokenKind::StrLiteral(_))));
    assert_eq!(lexed.errors[0].line, 1);
    assert_eq!(lexed.errors[0].column, 5);
    // The next line is scanned normally.
    assert_eq!(lexed.tokens.last().map(|t| t.line), Some(2));
}

#[test]
fn comments_and_unknown_characters() {
    let lexed = Lexer::tokenize("x // y = 1\n# / z");
    let k: Vec<_> = lexed.tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(k, vec![TokenKind::Ident(0), TokenKind::Ident(1)]);
    let errors: Vec<_> = lexed.errors.iter().map(|e| (e.kind, e.ch)).collect();
    assert_eq!(
        errors,
        vec![
            (LexErrorKind::UnknownChar, '#'),
            (LexErrorKind::UnknownChar, '/'),
        ]
    );
}

#[test]
fn dollar_is_an_explicit_end_of_file() {
    let lexed = Lexer::tokenize("}$");
    assert_eq!(lexed.tokens.len(), 2);
    assert_eq!(lexed.tokens[1].kind, TokenKind::Eof);
    assert_eq!(lexed.tokens[1].type_code(), 8);
    assert_eq!(lexed.tokens[1].value(), -1);
    assert_eq!(lexed.tokens[1].column, 2);
}

#[test]
fn lines_and_columns_are_one_based() {
    let lexed = Lexer::tokenize("int x;\n  x = \"a b\";");
    let pos: Vec<_> = lexed.tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(
        pos,
        vec![(1, 1), (1, 5), (1, 6), (2, 3), (2, 5), (2, 7), (2, 12)]
    );
}

#[test]
fn listings() {
    let lexed = Lexer::tokenize("int x;\nx = \"s\";");
    assert_eq!(
        token_listing(&lexed.tokens),
        "1 12 1 1\n2 0 1 5\n6 59 1 6\n2 0 2 1\n5 61 2 3\n4 0 2 5\n6 59 2 8\n"
    );
    assert_eq!(table_listing(&lexed.identifiers), "0: x\n");
    assert_eq!(table_listing(&lexed.constants), "0: s\n");
}
