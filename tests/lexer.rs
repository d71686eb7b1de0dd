use cfgkit::comments::strip_comments;
use cfgkit::lexer::{tokenize, TokenKind};
mod common;

#[test]
fn test_strip_comments() {
    let stripped = strip_comments(&common::read_test_file("c/sample.c"));

    assert!(!stripped.contains("running total"));
    assert!(!stripped.contains("Block comments"));
    assert!(stripped.contains("int sum(int n)"));
    assert!(stripped.contains("total = %d"));
}

#[test]
fn test_tokenize_sample() {
    let stripped = strip_comments(&common::read_test_file("c/sample.c"));
    let tokens = tokenize(&stripped);

    assert_eq!(tokens[0].kind, TokenKind::Preprocessor);
    assert_eq!(tokens[0].lexeme, "#include <stdio.h>");
    assert_eq!(tokens[0].line, 1);

    // The multi-line block comment collapses, so the function header
    // lands on line 4 of the stripped source
    let sum = tokens.iter().find(|t| t.lexeme == "sum").unwrap();
    assert_eq!(sum.kind, TokenKind::Identifier);
    assert_eq!(sum.line, 4);

    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::Operator && t.lexeme == "<="));
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::Operator && t.lexeme == "++"));
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::Operator && t.lexeme == "+="));

    let s = tokens
        .iter()
        .find(|t| t.kind == TokenKind::StringLiteral)
        .unwrap();
    assert_eq!(s.lexeme, "\"total = %d\\n\"");
    assert_eq!(s.line, 9);

    let last = tokens.last().unwrap();
    assert_eq!(last.lexeme, "}");
    assert_eq!(last.kind, TokenKind::Separator);
    assert_eq!(last.line, 11);

    assert!(!tokens.iter().any(|t| t.lexeme.contains("running")));
}

#[test]
fn test_tokenize_without_stripping() {
    // An unstripped line comment tokenizes as two division operators
    let tokens = tokenize("x / y // note");
    let slashes = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator && t.lexeme == "/")
        .count();
    assert_eq!(slashes, 3);
}
