use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// The lexical class of a C-like token
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    StringLiteral,
    CharLiteral,
    Operator,
    Separator,
    Preprocessor,
    Unknown,
}

impl fmt::Display for TokenKind {
    /// Formats the token kind using the given formatter
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Preprocessor => "PREPROCESSOR",
            TokenKind::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
/// A classified token with its lexeme and one-based source line
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            line,
        }
    }
}
