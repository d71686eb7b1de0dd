pub mod token;

pub use token::{Token, TokenKind};

/// The C keywords, plus the common C++ ones, recognized by the tokenizer
const KEYWORDS: &[&str] = &[
    "auto",
    "break",
    "case",
    "char",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extern",
    "float",
    "for",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "register",
    "restrict",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "struct",
    "switch",
    "typedef",
    "union",
    "unsigned",
    "void",
    "volatile",
    "while",
    "_Bool",
    "_Complex",
    "_Imaginary",
    "class",
    "namespace",
    "public",
    "private",
    "protected",
    "template",
    "typename",
    "using",
    "new",
    "delete",
    "try",
    "catch",
    "throw",
    "this",
    "operator",
    "friend",
    "virtual",
    "override",
    "nullptr",
    "bool",
];

/// Multi-character operators, matched longest-first before the
/// single-character fallback
const OPS3: &[&str] = &["<<=", ">>=", "..."];
const OPS2: &[&str] = &[
    "++", "--", "==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "<<", ">>",
    "->", "::", "&=", "|=", "^=",
];
const OPS1: &[char] = &['+', '-', '*', '/', '%', '<', '>', '=', '!', '&', '|', '^', '~'];
const SEPARATORS: &[char] = &[';', ',', '(', ')', '{', '}', '[', ']', ':', '?', '.'];

fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Tokenizes C-like source text into classified tokens with one-based
/// line numbers. The scan is total: a character that fits no class
/// becomes an Unknown token rather than an error. Comments should be
/// removed first; an unstripped comment tokenizes as operators.
pub fn tokenize(code: &str) -> Vec<Token> {
    let chars: Vec<char> = code.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut line = 1;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\n' {
            line += 1;
            i += 1;
            continue;
        }
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // A preprocessor directive claims the rest of its line
        if c == '#' {
            let mut j = i;
            while j < chars.len() && chars[j] != '\n' {
                j += 1;
            }
            tokens.push(make_token(TokenKind::Preprocessor, &chars[i..j], line));
            i = j;
            continue;
        }

        // Identifier or keyword
        if c.is_alphabetic() || c == '_' {
            let mut j = i;
            while j < chars.len() && (chars[j].is_alphanumeric() || chars[j] == '_') {
                j += 1;
            }
            let word: String = chars[i..j].iter().collect();
            let kind = if is_keyword(&word) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            tokens.push(Token {
                kind,
                lexeme: word,
                line,
            });
            i = j;
            continue;
        }

        // Number, with at most one decimal point and an optional
        // signed exponent
        if c.is_ascii_digit() {
            let mut j = i;
            let mut dot = false;
            while j < chars.len() {
                let d = chars[j];
                if d.is_ascii_digit() {
                    j += 1;
                } else if d == '.' && !dot {
                    dot = true;
                    j += 1;
                } else if (d == 'e' || d == 'E') && j + 1 < chars.len() {
                    j += 1;
                    if chars[j] == '+' || chars[j] == '-' {
                        j += 1;
                    }
                } else {
                    break;
                }
            }
            tokens.push(make_token(TokenKind::Number, &chars[i..j], line));
            i = j;
            continue;
        }

        // String and character literals, honouring backslash escapes.
        // An unterminated literal runs to end-of-input.
        if c == '"' || c == '\'' {
            let kind = if c == '"' {
                TokenKind::StringLiteral
            } else {
                TokenKind::CharLiteral
            };
            let start_line = line;
            let mut j = i + 1;
            let mut escaped = false;
            while j < chars.len() {
                let d = chars[j];
                if d == '\n' {
                    line += 1;
                }
                if !escaped && d == c {
                    j += 1;
                    break;
                }
                escaped = !escaped && d == '\\';
                j += 1;
            }
            tokens.push(make_token(kind, &chars[i..j], start_line));
            i = j;
            continue;
        }

        // Operators, longest match first
        if let Some(op) = OPS3.iter().find(|op| scan_operator(&chars, i, op)) {
            tokens.push(Token::new(TokenKind::Operator, op, line));
            i += 3;
            continue;
        }
        if let Some(op) = OPS2.iter().find(|op| scan_operator(&chars, i, op)) {
            tokens.push(Token::new(TokenKind::Operator, op, line));
            i += 2;
            continue;
        }

        if SEPARATORS.contains(&c) {
            tokens.push(make_token(TokenKind::Separator, &chars[i..i + 1], line));
            i += 1;
            continue;
        }

        if OPS1.contains(&c) {
            tokens.push(make_token(TokenKind::Operator, &chars[i..i + 1], line));
            i += 1;
            continue;
        }

        tokens.push(make_token(TokenKind::Unknown, &chars[i..i + 1], line));
        i += 1;
    }

    tokens
}

fn make_token(kind: TokenKind, lexeme: &[char], line: usize) -> Token {
    Token {
        kind,
        lexeme: lexeme.iter().collect(),
        line,
    }
}

/// Returns true if the operator appears at the given offset
fn scan_operator(chars: &[char], i: usize, op: &str) -> bool {
    op.chars()
        .enumerate()
        .all(|(k, c)| chars.get(i + k) == Some(&c))
}

#[cfg(test)]
mod test {
    use super::*;

    fn kinds(code: &str) -> Vec<(TokenKind, String)> {
        tokenize(code)
            .into_iter()
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("int main"),
            vec![
                (TokenKind::Keyword, "int".to_string()),
                (TokenKind::Identifier, "main".to_string()),
            ]
        );
        assert_eq!(
            kinds("_count iffy"),
            vec![
                (TokenKind::Identifier, "_count".to_string()),
                (TokenKind::Identifier, "iffy".to_string()),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("42 3.14 1e-9 2E+10"),
            vec![
                (TokenKind::Number, "42".to_string()),
                (TokenKind::Number, "3.14".to_string()),
                (TokenKind::Number, "1e-9".to_string()),
                (TokenKind::Number, "2E+10".to_string()),
            ]
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            kinds(r#""hello" 'c' "a\"b" '\n'"#),
            vec![
                (TokenKind::StringLiteral, r#""hello""#.to_string()),
                (TokenKind::CharLiteral, "'c'".to_string()),
                (TokenKind::StringLiteral, r#""a\"b""#.to_string()),
                (TokenKind::CharLiteral, r"'\n'".to_string()),
            ]
        );
    }

    #[test]
    fn test_operators_longest_match() {
        assert_eq!(
            kinds("a <<= b >> c++ + d"),
            vec![
                (TokenKind::Identifier, "a".to_string()),
                (TokenKind::Operator, "<<=".to_string()),
                (TokenKind::Identifier, "b".to_string()),
                (TokenKind::Operator, ">>".to_string()),
                (TokenKind::Identifier, "c".to_string()),
                (TokenKind::Operator, "++".to_string()),
                (TokenKind::Operator, "+".to_string()),
                (TokenKind::Identifier, "d".to_string()),
            ]
        );
        assert_eq!(
            kinds("p->q x::y"),
            vec![
                (TokenKind::Identifier, "p".to_string()),
                (TokenKind::Operator, "->".to_string()),
                (TokenKind::Identifier, "q".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Operator, "::".to_string()),
                (TokenKind::Identifier, "y".to_string()),
            ]
        );
    }

    #[test]
    fn test_separators() {
        assert_eq!(
            kinds("f(x, y);"),
            vec![
                (TokenKind::Identifier, "f".to_string()),
                (TokenKind::Separator, "(".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Separator, ",".to_string()),
                (TokenKind::Identifier, "y".to_string()),
                (TokenKind::Separator, ")".to_string()),
                (TokenKind::Separator, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_preprocessor() {
        assert_eq!(
            kinds("#include <stdio.h>\nint x;"),
            vec![
                (TokenKind::Preprocessor, "#include <stdio.h>".to_string()),
                (TokenKind::Keyword, "int".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Separator, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(kinds("a @ b")[1], (TokenKind::Unknown, "@".to_string()));
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("int x;\n\nx = 1;\n");

        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 1);
        assert_eq!(tokens[3].line, 3);
        assert_eq!(tokens.last().unwrap().line, 3);
    }

    #[test]
    fn test_multiline_string_line_counting() {
        let tokens = tokenize("\"a\nb\"\nx");

        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[1].line, 3);
    }
}
