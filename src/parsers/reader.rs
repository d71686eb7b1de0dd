/// A terminal-stream adapter for the fixed expression-style alphabet:
/// identifier-like runs and numeric literals reduce to the single
/// terminal `id`, the symbols `+ * ( )` pass through literally, and any
/// other non-space character becomes its own single-character terminal.
/// Exhaustion of the stream is the end-of-input marker.
pub struct Reader {
    tokens: Vec<String>,
    cursor: usize,
}

impl Reader {
    pub fn new(input: &str) -> Reader {
        Reader {
            tokens: scan(input),
            cursor: 0,
        }
    }

    /// Returns the current terminal, or None at end-of-input
    pub fn lookahead(&self) -> Option<&str> {
        self.tokens.get(self.cursor).map(String::as_str)
    }

    /// Advances past the current terminal, if any
    pub fn next(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }

    /// Returns the unconsumed terminals
    pub fn remaining(&self) -> &[String] {
        &self.tokens[self.cursor..]
    }
}

fn scan(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens: Vec<String> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
        } else if c.is_alphabetic() || c == '_' {
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            tokens.push("id".to_string());
        } else if c.is_ascii_digit() {
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            tokens.push("id".to_string());
        } else {
            // The expression operators and anything unrecognized alike
            // become single-character terminals
            tokens.push(c.to_string());
            i += 1;
        }
    }

    tokens
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_scan() {
        assert_eq!(scan("id+id*id"), vec!["id", "+", "id", "*", "id"]);
        assert_eq!(scan("a + b*( c )"), vec!["id", "+", "id", "*", "(", "id", ")"]);
        assert_eq!(scan("x1 * 3.14"), vec!["id", "*", "id"]);
        assert_eq!(scan("_tmp-4"), vec!["id", "-", "id"]);
        assert_eq!(scan(""), Vec::<String>::new());
    }

    #[test]
    fn test_cursor() {
        let mut reader = Reader::new("id+id");
        assert_eq!(reader.lookahead(), Some("id"));
        assert_eq!(reader.remaining(), &["id", "+", "id"]);

        reader.next();
        assert_eq!(reader.lookahead(), Some("+"));

        reader.next();
        reader.next();
        assert_eq!(reader.lookahead(), None);
        assert!(reader.remaining().is_empty());

        // Advancing past end-of-input is a no-op
        reader.next();
        assert_eq!(reader.lookahead(), None);
    }
}
