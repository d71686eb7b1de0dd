/// The regions a scan of C source can be inside. String and character
/// literals protect their contents, so a comment opener inside either
/// is literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    StringLiteral,
    CharLiteral,
}

/// Removes C and C++ style comments from source text. Line comments
/// are removed through to the newline, which is kept so line numbering
/// survives; block comments are removed without replacement, including
/// any newlines they span. Literals are passed through verbatim, with
/// backslash escapes honoured. Unterminated comments and literals run
/// to end-of-input.
pub fn strip_comments(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    let mut out = String::with_capacity(code.len());
    let mut state = State::Code;
    let mut escaped = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match state {
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                    out.push(c);
                }
                i += 1;
            }
            State::BlockComment => {
                if c == '*' && next == Some('/') {
                    state = State::Code;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            State::StringLiteral => {
                out.push(c);
                if !escaped && c == '"' {
                    state = State::Code;
                }
                escaped = !escaped && c == '\\';
                i += 1;
            }
            State::CharLiteral => {
                out.push(c);
                if !escaped && c == '\'' {
                    state = State::Code;
                }
                escaped = !escaped && c == '\\';
                i += 1;
            }
            State::Code => match c {
                '"' => {
                    state = State::StringLiteral;
                    escaped = false;
                    out.push(c);
                    i += 1;
                }
                '\'' => {
                    state = State::CharLiteral;
                    escaped = false;
                    out.push(c);
                    i += 1;
                }
                '/' if next == Some('/') => {
                    state = State::LineComment;
                    i += 2;
                }
                '/' if next == Some('*') => {
                    state = State::BlockComment;
                    i += 2;
                }
                _ => {
                    out.push(c);
                    i += 1;
                }
            },
        }
    }

    out
}
