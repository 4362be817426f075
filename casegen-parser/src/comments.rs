//! Comment stripping.

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Str(char),
    Line,
    /// Dart block comments nest; the value is the current depth.
    Block(usize),
}

/// Remove `//` and `/* */` comments from Dart source.
///
/// Newlines inside block comments are kept so line numbers stay stable.
/// Comment markers inside string literals are not treated as comments.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut state = State::Code;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = State::Line;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = State::Block(1);
                }
                '\'' | '"' => {
                    out.push(c);
                    state = State::Str(c);
                }
                _ => out.push(c),
            },
            State::Str(quote) => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == quote || c == '\n' {
                    state = State::Code;
                }
            }
            State::Line => {
                if c == '\n' {
                    out.push(c);
                    state = State::Code;
                }
            }
            State::Block(depth) => match c {
                '*' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = if depth == 1 {
                        State::Code
                    } else {
                        State::Block(depth - 1)
                    };
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = State::Block(depth + 1);
                }
                '\n' => out.push(c),
                _ => {}
            },
        }
    }

    out
}
