//! Comments and folding whitespace (RFC 5322 section 3.2.2).

/// Skips leading CFWS and returns what follows it.
///
/// Consumes spaces and tabs, line folds (CRLF or a bare LF followed by a
/// space or tab) and parenthesized comments, which may nest and in which `\`
/// escapes the next byte. A comment that never closes, or a CR/LF that does
/// not start a fold, swallows the rest of the input and the result is empty.
pub fn strip_cfws(input: &[u8]) -> &[u8] {
    let end = input.len();
    let mut i = 0;

    while i < end {
        match input[i] {
            b' ' | b'\t' => i += 1,
            b'\r' => {
                if i + 2 < end && input[i + 1] == b'\n' && matches!(input[i + 2], b' ' | b'\t') {
                    i += 3;
                } else {
                    return &input[end..];
                }
            }
            b'\n' => {
                if i + 1 < end && matches!(input[i + 1], b' ' | b'\t') {
                    i += 2;
                } else {
                    return &input[end..];
                }
            }
            b'(' => {
                i += 1;
                let mut depth = 1usize;
                while depth > 0 {
                    if i >= end {
                        return &input[end..];
                    }
                    match input[i] {
                        b'(' => depth += 1,
                        b')' => depth -= 1,
                        b'\\' => {
                            i += 1;
                            if i == end {
                                return &input[end..];
                            }
                        }
                        _ => {}
                    }
                    i += 1;
                }
            }
            _ => return &input[i..],
        }
    }
    &input[end..]
}
