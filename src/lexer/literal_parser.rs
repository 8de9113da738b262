//! String literal decoding

/// Resolve escape sequences in a string literal body (quotes already stripped)
pub fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('0') => result.push('\0'),
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) if hex.len() == 2 => result.push(byte as char),
                    _ => {
                        result.push('x');
                        result.push_str(&hex);
                    }
                }
            }
            Some('u') if chars.peek() == Some(&'{') => {
                chars.next();
                let mut hex = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    hex.push(c);
                }
                match decode_code_point(&hex) {
                    Some(decoded) if closed => result.push(decoded),
                    _ => {
                        result.push_str("u{");
                        result.push_str(&hex);
                        if closed {
                            result.push('}');
                        }
                    }
                }
            }
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match decode_code_point(&hex) {
                    Some(decoded) if hex.len() == 4 => result.push(decoded),
                    _ => {
                        result.push('u');
                        result.push_str(&hex);
                    }
                }
            }
            // Quotes, backslash and anything else stand for themselves
            Some(c) => result.push(c),
            None => result.push('\\'),
        }
    }

    result
}

fn decode_code_point(hex: &str) -> Option<char> {
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
