/// Permissive float parsing for form input.
///
/// Accepts the longest numeric prefix of the string and ignores whatever
/// follows, the same convention the production-entry fields have always used:
/// leading whitespace, an optional sign, digits with at most one decimal
/// point, an optional exponent, and `Infinity`. Returns `None` when no
/// numeric prefix exists (empty input, plain text, a lone sign or dot).
pub fn parse_float(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    if text[i..].starts_with("Infinity") {
        return text[..i + "Infinity".len()].parse::<f64>().ok();
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => {
                seen_digit = true;
                i += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                i += 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }

    // An exponent is only consumed when at least one digit follows it,
    // otherwise "1e" stays 1.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let mut exp_digit = false;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            exp_digit = true;
            j += 1;
        }
        if exp_digit {
            i = j;
        }
    }

    text[..i].parse::<f64>().ok()
}
