//! Lenient string-to-number coercion used by the age rule.
//!
//! Accepts what a browser's `Number(..)` accepts: surrounding whitespace, signed decimal
//! literals with optional fraction and exponent, `0x`/`0o`/`0b` integer literals (unsigned),
//! and `Infinity` with an optional sign. An all-whitespace string coerces to `0`.

/// Whitespace as seen by trimming and the email rule: Unicode whitespace plus BOM, minus
/// NEL (U+0085), which browsers treat as an ordinary character.
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Strip leading and trailing [`is_space`] characters.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Coerce `raw` to a number, or `None` when it is not numeric.
pub fn coerce(raw: &str) -> Option<f64> {
    let s = trim(raw);
    if s.is_empty() {
        return Some(0.0);
    }
    if let Some(v) = infinity(s) {
        return Some(v);
    }
    if let Some(v) = radix_literal(s) {
        return v;
    }
    if is_decimal_literal(s) {
        return s.parse::<f64>().ok();
    }
    None
}

fn infinity(s: &str) -> Option<f64> {
    match s {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// `Some(result)` when `s` carries a radix prefix, `None` otherwise.
fn radix_literal(s: &str) -> Option<Option<f64>> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(None);
    }
    let mut value = 0.0_f64;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            return Some(None);
        };
        value = value * f64::from(radix) + f64::from(d);
    }
    Some(Some(value))
}

/// `[+-]? (digits [. digits*] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < b.len() && matches!(b[i], b'e' | b'E') {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == b.len()
}

#[cfg(test)]
#[path = "../../tests/unit/form/number.rs"]
mod tests;
