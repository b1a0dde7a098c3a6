//! One predicate per field rule. Each is pure and independently testable.

use crate::form::number;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Username is present once surrounding whitespace is removed.
pub fn username_present(username: &str) -> bool {
    !number::trim(username).is_empty()
}

/// Password has at least [`MIN_PASSWORD_LEN`] characters, consists only of ASCII letters and
/// digits, and contains at least one of each.
pub fn password_strong(password: &str) -> bool {
    if password.len() < MIN_PASSWORD_LEN {
        return false;
    }
    if !password.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return false;
    }
    let has_letter = password.bytes().any(|b| b.is_ascii_alphabetic());
    let has_digit = password.bytes().any(|b| b.is_ascii_digit());
    has_letter && has_digit
}

/// `local@domain.tld` shape: no whitespace, exactly one `@` with a non-empty local part, and a
/// domain holding a `.` that has text on both sides.
pub fn email_shaped(email: &str) -> bool {
    if email.chars().any(number::is_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Any dot except a leading or trailing one separates two non-empty labels.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Age is non-blank, numeric, and strictly positive. No upper bound; fractions allowed.
pub fn age_positive(age: &str) -> bool {
    if number::trim(age).is_empty() {
        return false;
    }
    matches!(number::coerce(age), Some(v) if v > 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/form/rules.rs"]
mod tests;
