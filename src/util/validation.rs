//! Syntactic checks for the login and registration forms.
//!
//! All checks are pure and return `bool`; they never fail. They only gate
//! obvious typos before a request goes out. The API stays authoritative.
//!
//! Whitespace and length follow the browser's rules: whitespace is the set
//! ECMAScript's `\s` and `trim` use, and lengths count UTF-16 code units.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::Registration;

pub const NAME_MIN_CHARS: usize = 3;
pub const PASSWORD_MIN_CHARS: usize = 8;

/// ECMAScript whitespace: Unicode `White_Space` without U+0085, plus U+FEFF.
fn is_form_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// A name is valid when it has at least three characters after trimming.
pub fn validate_name(name: &str) -> bool {
    utf16_len(name.trim_matches(is_form_whitespace)) >= NAME_MIN_CHARS
}

/// Minimal `local@domain.tld` shape check.
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a `.` inside
/// the domain with at least one character on each side.
pub fn validate_mail(email: &str) -> bool {
    if email.chars().any(is_form_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// A password is valid when it has at least eight characters.
pub fn validate_password(password: &str) -> bool {
    utf16_len(password) >= PASSWORD_MIN_CHARS
}

/// Returns `true` when the two passwords DIFFER.
///
/// Note the polarity: a `true` result is a mismatch error, not a pass.
pub fn validate_repeat_password(password: &str, repeat_password: &str) -> bool {
    repeat_password != password
}

/// Form field a validation message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    RepeatPassword,
}

/// A user-facing message for one failing field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Run every registration check, in form order.
pub fn validate_registration(registration: &Registration, repeat_password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !validate_name(&registration.name) {
        errors.push(FieldError { field: Field::Name, message: "Name must be at least 3 characters." });
    }
    if !validate_mail(&registration.email) {
        errors.push(FieldError { field: Field::Email, message: "Enter a valid email address." });
    }
    if !validate_password(&registration.password) {
        errors.push(FieldError { field: Field::Password, message: "Password must be at least 8 characters." });
    }
    if validate_repeat_password(&registration.password, repeat_password) {
        errors.push(FieldError { field: Field::RepeatPassword, message: "Passwords do not match." });
    }
    errors
}
