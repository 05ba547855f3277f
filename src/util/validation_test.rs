use super::*;

// =============================================================
// validate_name
// =============================================================

#[test]
fn name_shorter_than_three_after_trim_is_invalid() {
    assert!(!validate_name(""));
    assert!(!validate_name("   "));
    assert!(!validate_name("ab"));
    assert!(!validate_name("  ab  "));
}

#[test]
fn name_of_three_or_more_is_valid() {
    assert!(validate_name("Ana"));
    assert!(validate_name("  Ana  "));
    assert!(validate_name("Guillermo del Toro"));
}

#[test]
fn name_counts_utf16_units_not_bytes() {
    assert!(!validate_name("Jö"));
    assert!(validate_name("Zoë"));
    assert!(validate_name("J😀"));
}

#[test]
fn name_trims_byte_order_mark() {
    assert!(!validate_name("\u{feff}ab"));
    assert!(!validate_name("ab\u{3000}"));
}

// =============================================================
// validate_mail
// =============================================================

#[test]
fn mail_accepts_minimal_shape() {
    assert!(validate_mail("a@b.co"));
    assert!(validate_mail("first.last@mail.example.com"));
    assert!(validate_mail("x@y.z"));
}

#[test]
fn mail_rejects_malformed() {
    assert!(!validate_mail(""));
    assert!(!validate_mail("not-an-email"));
    assert!(!validate_mail("@b.co"));
    assert!(!validate_mail("a@.co"));
    assert!(!validate_mail("a@b."));
    assert!(!validate_mail("a@bco"));
    assert!(!validate_mail("a@@b.co"));
    assert!(!validate_mail("a@b@c.co"));
    assert!(!validate_mail("a b@c.co"));
    assert!(!validate_mail("a@b.co "));
}

#[test]
fn mail_whitespace_matches_browser() {
    assert!(!validate_mail("a\u{feff}b@c.de"));
    assert!(!validate_mail("a\u{a0}b@c.de"));
    assert!(validate_mail("a\u{85}b@c.de"));
}

#[test]
fn mail_allows_dots_around_inner_dot() {
    assert!(validate_mail("a@b..co"));
    assert!(validate_mail("a@.b.co"));
}

// =============================================================
// validate_password / validate_repeat_password
// =============================================================

#[test]
fn password_needs_eight_characters() {
    assert!(!validate_password(""));
    assert!(!validate_password("short"));
    assert!(!validate_password("1234567"));
    assert!(validate_password("12345678"));
    assert!(validate_password("longenough1"));
}

#[test]
fn password_counts_utf16_units() {
    assert!(validate_password("😀😀😀😀"));
    assert!(!validate_password("😀😀😀"));
}

#[test]
fn repeat_password_true_means_mismatch() {
    assert!(!validate_repeat_password("x", "x"));
    assert!(validate_repeat_password("x", "y"));
    assert!(validate_repeat_password("secret123", ""));
}

// =============================================================
// validate_registration
// =============================================================

fn registration(name: &str, email: &str, password: &str) -> Registration {
    Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() }
}

#[test]
fn registration_all_valid_has_no_errors() {
    let form = registration("Ana", "ana@example.com", "longenough1");
    assert!(validate_registration(&form, "longenough1").is_empty());
}

#[test]
fn registration_reports_each_failing_field_in_order() {
    let form = registration("A", "nope", "short");
    let fields: Vec<Field> = validate_registration(&form, "other")
        .into_iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(fields, vec![Field::Name, Field::Email, Field::Password, Field::RepeatPassword]);
}

#[test]
fn registration_mismatch_message() {
    let form = registration("Ana", "ana@example.com", "longenough1");
    let errors = validate_registration(&form, "longenough2");
    assert_eq!(
        errors,
        vec![FieldError { field: Field::RepeatPassword, message: "Passwords do not match." }]
    );
}
