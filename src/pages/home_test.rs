use super::*;
use crate::util::validation::Field;

#[test]
fn login_input_trims_email() {
    assert_eq!(
        login_input("  a@b.co ", "longenough1"),
        Ok(Credentials { email: "a@b.co".to_owned(), password: "longenough1".to_owned() })
    );
}

#[test]
fn login_input_rejects_bad_email_first() {
    assert_eq!(login_input("nope", "short"), Err("Enter a valid email address."));
}

#[test]
fn login_input_rejects_short_password() {
    assert_eq!(login_input("a@b.co", "short"), Err("Password must be at least 8 characters."));
}

#[test]
fn registration_input_trims_name_and_email() {
    let reg = registration_input(" Ana ", " ana@example.com ", "longenough1", "longenough1").unwrap();
    assert_eq!(reg.name, "Ana");
    assert_eq!(reg.email, "ana@example.com");
    assert_eq!(reg.password, "longenough1");
}

#[test]
fn registration_input_collects_field_errors() {
    let errors = registration_input("A", "ana@example.com", "longenough1", "different1").unwrap_err();
    let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Name, Field::RepeatPassword]);
    assert_eq!(join_messages(&errors), "Name must be at least 3 characters. Passwords do not match.");
}
