use super::*;

#[test]
fn validate_sign_up_accepts_well_formed_input() {
    assert_eq!(
        validate_sign_up(" new@example.com ", "longenough", "longenough", true),
        Ok(("new@example.com".to_owned(), "longenough".to_owned()))
    );
}

#[test]
fn validate_sign_up_rejects_bad_email() {
    assert_eq!(
        validate_sign_up("not-an-email", "longenough", "longenough", true),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_sign_up_rejects_short_password() {
    assert_eq!(
        validate_sign_up("new@example.com", "short", "short", true),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_sign_up_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_sign_up("new@example.com", "longenough", "different", true),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_sign_up_requires_accepted_terms() {
    assert_eq!(
        validate_sign_up("new@example.com", "longenough", "longenough", false),
        Err("You must accept the terms to create an account.")
    );
}

#[test]
fn validate_sign_up_checks_email_before_password() {
    assert_eq!(
        validate_sign_up("", "short", "short", false),
        Err("Enter a valid email address.")
    );
}
