use super::*;

#[test]
fn validate_reset_email_trims_and_accepts() {
    assert_eq!(
        validate_reset_email("  user@example.com  "),
        Ok("user@example.com".to_owned())
    );
}

#[test]
fn validate_reset_email_rejects_empty_input() {
    assert_eq!(validate_reset_email("   "), Err("Please enter a valid email address."));
}

#[test]
fn validate_reset_email_rejects_missing_at_sign() {
    assert_eq!(
        validate_reset_email("user.example.com"),
        Err("Please enter a valid email address.")
    );
}
