use super::*;

#[test]
fn validate_sign_in_trims_and_accepts_well_formed_input() {
    assert_eq!(
        validate_sign_in("  user@example.com  ", "hunter22"),
        Ok(("user@example.com".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn validate_sign_in_rejects_empty_email() {
    assert_eq!(validate_sign_in("   ", "hunter22"), Err("Enter a valid email address."));
}

#[test]
fn validate_sign_in_rejects_email_without_at_sign() {
    assert_eq!(
        validate_sign_in("user.example.com", "hunter22"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_sign_in_rejects_empty_password() {
    assert_eq!(validate_sign_in("user@example.com", ""), Err("Enter your password."));
}

#[test]
fn post_sign_in_target_defaults_to_profile() {
    assert_eq!(post_sign_in_target(None), "/user/profile");
    assert_eq!(post_sign_in_target(Some(String::new())), "/user/profile");
}

#[test]
fn post_sign_in_target_honors_local_redirects() {
    assert_eq!(
        post_sign_in_target(Some("/posts/my-posts".to_owned())),
        "/posts/my-posts"
    );
}

#[test]
fn post_sign_in_target_rejects_external_redirects() {
    assert_eq!(
        post_sign_in_target(Some("https://example.com/phish".to_owned())),
        "/user/profile"
    );
}
