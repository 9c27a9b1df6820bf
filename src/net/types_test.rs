use super::*;

#[test]
fn token_pair_parses_full_response() {
    let pair: TokenPair = serde_json::from_str(
        r#"{"access_token":"tok1","refresh_token":"ref1","expires_in":900}"#,
    )
    .unwrap();
    assert_eq!(pair.access_token, "tok1");
    assert_eq!(pair.refresh_token, "ref1");
    assert_eq!(pair.expires_in, 900);
}

#[test]
fn token_pair_defaults_omitted_refresh_token() {
    let pair: TokenPair = serde_json::from_str(r#"{"access_token":"tok1"}"#).unwrap();
    assert_eq!(pair.refresh_token, "");
    assert_eq!(pair.expires_in, 0);
}

#[test]
fn post_parses_with_author() {
    let post: Post = serde_json::from_str(
        r#"{"id":7,"title":"Hello","content":"Body","user_id":3,"username":"alice@example.com","created_at":"2024-05-01T12:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(post.id, 7);
    assert_eq!(post.username.as_deref(), Some("alice@example.com"));
}

#[test]
fn post_defaults_omitted_author_to_none() {
    let post: Post = serde_json::from_str(
        r#"{"id":7,"title":"Hello","content":"Body","user_id":3,"created_at":"2024-05-01T12:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(post.username, None);
}

#[test]
fn error_body_parses_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"invalid credentials"}"#).unwrap();
    assert_eq!(body.message, "invalid credentials");
}
