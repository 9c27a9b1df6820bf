use super::*;

fn sample_post(user_id: i64) -> Post {
    Post {
        id: 7,
        title: "Hello".to_owned(),
        content: "Body".to_owned(),
        user_id,
        username: None,
        created_at: "2024-05-01T12:00:00Z".to_owned(),
    }
}

#[test]
fn parse_post_id_accepts_integers() {
    assert_eq!(parse_post_id(Some("42")), Some(42));
}

#[test]
fn parse_post_id_rejects_garbage_and_absence() {
    assert_eq!(parse_post_id(Some("forty-two")), None);
    assert_eq!(parse_post_id(Some("")), None);
    assert_eq!(parse_post_id(None), None);
}

#[test]
fn owner_check_matches_account_ids() {
    let viewer = User {
        id: 3,
        email: "alice@example.com".to_owned(),
    };
    assert!(is_owner(&sample_post(3), Some(&viewer)));
    assert!(!is_owner(&sample_post(4), Some(&viewer)));
}

#[test]
fn anonymous_viewer_never_owns_a_post() {
    assert!(!is_owner(&sample_post(3), None));
}
