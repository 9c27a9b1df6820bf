use super::*;

fn sample_post(username: Option<&str>) -> Post {
    Post {
        id: 7,
        title: "Hello".to_owned(),
        content: "Body".to_owned(),
        user_id: 3,
        username: username.map(str::to_owned),
        created_at: "2024-05-01T12:00:00Z".to_owned(),
    }
}

#[test]
fn byline_names_the_author_and_date() {
    assert_eq!(
        byline(&sample_post(Some("alice@example.com"))),
        "alice@example.com • 2024-05-01"
    );
}

#[test]
fn byline_falls_back_to_anonymous() {
    assert_eq!(byline(&sample_post(None)), "Anonymous • 2024-05-01");
}

#[test]
fn return_path_matches_the_listing() {
    assert_eq!(PostSource::All.return_path(), "/posts");
    assert_eq!(PostSource::Mine.return_path(), "/posts/my-posts");
}
