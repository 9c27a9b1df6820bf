use super::*;

#[test]
fn sign_in_path_carries_the_return_path() {
    assert_eq!(
        sign_in_path("/posts/my-posts"),
        "/auth/sign-in?redirect=/posts/my-posts"
    );
}

#[test]
fn sign_in_path_omits_trivial_return_paths() {
    assert_eq!(sign_in_path(""), "/auth/sign-in");
    assert_eq!(sign_in_path("/"), "/auth/sign-in");
}
