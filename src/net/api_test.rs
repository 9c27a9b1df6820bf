use super::*;

use std::cell::Cell;
use std::rc::Rc;

use crate::session::{bus, credentials};

#[test]
fn api_url_prefixes_the_default_base() {
    assert_eq!(api_url("/api/posts"), "http://localhost:8080/api/posts");
}

#[test]
fn post_endpoint_formats_expected_path() {
    assert_eq!(post_endpoint(42), "/api/posts/42");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok1"), "Bearer tok1");
}

#[test]
fn rejected_token_clears_the_store_and_notifies() {
    credentials::set("stale", "stale-ref");
    let count = Rc::new(Cell::new(0));
    let count_in_handler = Rc::clone(&count);
    let subscription = bus::subscribe(move || count_in_handler.set(count_in_handler.get() + 1));

    let error = drop_rejected_session(ApiError::Unauthorized);

    assert_eq!(error, ApiError::Unauthorized);
    assert_eq!(credentials::get(), None);
    assert_eq!(count.get(), 1);
    subscription.unsubscribe();
}

#[test]
fn other_failures_leave_the_store_alone() {
    credentials::set("tok1", "ref1");

    let error = drop_rejected_session(ApiError::Server {
        status: 500,
        message: "boom".to_owned(),
    });

    assert!(matches!(error, ApiError::Server { status: 500, .. }));
    assert!(credentials::get().is_some());
}
