use super::*;

use leptos::prelude::GetUntracked as _;

use crate::session::{bus, credentials, lifecycle};

#[test]
fn fresh_store_reads_as_signed_out() {
    let is_authenticated = use_session();
    assert!(!is_authenticated.get_untracked());
}

#[test]
fn attach_after_write_reports_authenticated_without_a_notification() {
    credentials::set("tok1", "ref1");
    let is_authenticated = use_session();
    assert!(is_authenticated.get_untracked());
}

#[test]
fn login_transition_reaches_a_mounted_observer() {
    let is_authenticated = use_session();
    assert!(!is_authenticated.get_untracked());

    lifecycle::login("tok1", "ref1");
    assert!(is_authenticated.get_untracked());

    lifecycle::logout();
    assert!(!is_authenticated.get_untracked());
}

#[test]
fn set_then_clear_then_fresh_observer_is_signed_out() {
    lifecycle::login("a", "b");
    lifecycle::logout();

    let is_authenticated = use_session();
    assert!(!is_authenticated.get_untracked());
}

#[test]
fn empty_access_token_reads_as_signed_out() {
    credentials::set("", "ref1");
    let is_authenticated = use_session();
    assert!(!is_authenticated.get_untracked());
}

#[test]
fn redundant_notifications_keep_the_same_value() {
    credentials::set("tok1", "ref1");
    let is_authenticated = use_session();

    bus::publish();
    bus::publish();
    assert!(is_authenticated.get_untracked());
}
