use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let count_in_handler = Rc::clone(&count);
    (count, move || count_in_handler.set(count_in_handler.get() + 1))
}

#[test]
fn handler_fires_once_per_publish() {
    let (count, handler) = counter();
    let subscription = subscribe(handler);

    publish();
    publish();
    publish();

    assert_eq!(count.get(), 3);
    subscription.unsubscribe();
}

#[test]
fn publish_with_no_subscribers_is_a_no_op() {
    publish();
}

#[test]
fn unsubscribed_handler_stops_firing() {
    let (count, handler) = counter();
    let subscription = subscribe(handler);

    publish();
    subscription.unsubscribe();
    publish();
    publish();

    assert_eq!(count.get(), 1);
}

#[test]
fn unsubscribe_twice_is_a_no_op() {
    let (count, handler) = counter();
    let subscription = subscribe(handler);

    subscription.unsubscribe();
    subscription.unsubscribe();
    publish();

    assert_eq!(count.get(), 0);
}

#[test]
fn publish_before_subscribe_is_not_replayed() {
    publish();

    let (count, handler) = counter();
    let subscription = subscribe(handler);
    assert_eq!(count.get(), 0);

    publish();
    assert_eq!(count.get(), 1);
    subscription.unsubscribe();
}

#[test]
fn handlers_run_in_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));

    let order_first = Rc::clone(&order);
    let first = subscribe(move || order_first.borrow_mut().push("first"));
    let order_second = Rc::clone(&order);
    let second = subscribe(move || order_second.borrow_mut().push("second"));

    publish();

    assert_eq!(*order.borrow(), vec!["first", "second"]);
    first.unsubscribe();
    second.unsubscribe();
}

#[test]
fn handler_may_unsubscribe_itself_during_delivery() {
    let (count, handler) = counter();
    let subscription = Rc::new(RefCell::new(None::<Subscription>));

    let subscription_in_handler = Rc::clone(&subscription);
    *subscription.borrow_mut() = Some(subscribe(move || {
        handler();
        if let Some(subscription) = subscription_in_handler.borrow().as_ref() {
            subscription.unsubscribe();
        }
    }));

    publish();
    publish();

    assert_eq!(count.get(), 1);
}

#[test]
fn handler_may_subscribe_another_during_delivery() {
    let (late_count, late_handler) = counter();
    let late_handler = Rc::new(RefCell::new(Some(late_handler)));
    let added = Rc::new(RefCell::new(Vec::new()));

    let late_handler_in_outer = Rc::clone(&late_handler);
    let added_in_outer = Rc::clone(&added);
    let outer = subscribe(move || {
        if let Some(handler) = late_handler_in_outer.borrow_mut().take() {
            added_in_outer.borrow_mut().push(subscribe(handler));
        }
    });

    // The late handler is registered mid-delivery and only sees later publishes.
    publish();
    assert_eq!(late_count.get(), 0);

    publish();
    assert_eq!(late_count.get(), 1);

    outer.unsubscribe();
    for subscription in added.borrow().iter() {
        subscription.unsubscribe();
    }
}

#[test]
fn credential_keys_match_the_storage_filter() {
    assert!(credential_key_changed(Some("access_token")));
    assert!(credential_key_changed(Some("refresh_token")));
    assert!(credential_key_changed(None));
    assert!(!credential_key_changed(Some("theme")));
    assert!(!credential_key_changed(Some("")));
}
