//! In-tab notification channel for credential changes.
//!
//! DESIGN
//! ======
//! A typed publish/subscribe registry rather than a bare global event name,
//! so session traffic cannot collide with unrelated DOM events. Local writes
//! notify through [`publish`]; writes from other tabs arrive through the
//! browser's `storage` event, which is funneled into the same registry.
//! Delivery is synchronous and in registration order. Handlers may fire for
//! writes that did not change state, so they must be idempotent.

#[cfg(test)]
#[path = "bus_test.rs"]
mod bus_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[cfg(any(test, feature = "hydrate"))]
use super::credentials::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

type Handler = Rc<dyn Fn()>;

thread_local! {
    static HANDLERS: RefCell<Vec<(u64, Handler)>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// Handle returned by [`subscribe`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
}

impl Subscription {
    /// Detach the handler.
    ///
    /// Calling this more than once is a no-op, and it is safe to call from
    /// inside the handler's own invocation.
    pub fn unsubscribe(&self) {
        HANDLERS.with(|handlers| {
            handlers.borrow_mut().retain(|(id, _)| *id != self.id);
        });
    }
}

/// Register `handler` for every local [`publish`] and every cross-tab
/// storage change that touches the credential slots.
pub fn subscribe(handler: impl Fn() + 'static) -> Subscription {
    install_storage_listener();
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    HANDLERS.with(|handlers| {
        handlers.borrow_mut().push((id, Rc::new(handler)));
    });
    Subscription { id }
}

/// Notify every subscriber in this tab.
///
/// Called after the credential slots have been written or cleared; it
/// carries no payload, so subscribers re-read the store for truth.
pub fn publish() {
    // Snapshot before invoking so handlers can subscribe or unsubscribe
    // re-entrantly without poisoning the registry borrow.
    let snapshot: Vec<Handler> = HANDLERS.with(|handlers| {
        handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect()
    });
    for handler in snapshot {
        handler();
    }
}

/// Whether a `storage` event for `key` affects the credential pair.
///
/// A `None` key means the whole store was cleared, which includes both
/// credential slots.
#[cfg(any(test, feature = "hydrate"))]
fn credential_key_changed(key: Option<&str>) -> bool {
    match key {
        None => true,
        Some(key) => key == ACCESS_TOKEN_KEY || key == REFRESH_TOKEN_KEY,
    }
}

/// Attach the cross-tab `storage` listener once per page load.
///
/// The browser only delivers `storage` events to *other* tabs, so this
/// never double-notifies the tab that performed the write.
#[cfg(feature = "hydrate")]
fn install_storage_listener() {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    thread_local! {
        static LISTENER: RefCell<Option<Closure<dyn FnMut(web_sys::StorageEvent)>>> =
            const { RefCell::new(None) };
    }

    LISTENER.with(|listener| {
        if listener.borrow().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::wrap(Box::new(move |event: web_sys::StorageEvent| {
            if credential_key_changed(event.key().as_deref()) {
                publish();
            }
        }) as Box<dyn FnMut(web_sys::StorageEvent)>);
        if window
            .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            // The listener lives for the rest of the page; keep the closure alive.
            *listener.borrow_mut() = Some(callback);
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn install_storage_listener() {}
