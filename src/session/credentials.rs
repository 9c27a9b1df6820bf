//! Persisted credential slots backed by browser `localStorage`.
//!
//! DESIGN
//! ======
//! Two flat string entries under fixed keys, no envelope. Presence of a
//! non-empty access token is the only authentication signal; validity is
//! discovered reactively when the API rejects it. A missing or disabled
//! storage layer reads as signed out and writes as a no-op, never an error.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

/// Storage key for the short-lived API token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the long-lived renewal token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// The token pair issued by the login and registration endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: String,
}

/// Persist both tokens.
///
/// The two slots are always written together; other tabs learn about the
/// write through the browser's native `storage` event.
pub fn set(access_token: &str, refresh_token: &str) {
    write_key(ACCESS_TOKEN_KEY, access_token);
    write_key(REFRESH_TOKEN_KEY, refresh_token);
}

/// Read the stored pair, or `None` when either slot is empty.
///
/// Pairing is a writer discipline, not enforced here: an orphaned single
/// slot simply reads as `None`.
pub fn get() -> Option<Credential> {
    let access_token = read_key(ACCESS_TOKEN_KEY)?;
    let refresh_token = read_key(REFRESH_TOKEN_KEY)?;
    Some(Credential {
        access_token,
        refresh_token,
    })
}

/// Remove both tokens. Safe to call when nothing is stored.
pub fn clear() {
    remove_key(ACCESS_TOKEN_KEY);
    remove_key(REFRESH_TOKEN_KEY);
}

/// The stored access token, for `Authorization: Bearer` headers.
pub fn access_token() -> Option<String> {
    read_key(ACCESS_TOKEN_KEY)
}

/// Whether a non-empty access token is currently stored.
pub fn has_access_token() -> bool {
    access_token().is_some_and(|token| !token.is_empty())
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn read_key(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn write_key(key: &str, value: &str) {
    let Some(storage) = storage() else {
        return;
    };
    let _ = storage.set_item(key, value);
}

#[cfg(feature = "hydrate")]
fn remove_key(key: &str) {
    let Some(storage) = storage() else {
        return;
    };
    let _ = storage.remove_item(key);
}

// Native tests run against a thread-local map; the default test harness
// gives each test its own thread and therefore a fresh store.
#[cfg(all(not(feature = "hydrate"), test))]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }

    pub fn remove(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

#[cfg(all(not(feature = "hydrate"), test))]
fn read_key(key: &str) -> Option<String> {
    memory::read(key)
}

#[cfg(all(not(feature = "hydrate"), test))]
fn write_key(key: &str, value: &str) {
    memory::write(key, value);
}

#[cfg(all(not(feature = "hydrate"), test))]
fn remove_key(key: &str) {
    memory::remove(key);
}

#[cfg(all(not(feature = "hydrate"), not(test)))]
fn read_key(key: &str) -> Option<String> {
    let _ = key;
    None
}

#[cfg(all(not(feature = "hydrate"), not(test)))]
fn write_key(key: &str, value: &str) {
    let _ = (key, value);
}

#[cfg(all(not(feature = "hydrate"), not(test)))]
fn remove_key(key: &str) {
    let _ = key;
}
