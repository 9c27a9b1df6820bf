//! Human-readable display of server timestamps.
//!
//! Locale formatting needs the browser's `Date`; SSR and native tests fall
//! back to the date portion of the raw ISO string.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Locale-formatted date for an ISO 8601 timestamp.
pub fn display_date(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let parsed = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if parsed.get_time().is_nan() {
            return date_portion(iso).to_owned();
        }
        String::from(parsed.to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        date_portion(iso).to_owned()
    }
}

/// The `YYYY-MM-DD` prefix of an ISO 8601 timestamp.
fn date_portion(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}
