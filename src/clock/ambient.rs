//! Ambient Environment
//!
//! The clock needs one value it cannot derive from its seed: the viewer's
//! timezone name. It lives behind a trait so tests can pin the zone instead
//! of inheriting whatever machine they run on.

use wasm_bindgen::JsValue;

/// Source of ambient browser values.
pub trait Ambient {
    /// Abbreviated name of the system timezone at the current instant,
    /// e.g. "EST" or "GMT+2". Never empty.
    fn short_timezone(&self) -> String;
}

/// `Ambient` backed by the browser's `Intl` API.
pub struct BrowserAmbient;

impl Ambient for BrowserAmbient {
    fn short_timezone(&self) -> String {
        short_timezone_via_intl().unwrap_or_else(|| "UTC".to_string())
    }
}

/// Ask `Intl.DateTimeFormat` for a short zone name. The formatted output
/// looks like "5/20/2025, EST"; the zone is the token after the comma.
fn short_timezone_via_intl() -> Option<String> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("timeZoneName"),
        &JsValue::from_str("short"),
    )
    .ok()?;

    let locales = js_sys::Array::of1(&JsValue::from_str("en-US"));
    let formatter = js_sys::Intl::DateTimeFormat::new(&locales, &options);
    let formatted = formatter
        .format()
        .call1(&JsValue::UNDEFINED, &js_sys::Date::new_0())
        .ok()?
        .as_string()?;

    let zone = formatted.rsplit(',').next()?.trim();
    if zone.is_empty() {
        None
    } else {
        Some(zone.to_string())
    }
}

/// Fixed-zone ambient for unit tests.
#[cfg(test)]
pub struct FixedAmbient(&'static str);

#[cfg(test)]
impl FixedAmbient {
    pub fn new(zone: &'static str) -> Self {
        Self(zone)
    }
}

#[cfg(test)]
impl Ambient for FixedAmbient {
    fn short_timezone(&self) -> String {
        self.0.to_string()
    }
}
