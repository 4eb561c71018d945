//! Supplies "today" as a plain calendar date.
//!
//! The date comes from the browser clock, optionally overridden with a
//! `?date=YYYY-MM-DD` query parameter. The override is deliberate and
//! unvalidated beyond parseability: this is a private gift app, and the
//! owner previews future days with it. There is no server to agree with.

use chrono::NaiveDate;

use crate::services::logging::Logger;

/// Today's date, honoring the `?date=` override when present.
///
/// Resolve this once per session and classify every day against the same
/// value — mixing reference dates makes the unlock predicates disagree.
pub fn today() -> NaiveDate {
    if let Some(date) = date_override() {
        Logger::info_with_component("clock", &format!("using overridden date {}", date));
        return date;
    }
    system_today()
}

/// The browser's local calendar date.
fn system_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    // JavaScript months are 0-indexed.
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1;
    let day = now.get_date();
    // The browser clock cannot produce an out-of-range date; the fallback
    // only keeps this total.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// `?date=YYYY-MM-DD` from the location search, if present and parseable.
fn date_override() -> Option<NaiveDate> {
    let search = web_sys::window()?.location().search().ok()?;
    if search.is_empty() {
        return None;
    }
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let raw = params.get("date")?;
    match parse_override(&raw) {
        Some(date) => Some(date),
        None => {
            Logger::warn_with_component(
                "clock",
                &format!("ignoring unparseable date override '{}'", raw),
            );
            None
        }
    }
}

fn parse_override(raw: &str) -> Option<NaiveDate> {
    raw.trim().parse::<NaiveDate>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_parse_override_accepts_iso_dates() {
        assert_eq!(
            parse_override("2025-12-02"),
            Some("2025-12-02".parse().unwrap())
        );
        assert_eq!(
            parse_override(" 2025-11-01 "),
            Some("2025-11-01".parse().unwrap())
        );
    }

    #[wasm_bindgen_test]
    fn test_parse_override_rejects_garbage() {
        assert_eq!(parse_override("tomorrow"), None);
        assert_eq!(parse_override("2025-13-40"), None);
        assert_eq!(parse_override(""), None);
    }

    #[wasm_bindgen_test]
    fn test_system_today_is_a_real_date() {
        // Sanity: whatever the harness clock says, it parses into chrono.
        let today = system_today();
        assert!(today.to_string().len() >= 10);
    }
}
