use chrono::{NaiveDate, NaiveDateTime};
use js_sys::Date;
use shared::Clock;

/// Local wall-clock time as the browser sees it
pub fn now_local() -> NaiveDateTime {
    from_js_date(&Date::new_0()).unwrap_or_default()
}

pub fn current_year() -> i32 {
    Date::new_0().get_full_year() as i32
}

fn from_js_date(date: &Date) -> Option<NaiveDateTime> {
    let year = date.get_full_year() as i32;
    let month = date.get_month() + 1; // JavaScript months are 0-indexed
    let day = date.get_date();

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds())
}

/// The reservation dialog's view of "now"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> NaiveDateTime {
        now_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_from_js_date_uses_local_components() {
        // month is 0-indexed on the JS side
        let date = Date::new_with_year_month_day_hr_min(2025, 5, 14, 19, 30);
        let parsed = from_js_date(&date).unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2025-06-14 19:30");
    }

    #[wasm_bindgen_test]
    fn test_browser_clock_agrees_with_current_year() {
        let today = BrowserClock.today();
        assert_eq!(today.format("%Y").to_string(), current_year().to_string());
    }
}
