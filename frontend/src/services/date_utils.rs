use chrono::{FixedOffset, NaiveDate, NaiveTime, Offset, Timelike, Utc};

/// Today's date in the browser's local zone
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The browser's current offset from UTC
pub fn local_offset() -> FixedOffset {
    use js_sys::Date;
    // minutes to add to local time to reach UTC
    let minutes = Date::new_0().get_timezone_offset();
    FixedOffset::west_opt((minutes * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

/// e.g. "June 1, 2024"
pub fn format_date_for_display(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// e.g. "9:00 AM"
pub fn format_time_for_display(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Row label of the time grid, e.g. "9am" or "12pm"
pub fn hour_label(hour: u32) -> String {
    let suffix = if hour < 12 { "am" } else { "pm" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}{}", display, suffix)
}

/// Column header of the time grid, e.g. "Sun 6/2"
pub fn day_header(date: NaiveDate) -> String {
    date.format("%a %-m/%-d").to_string()
}

/// Short start time shown on an event chip, e.g. "9:00"
pub fn chip_time(time: NaiveTime) -> String {
    let hour = match time.hour() % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02}", hour, time.minute())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_is_a_real_date() {
        assert_ne!(today(), NaiveDate::default());
    }

    #[wasm_bindgen_test]
    fn test_local_offset_within_a_day() {
        assert!(local_offset().local_minus_utc().abs() < 24 * 3600);
    }
}
