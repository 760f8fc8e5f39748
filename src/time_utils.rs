use crate::domain::scores::display_offset;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Render a naive-UTC record timestamp in the display zone (UTC+9) as
/// `YYYY/MM/DD HH:MM:SS`.
pub fn format_display_timestamp(created_at: NaiveDateTime) -> String {
    created_at
        .and_utc()
        .with_timezone(&display_offset())
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}

/// `YYYY-MM-DD`, the value format of `<input type="date">`.
pub fn format_form_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}
