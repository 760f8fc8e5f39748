use crate::domain::errors::AppError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, Utc};
use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

/// Offset of the zone all ranges and labels are expressed in (UTC+9).
pub const DISPLAY_OFFSET_SECS: i32 = 9 * 60 * 60;

pub fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_OFFSET_SECS).unwrap_or(Utc.fix())
}

/// Value Object - hour of day, 0..=23
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize)]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub const FIRST: HourOfDay = HourOfDay(0);
    pub const LAST: HourOfDay = HourOfDay(23);

    pub fn new(hour: u8) -> Result<Self, AppError> {
        if hour > 23 {
            return Err(AppError::ValidationError(format!(
                "hour must be between 0 and 23, got {}",
                hour
            )));
        }
        Ok(Self(hour))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Every valid hour, for the filter's select controls.
    pub fn all() -> impl Iterator<Item = HourOfDay> {
        (0..=23).map(HourOfDay)
    }
}

/// Value Object - inclusive date + hour window in the display zone
///
/// The window starts at `start_date start_hour:00:00` and ends at
/// `end_date end_hour:59:59`. A window whose start is after its end
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_hour: HourOfDay,
    pub end_hour: HourOfDay,
}

impl DateTimeRange {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_hour: HourOfDay,
        end_hour: HourOfDay,
    ) -> Self {
        Self { start_date, end_date, start_hour, end_hour }
    }

    /// The whole of `date` (hours 0 through 23).
    pub fn full_day(date: NaiveDate) -> Self {
        Self::new(date, date, HourOfDay::FIRST, HourOfDay::LAST)
    }

    /// Default filter: today in the display zone, all 24 hours.
    pub fn today(now: DateTime<Utc>) -> Self {
        Self::full_day(now.with_timezone(&display_offset()).date_naive())
    }

    /// Build from the filter form: `YYYY-MM-DD` dates and decimal hours.
    pub fn parse_form(
        start_date: &str,
        end_date: &str,
        start_hour: &str,
        end_hour: &str,
    ) -> Result<Self, AppError> {
        Ok(Self::new(
            parse_date(start_date)?,
            parse_date(end_date)?,
            parse_hour(start_hour)?,
            parse_hour(end_hour)?,
        ))
    }

    /// Local (display zone) wall-clock bounds.
    pub fn local_bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.start_date.and_time(NaiveTime::MIN)
            + TimeDelta::hours(i64::from(self.start_hour.value()));
        let end = self.end_date.and_time(NaiveTime::MIN)
            + TimeDelta::hours(i64::from(self.end_hour.value()))
            + TimeDelta::minutes(59)
            + TimeDelta::seconds(59);
        (start, end)
    }

    /// Bounds converted to naive UTC, comparable with `ScoreRecord::created_at`.
    pub fn utc_bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        let shift = TimeDelta::seconds(i64::from(display_offset().local_minus_utc()));
        let (start, end) = self.local_bounds();
        (start - shift, end - shift)
    }

    pub fn bounds(&self) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
        let (start, end) = self.utc_bounds();
        (
            DateTime::from_naive_utc_and_offset(start, display_offset()),
            DateTime::from_naive_utc_and_offset(end, display_offset()),
        )
    }

    pub fn is_inverted(&self) -> bool {
        let (start, end) = self.local_bounds();
        start > end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, created_at: NaiveDateTime) -> bool {
        let (start, end) = self.utc_bounds();
        start <= created_at && created_at <= end
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::ValidationError(format!("invalid date '{}': {}", value, e)))
}

fn parse_hour(value: &str) -> Result<HourOfDay, AppError> {
    let hour = value
        .trim()
        .parse::<u8>()
        .map_err(|_| AppError::ValidationError(format!("invalid hour '{}'", value)))?;
    HourOfDay::new(hour)
}

/// Value Object - fun/tired accumulators over a range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTotals {
    pub fun: u64,
    pub tired: u64,
}

impl AggregateTotals {
    pub fn new(fun: u64, tired: u64) -> Self {
        Self { fun, tired }
    }

    pub fn total(&self) -> u64 {
        self.fun.saturating_add(self.tired)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of `fun` in percent; `None` when there is nothing to share.
    pub fn fun_percent(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.fun as f64 * 100.0 / self.total() as f64)
    }

    pub fn tired_percent(&self) -> Option<f64> {
        self.fun_percent().map(|fun| 100.0 - fun)
    }
}
