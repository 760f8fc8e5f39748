use crate::domain::{
    errors::AppError,
    scores::{DateTimeRange, HourOfDay},
};
use crate::time_utils::format_form_date;
use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// The two dashboard screens. `as_ref()` is the URL hash fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
pub enum DashboardView {
    #[default]
    #[display(fmt = "Live")]
    #[strum(serialize = "live")]
    Live,
    #[display(fmt = "Totals")]
    #[strum(serialize = "totals")]
    Totals,
}

impl DashboardView {
    /// View named by a location hash such as `#totals`; unknown hashes map
    /// to the default view.
    pub fn from_hash(hash: &str) -> Self {
        hash.trim_start_matches('#').parse().unwrap_or_default()
    }

    pub fn hash(&self) -> String {
        format!("#{}", self.as_ref())
    }

    pub fn all() -> impl Iterator<Item = DashboardView> {
        DashboardView::iter()
    }
}

/// Raw values of the range filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeForm {
    pub start_date: String,
    pub end_date: String,
    pub start_hour: String,
    pub end_hour: String,
}

impl RangeForm {
    pub fn from_range(range: &DateTimeRange) -> Self {
        Self {
            start_date: format_form_date(range.start_date),
            end_date: format_form_date(range.end_date),
            start_hour: range.start_hour.to_string(),
            end_hour: range.end_hour.to_string(),
        }
    }

    pub fn to_range(&self) -> Result<DateTimeRange, AppError> {
        DateTimeRange::parse_form(&self.start_date, &self.end_date, &self.start_hour, &self.end_hour)
    }

    /// `(value, label)` pairs for the hour selects.
    pub fn hour_options() -> Vec<(String, String)> {
        HourOfDay::all()
            .map(|hour| (hour.to_string(), format!("{:02}:00", hour.value())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn hash_round_trip_and_fallback() {
        assert_eq!(DashboardView::from_hash("#totals"), DashboardView::Totals);
        assert_eq!(DashboardView::from_hash("live"), DashboardView::Live);
        assert_eq!(DashboardView::from_hash(""), DashboardView::Live);
        assert_eq!(DashboardView::from_hash("#nope"), DashboardView::Live);
        assert_eq!(DashboardView::Totals.hash(), "#totals");
        assert_eq!(DashboardView::all().count(), 2);
    }

    #[test]
    fn form_mirrors_range() {
        let range = DateTimeRange::full_day(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());
        let form = RangeForm::from_range(&range);
        assert_eq!(form.start_date, "2024-07-04");
        assert_eq!(form.start_hour, "0");
        assert_eq!(form.end_hour, "23");
        assert_eq!(form.to_range().unwrap(), range);
    }

    #[test]
    fn hour_options_cover_the_day() {
        let options = RangeForm::hour_options();
        assert_eq!(options.len(), 24);
        assert_eq!(options[9], ("9".to_string(), "09:00".to_string()));
    }
}
