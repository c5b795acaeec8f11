// src/derivation/date_range.rs
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    #[serde(alias = "Today")]
    Today,
    #[serde(rename = "last_24_hours", alias = "24 Hours")]
    Last24Hours,
    #[serde(rename = "last_7_days", alias = "7 Days", alias = "Last 7 Days")]
    Last7Days,
    #[serde(alias = "This Month", alias = "Month")]
    ThisMonth,
    #[serde(alias = "This Year", alias = "Year")]
    ThisYear,
    #[default]
    #[serde(alias = "All")]
    All,
}

impl DateRange {
    /// Buckets shown on the dashboard sales chart, in display order.
    pub const CHART_BUCKETS: [DateRange; 4] = [
        DateRange::Today,
        DateRange::Last7Days,
        DateRange::ThisMonth,
        DateRange::ThisYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Last24Hours => "24 Hours",
            DateRange::Last7Days => "7 Days",
            DateRange::ThisMonth => "Month",
            DateRange::ThisYear => "Year",
            DateRange::All => "All",
        }
    }
}

/// Whether `created_at` falls inside `range` as seen from `now`.
///
/// Calendar comparisons (today, month, year) happen in `now`'s timezone.
/// Rolling windows are inclusive and also accept timestamps in the future.
/// A missing timestamp only matches [`DateRange::All`].
pub fn matches_date_range<Tz: TimeZone>(
    created_at: Option<DateTime<Utc>>,
    range: DateRange,
    now: &DateTime<Tz>,
) -> bool {
    if range == DateRange::All {
        return true;
    }
    let Some(created_at) = created_at else {
        return false;
    };

    let local = created_at.with_timezone(&now.timezone());
    let elapsed = now.with_timezone(&Utc) - created_at;

    match range {
        DateRange::Today => local.date_naive() == now.date_naive(),
        DateRange::Last24Hours => elapsed <= Duration::hours(24),
        DateRange::Last7Days => elapsed <= Duration::days(7),
        DateRange::ThisMonth => local.year() == now.year() && local.month() == now.month(),
        DateRange::ThisYear => local.year() == now.year(),
        DateRange::All => true,
    }
}
