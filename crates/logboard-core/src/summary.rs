//! KPI counts and chart series.
//!
//! KPI counts are always taken over the whole collection; only the
//! pagination fields of [`Summary`] follow the active filter.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::models::{Record, Severity, Status};
use crate::util::leading_date;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct SeverityCounts {
    pub critical: usize,
    pub error: usize,
    pub warning: usize,
}

impl SeverityCounts {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut counts = Self::default();
        for r in records {
            counts.add(r.severity);
        }
        counts
    }

    fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::Error => self.error += 1,
            Severity::Warning => self.warning += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::Error => self.error,
            Severity::Warning => self.warning,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.error + self.warning
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct StatusCounts {
    pub new: usize,
    pub investigating: usize,
    pub resolved: usize,
}

impl StatusCounts {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut counts = Self::default();
        for r in records {
            match r.status {
                Status::New => counts.new += 1,
                Status::Investigating => counts.investigating += 1,
                Status::Resolved => counts.resolved += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::New => self.new,
            Status::Investigating => self.investigating,
            Status::Resolved => self.resolved,
        }
    }

    pub fn total(&self) -> usize {
        self.new + self.investigating + self.resolved
    }
}

/// Aggregates for KPI cards and pagination text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct Summary {
    /// Records passing the active filter.
    pub total_filtered: usize,
    /// Whole collection.
    pub total_unfiltered: usize,
    pub current_page: usize,
    pub total_pages: usize,
    /// Over the unfiltered collection.
    pub severity_counts: SeverityCounts,
    /// Over the unfiltered collection.
    pub status_counts: StatusCounts,
}

// ---------------------------------------------------------------------------
// Trend series
// ---------------------------------------------------------------------------

/// Time window of the trends chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendPeriod {
    /// Last 7 days, daily buckets.
    #[default]
    Week,
    /// Last 30 days, daily buckets.
    Month,
    /// Last 12 months, monthly buckets.
    Year,
}

impl TrendPeriod {
    pub fn parse(s: &str) -> Self {
        match s {
            "month" => Self::Month,
            "year" => Self::Year,
            _ => Self::Week,
        }
    }
}

/// Per-severity counts per bucket, oldest bucket first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct TrendSeries {
    /// `YYYY-MM-DD` for daily buckets, `YYYY-MM` for monthly.
    pub buckets: Vec<String>,
    pub critical: Vec<u32>,
    pub error: Vec<u32>,
    pub warning: Vec<u32>,
}

/// Bucket records by day or month over the period ending at `today`.
///
/// A record lands on the date written in its timestamp; offsets are not
/// applied. Records without a leading date or outside the window are ignored.
pub fn trend<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    period: TrendPeriod,
    today: NaiveDate,
) -> TrendSeries {
    let starts: Vec<NaiveDate> = match period {
        TrendPeriod::Week => last_days(today, 7),
        TrendPeriod::Month => last_days(today, 30),
        TrendPeriod::Year => last_months(today, 12),
    };
    let monthly = period == TrendPeriod::Year;

    let n = starts.len();
    let mut series = TrendSeries {
        buckets: starts
            .iter()
            .map(|d| {
                if monthly {
                    d.format("%Y-%m").to_string()
                } else {
                    d.format("%Y-%m-%d").to_string()
                }
            })
            .collect(),
        critical: vec![0; n],
        error: vec![0; n],
        warning: vec![0; n],
    };

    for r in records {
        let Some(date) = leading_date(&r.timestamp) else {
            continue;
        };
        let idx = if monthly {
            starts
                .iter()
                .position(|s| s.year() == date.year() && s.month() == date.month())
        } else {
            starts.iter().position(|s| *s == date)
        };
        let Some(idx) = idx else { continue };
        let slot = match r.severity {
            Severity::Critical => &mut series.critical[idx],
            Severity::Error => &mut series.error[idx],
            Severity::Warning => &mut series.warning[idx],
        };
        *slot += 1;
    }

    series
}

fn last_days(today: NaiveDate, n: u64) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .filter_map(|i| today.checked_sub_days(chrono::Days::new(i)))
        .collect()
}

fn last_months(today: NaiveDate, n: u32) -> Vec<NaiveDate> {
    let first = today.with_day(1).unwrap_or(today);
    (0..n)
        .rev()
        .filter_map(|i| first.checked_sub_months(Months::new(i)))
        .collect()
}
