//! Opening hours validation
//!
//! A separate pass over a [`WeekSchedule`]. Transitions accept any string, so
//! this is where callers check a week before handing it on. Closed days are
//! skipped entirely.

use super::schedule::{Bound, DaySchedule, Period, TimeInterval, WeekSchedule, Weekday};
use crate::error::{AppError, AppResult, ErrorCode};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Wall-clock format used by the time inputs
pub const TIME_FORMAT: &str = "%H:%M";

/// One problem found on an open day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleIssue {
    pub day: Weekday,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound: Option<Bound>,
    pub code: ErrorCode,
    pub message: String,
}

impl ScheduleIssue {
    fn new(day: Weekday, code: ErrorCode, message: String) -> Self {
        Self {
            day,
            period: None,
            bound: None,
            code,
            message,
        }
    }

    fn at(mut self, period: Period, bound: Option<Bound>) -> Self {
        self.period = Some(period);
        self.bound = bound;
        self
    }
}

/// Parse a `HH:MM` time bound
///
/// Exactly two hour digits, a colon and two minute digits. chrono alone
/// would also take `8:5`.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !well_formed {
        return None;
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
}

/// Check every open day and collect all issues, Monday first.
pub fn validate_week(week: &WeekSchedule) -> Vec<ScheduleIssue> {
    week.open_days().flat_map(validate_day).collect()
}

/// Run [`validate_week`] and turn any issue into a `ValidationFailed` error.
///
/// The issues are attached under the `issues` detail key.
pub fn ensure_valid(week: &WeekSchedule) -> AppResult<()> {
    let issues = validate_week(week);
    if issues.is_empty() {
        return Ok(());
    }

    let count = issues.len();
    let first = issues[0].message.clone();
    let issues = serde_json::to_value(&issues)?;
    Err(
        AppError::validation(format!("{count} opening hours issue(s), first: {first}"))
            .with_detail("issues", issues),
    )
}

fn validate_day(day: &DaySchedule) -> Vec<ScheduleIssue> {
    let mut issues = Vec::new();

    let morning = check_interval(day.day, Period::Morning, &day.morning, &mut issues);
    let afternoon = check_interval(day.day, Period::Afternoon, &day.afternoon, &mut issues);

    if let (Some((_, morning_end)), Some((afternoon_start, _))) = (morning, afternoon)
        && morning_end > afternoon_start
    {
        issues.push(
            ScheduleIssue::new(
                day.day,
                ErrorCode::IntervalsOverlap,
                format!(
                    "{}: morning ends at {} after afternoon starts at {}",
                    day.day, day.morning.end, day.afternoon.start
                ),
            )
            .at(Period::Afternoon, Some(Bound::Start)),
        );
    }

    issues
}

/// Parsed `(start, end)` when both bounds are well-formed and ordered.
fn check_interval(
    day: Weekday,
    period: Period,
    interval: &TimeInterval,
    issues: &mut Vec<ScheduleIssue>,
) -> Option<(NaiveTime, NaiveTime)> {
    let start = check_bound(day, period, Bound::Start, interval, issues);
    let end = check_bound(day, period, Bound::End, interval, issues);
    let (start, end) = (start?, end?);

    if start >= end {
        issues.push(
            ScheduleIssue::new(
                day,
                ErrorCode::IntervalInverted,
                format!(
                    "{day} {}: {} is not before {}",
                    period_name(period),
                    interval.start,
                    interval.end
                ),
            )
            .at(period, None),
        );
        return None;
    }

    Some((start, end))
}

fn check_bound(
    day: Weekday,
    period: Period,
    bound: Bound,
    interval: &TimeInterval,
    issues: &mut Vec<ScheduleIssue>,
) -> Option<NaiveTime> {
    let value = interval.get(bound);
    if value.trim().is_empty() {
        issues.push(
            ScheduleIssue::new(
                day,
                ErrorCode::MissingHours,
                format!("{day} {}: {} is empty", period_name(period), bound_name(bound)),
            )
            .at(period, Some(bound)),
        );
        return None;
    }

    let parsed = parse_time(value);
    if parsed.is_none() {
        issues.push(
            ScheduleIssue::new(
                day,
                ErrorCode::InvalidTimeFormat,
                format!(
                    "{day} {}: {} '{value}' is not HH:MM",
                    period_name(period),
                    bound_name(bound)
                ),
            )
            .at(period, Some(bound)),
        );
    }
    parsed
}

fn period_name(period: Period) -> &'static str {
    match period {
        Period::Morning => "morning",
        Period::Afternoon => "afternoon",
    }
}

fn bound_name(bound: Bound) -> &'static str {
    match bound {
        Bound::Start => "start",
        Bound::End => "end",
    }
}
