//! Weekly Opening Hours Model
//!
//! A practitioner's week is seven [`DaySchedule`]s, Monday first. Every
//! transition borrows the current week and returns a new one, so a caller can
//! detect edits by comparing the two values.
//!
//! Monday is the copy source for all propagation operations.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days in a [`WeekSchedule`]
pub const DAYS_IN_WEEK: usize = 7;

// ============================================================================
// Weekday
// ============================================================================

/// Day of the week, in schedule order (Monday = index 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in schedule order
    pub const ALL: [Weekday; DAYS_IN_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Tuesday to Friday, the targets of a weekday copy
    pub const WEEKDAY_TARGETS: [Weekday; 4] = [
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Day at `index` in schedule order.
    ///
    /// # Panics
    ///
    /// Panics when `index >= 7`. Indices come from iterating the fixed week,
    /// so an out-of-range value is a caller bug. Use `Weekday::try_from` for
    /// indices that cross a trust boundary.
    pub fn at(index: usize) -> Self {
        match Self::ALL.get(index) {
            Some(day) => *day,
            None => panic!("day index {index} out of range (expected 0..{DAYS_IN_WEEK})"),
        }
    }

    /// Position in the week (Monday = 0)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Monday to Friday
    pub const fn is_weekday(self) -> bool {
        !matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Label shown next to the day checkbox
    pub const fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Lundi",
            Weekday::Tuesday => "Mardi",
            Weekday::Wednesday => "Mercredi",
            Weekday::Thursday => "Jeudi",
            Weekday::Friday => "Vendredi",
            Weekday::Saturday => "Samedi",
            Weekday::Sunday => "Dimanche",
        }
    }
}

impl TryFrom<usize> for Weekday {
    type Error = AppError;

    fn try_from(index: usize) -> AppResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| AppError::day_out_of_range(index))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Intervals
// ============================================================================

/// Half-day slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Morning,
    Afternoon,
}

/// Which end of an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Start,
    End,
}

/// One open period within a day
///
/// `start` and `end` are wall-clock `HH:MM` strings, or empty when unset.
/// Ordering between them is not enforced here; see
/// [`validate_week`](super::validation::validate_week).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl TimeInterval {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn get(&self, bound: Bound) -> &str {
        match bound {
            Bound::Start => &self.start,
            Bound::End => &self.end,
        }
    }

    fn slot_mut(&mut self, bound: Bound) -> &mut String {
        match bound {
            Bound::Start => &mut self.start,
            Bound::End => &mut self.end,
        }
    }

    /// Both bounds empty
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}

// ============================================================================
// Day / Week
// ============================================================================

/// Opening configuration of a single day
///
/// Interval fields are kept while the day is closed, so reopening a day
/// brings back the hours entered before.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Weekday,
    pub is_open: bool,
    #[serde(default)]
    pub morning: TimeInterval,
    #[serde(default)]
    pub afternoon: TimeInterval,
}

impl DaySchedule {
    /// Open day with the given intervals
    pub fn open(day: Weekday, morning: TimeInterval, afternoon: TimeInterval) -> Self {
        Self {
            day,
            is_open: true,
            morning,
            afternoon,
        }
    }

    /// Closed day with empty intervals
    pub fn closed(day: Weekday) -> Self {
        Self {
            day,
            is_open: false,
            morning: TimeInterval::default(),
            afternoon: TimeInterval::default(),
        }
    }

    pub fn interval(&self, period: Period) -> &TimeInterval {
        match period {
            Period::Morning => &self.morning,
            Period::Afternoon => &self.afternoon,
        }
    }

    fn interval_mut(&mut self, period: Period) -> &mut TimeInterval {
        match period {
            Period::Morning => &mut self.morning,
            Period::Afternoon => &mut self.afternoon,
        }
    }

    /// Take `is_open` and both intervals from `source`, keeping `self.day`.
    fn copy_hours_from(&mut self, source: &DaySchedule) {
        self.is_open = source.is_open;
        self.morning = source.morning.clone();
        self.afternoon = source.afternoon.clone();
    }

    /// Same open flag and intervals, ignoring the day label
    pub fn same_hours(&self, other: &DaySchedule) -> bool {
        self.is_open == other.is_open
            && self.morning == other.morning
            && self.afternoon == other.afternoon
    }
}

/// Seven days of opening hours, Monday first
///
/// The array length and the day order are fixed; decoding rejects any other
/// layout with [`ErrorCode::InvalidWeekLayout`](crate::error::ErrorCode).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<DaySchedule>", try_from = "Vec<DaySchedule>")]
pub struct WeekSchedule {
    days: [DaySchedule; DAYS_IN_WEEK],
}

impl Default for WeekSchedule {
    /// Mon–Fri 09:00–12:00 / 14:00–18:00, weekend closed.
    fn default() -> Self {
        Self::from_fn(|day| {
            if day.is_weekday() {
                DaySchedule::open(
                    day,
                    TimeInterval::new("09:00", "12:00"),
                    TimeInterval::new("14:00", "18:00"),
                )
            } else {
                DaySchedule::closed(day)
            }
        })
    }
}

impl WeekSchedule {
    /// Build a week by calling `f` once per day, Monday first.
    pub fn from_fn(mut f: impl FnMut(Weekday) -> DaySchedule) -> Self {
        let days = Weekday::ALL.map(|day| {
            let mut schedule = f(day);
            schedule.day = day;
            schedule
        });
        Self { days }
    }

    /// Every day closed with empty intervals
    pub fn all_closed() -> Self {
        Self::from_fn(DaySchedule::closed)
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.index()]
    }

    pub fn monday(&self) -> &DaySchedule {
        self.day(Weekday::Monday)
    }

    pub fn days(&self) -> &[DaySchedule; DAYS_IN_WEEK] {
        &self.days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DaySchedule> {
        self.days.iter()
    }

    /// Days whose `is_open` flag is set
    pub fn open_days(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.iter().filter(|d| d.is_open)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Toggle a day open or closed. Intervals are left as they are.
    pub fn set_day_open(&self, day: Weekday, is_open: bool) -> Self {
        let mut next = self.clone();
        next.days[day.index()].is_open = is_open;
        next
    }

    /// Replace a single time bound. No format or ordering check is done.
    pub fn set_interval(
        &self,
        day: Weekday,
        period: Period,
        bound: Bound,
        value: impl Into<String>,
    ) -> Self {
        let mut next = self.clone();
        *next.days[day.index()]
            .interval_mut(period)
            .slot_mut(bound) = value.into();
        next
    }

    /// Copy Monday's open flag and intervals onto `target`.
    ///
    /// Copying onto Monday itself leaves the week unchanged.
    pub fn copy_monday_to(&self, target: Weekday) -> Self {
        self.copy_monday_onto(&[target])
    }

    /// Copy Monday onto Tuesday through Friday. Weekend days are untouched.
    pub fn copy_monday_to_weekdays(&self) -> Self {
        self.copy_monday_onto(&Weekday::WEEKDAY_TARGETS)
    }

    /// Copy Monday onto every day of the week.
    pub fn copy_monday_to_all_days(&self) -> Self {
        self.copy_monday_onto(&Weekday::ALL)
    }

    fn copy_monday_onto(&self, targets: &[Weekday]) -> Self {
        let source = self.monday().clone();
        let mut next = self.clone();
        for target in targets {
            next.days[target.index()].copy_hours_from(&source);
        }
        next
    }
}

impl<'a> IntoIterator for &'a WeekSchedule {
    type Item = &'a DaySchedule;
    type IntoIter = std::slice::Iter<'a, DaySchedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

impl From<WeekSchedule> for Vec<DaySchedule> {
    fn from(week: WeekSchedule) -> Self {
        week.days.into()
    }
}

impl TryFrom<Vec<DaySchedule>> for WeekSchedule {
    type Error = AppError;

    fn try_from(days: Vec<DaySchedule>) -> AppResult<Self> {
        let len = days.len();
        let days: [DaySchedule; DAYS_IN_WEEK] = days.try_into().map_err(|_| {
            AppError::week_layout(format!("expected {DAYS_IN_WEEK} days, got {len}"))
                .with_detail("len", len)
        })?;

        for (index, schedule) in days.iter().enumerate() {
            let expected = Weekday::at(index);
            if schedule.day != expected {
                return Err(AppError::week_layout(format!(
                    "day {index} must be {expected:?}, got {:?}",
                    schedule.day
                ))
                .with_detail("index", index));
            }
        }

        Ok(Self { days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn custom_monday() -> WeekSchedule {
        WeekSchedule::default()
            .set_interval(Weekday::Monday, Period::Morning, Bound::Start, "08:00")
            .set_interval(Weekday::Monday, Period::Afternoon, Bound::End, "19:30")
    }

    #[test]
    fn test_default_seed() {
        let week = WeekSchedule::default();

        for day in Weekday::ALL.iter().take(5) {
            let d = week.day(*day);
            assert!(d.is_open);
            assert_eq!(d.morning, TimeInterval::new("09:00", "12:00"));
            assert_eq!(d.afternoon, TimeInterval::new("14:00", "18:00"));
        }
        for day in [Weekday::Saturday, Weekday::Sunday] {
            let d = week.day(day);
            assert!(!d.is_open);
            assert!(d.morning.is_empty());
            assert!(d.afternoon.is_empty());
        }
    }

    #[test]
    fn test_days_are_index_aligned() {
        let week = WeekSchedule::default();
        for (index, d) in week.iter().enumerate() {
            assert_eq!(d.day.index(), index);
        }
    }

    #[test]
    fn test_weekday_at_and_try_from() {
        assert_eq!(Weekday::at(0), Weekday::Monday);
        assert_eq!(Weekday::at(6), Weekday::Sunday);
        assert_eq!(Weekday::try_from(3_usize).unwrap(), Weekday::Thursday);

        let err = Weekday::try_from(7_usize).unwrap_err();
        assert_eq!(err.code, ErrorCode::DayIndexOutOfRange);
    }

    #[test]
    #[should_panic(expected = "day index 7 out of range")]
    fn test_weekday_at_panics_out_of_range() {
        Weekday::at(7);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Weekday::Monday.label(), "Lundi");
        assert_eq!(Weekday::Sunday.to_string(), "Dimanche");
    }

    #[test]
    fn test_close_then_reopen_restores_hours() {
        let week = custom_monday()
            .copy_monday_to_all_days()
            .set_interval(Weekday::Saturday, Period::Morning, Bound::Start, "10:00")
            .set_interval(Weekday::Sunday, Period::Afternoon, Bound::End, "16:00");

        for day in Weekday::ALL {
            let closed = week.set_day_open(day, false);

            assert!(!closed.day(day).is_open);
            assert_eq!(closed.day(day).morning, week.day(day).morning);
            assert_eq!(closed.day(day).afternoon, week.day(day).afternoon);

            let reopened = closed.set_day_open(day, true);
            assert_eq!(reopened, week, "{day:?}");
        }

        // A weekend day that was closed keeps its hours through the round trip
        let weekend = WeekSchedule::default()
            .set_interval(Weekday::Saturday, Period::Morning, Bound::Start, "09:30")
            .set_interval(Weekday::Saturday, Period::Morning, Bound::End, "12:30");
        let reopened = weekend
            .set_day_open(Weekday::Saturday, true)
            .set_day_open(Weekday::Saturday, false)
            .set_day_open(Weekday::Saturday, true);
        let saturday = reopened.day(Weekday::Saturday);
        assert!(saturday.is_open);
        assert_eq!(saturday.morning, TimeInterval::new("09:30", "12:30"));
        assert_eq!(saturday.afternoon, TimeInterval::default());
    }

    #[test]
    fn test_set_interval_changes_exactly_one_field() {
        let week = WeekSchedule::default();
        let next = week.set_interval(Weekday::Wednesday, Period::Afternoon, Bound::End, "17:15");

        for day in Weekday::ALL {
            if day == Weekday::Wednesday {
                continue;
            }
            assert_eq!(next.day(day), week.day(day));
        }

        let before = week.day(Weekday::Wednesday);
        let after = next.day(Weekday::Wednesday);
        assert_eq!(after.is_open, before.is_open);
        assert_eq!(after.morning, before.morning);
        assert_eq!(after.afternoon.start, before.afternoon.start);
        assert_eq!(after.afternoon.end, "17:15");
    }

    #[test]
    fn test_set_interval_accepts_unvalidated_values() {
        let week = WeekSchedule::default()
            .set_interval(Weekday::Friday, Period::Morning, Bound::Start, "23:00")
            .set_interval(Weekday::Friday, Period::Morning, Bound::End, "not a time");

        let friday = week.day(Weekday::Friday);
        assert_eq!(friday.morning, TimeInterval::new("23:00", "not a time"));
    }

    #[test]
    fn test_transitions_leave_input_untouched() {
        let week = WeekSchedule::default();
        let snapshot = week.clone();

        let _ = week.set_day_open(Weekday::Tuesday, false);
        let _ = week.set_interval(Weekday::Tuesday, Period::Morning, Bound::Start, "07:00");
        let _ = week.copy_monday_to_all_days();

        assert_eq!(week, snapshot);
    }

    #[test]
    fn test_copy_monday_to_each_day() {
        let week = custom_monday().set_day_open(Weekday::Monday, true);
        let monday = week.monday().clone();

        for target in Weekday::ALL.into_iter().skip(1) {
            let next = week.copy_monday_to(target);

            assert!(next.day(target).same_hours(&monday));
            assert_eq!(next.day(target).day, target);
            assert_eq!(next.monday(), &monday);

            for other in Weekday::ALL {
                if other != target {
                    assert_eq!(next.day(other), week.day(other));
                }
            }
        }
    }

    #[test]
    fn test_copy_monday_to_closed_weekend_opens_it() {
        let week = custom_monday();
        let next = week.copy_monday_to(Weekday::Saturday);

        let saturday = next.day(Weekday::Saturday);
        assert!(saturday.is_open);
        assert_eq!(saturday.morning, TimeInterval::new("08:00", "12:00"));
        assert_eq!(saturday.afternoon, TimeInterval::new("14:00", "19:30"));
    }

    #[test]
    fn test_copy_monday_to_monday_is_noop() {
        let week = custom_monday();
        assert_eq!(week.copy_monday_to(Weekday::Monday), week);
    }

    #[test]
    fn test_copy_does_not_alias_monday() {
        let week = WeekSchedule::default()
            .set_interval(Weekday::Monday, Period::Morning, Bound::Start, "08:00")
            .copy_monday_to(Weekday::Tuesday)
            .set_interval(Weekday::Tuesday, Period::Morning, Bound::Start, "10:00");

        assert_eq!(week.monday().morning.start, "08:00");
        assert_eq!(week.day(Weekday::Tuesday).morning.start, "10:00");

        let week = week.set_interval(Weekday::Monday, Period::Morning, Bound::Start, "07:45");
        assert_eq!(week.day(Weekday::Tuesday).morning.start, "10:00");
    }

    #[test]
    fn test_copy_monday_to_weekdays() {
        let week = custom_monday()
            .set_day_open(Weekday::Saturday, true)
            .set_interval(Weekday::Saturday, Period::Morning, Bound::Start, "10:00");
        let next = week.copy_monday_to_weekdays();

        for day in Weekday::WEEKDAY_TARGETS {
            assert!(next.day(day).same_hours(week.monday()));
        }
        assert_eq!(next.monday(), week.monday());
        assert_eq!(next.day(Weekday::Saturday), week.day(Weekday::Saturday));
        assert_eq!(next.day(Weekday::Sunday), week.day(Weekday::Sunday));
    }

    #[test]
    fn test_copy_closed_monday_to_weekdays_keeps_its_stale_hours() {
        let week = custom_monday().set_day_open(Weekday::Monday, false);
        let next = week.copy_monday_to_weekdays();

        for day in Weekday::WEEKDAY_TARGETS {
            let d = next.day(day);
            assert!(!d.is_open);
            assert_eq!(d.morning.start, "08:00");
        }
    }

    #[test]
    fn test_copy_monday_to_all_days_is_idempotent() {
        let week = custom_monday();
        let once = week.copy_monday_to_all_days();
        let twice = once.copy_monday_to_all_days();

        assert_eq!(once, twice);
        for d in &once {
            assert!(d.same_hours(week.monday()));
        }
    }

    #[test]
    fn test_end_to_end_default_to_all_days() {
        let week = WeekSchedule::default()
            .set_interval(Weekday::Monday, Period::Morning, Bound::Start, "08:30")
            .copy_monday_to_all_days();

        for d in &week {
            assert!(d.is_open);
            assert_eq!(d.morning, TimeInterval::new("08:30", "12:00"));
            assert_eq!(d.afternoon, TimeInterval::new("14:00", "18:00"));
        }
    }

    #[test]
    fn test_serialize_as_array() {
        let json = serde_json::to_value(WeekSchedule::default()).unwrap();
        let days = json.as_array().unwrap();

        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["day"], "MONDAY");
        assert_eq!(days[0]["is_open"], true);
        assert_eq!(days[0]["morning"]["start"], "09:00");
        assert_eq!(days[6]["day"], "SUNDAY");
        assert_eq!(days[6]["afternoon"]["end"], "");
    }

    #[test]
    fn test_deserialize_round_trip() {
        let week = custom_monday().copy_monday_to(Weekday::Sunday);
        let json = serde_json::to_string(&week).unwrap();
        let parsed: WeekSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, week);
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        let mut days: Vec<DaySchedule> = WeekSchedule::default().into();
        days.pop();

        let err = WeekSchedule::try_from(days).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidWeekLayout);
        assert_eq!(err.message, "expected 7 days, got 6");
    }

    #[test]
    fn test_deserialize_rejects_wrong_order() {
        let mut days: Vec<DaySchedule> = WeekSchedule::default().into();
        days.swap(0, 1);

        let err = WeekSchedule::try_from(days).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidWeekLayout);

        let json = serde_json::to_string(&WeekSchedule::all_closed()).unwrap();
        let reversed = json.replacen("MONDAY", "FRIDAY", 1);
        assert!(serde_json::from_str::<WeekSchedule>(&reversed).is_err());
    }

    #[test]
    fn test_from_fn_forces_day_labels() {
        let week = WeekSchedule::from_fn(|_| DaySchedule::closed(Weekday::Monday));
        for (index, d) in week.iter().enumerate() {
            assert_eq!(d.day, Weekday::at(index));
        }
    }
}
