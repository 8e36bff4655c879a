//! Schedule actions
//!
//! Every edit the opening-hours section can produce, as one serializable
//! value. The rendering layer sends these; [`ScheduleAction::apply`] maps the
//! current week to the next one.
//!
//! ```json
//! { "type": "SetInterval",
//!   "data": { "day": "MONDAY", "period": "morning", "bound": "start", "value": "08:30" } }
//! ```

use crate::models::{Bound, Period, WeekSchedule, Weekday};
use serde::{Deserialize, Serialize};

/// One user edit on the weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ScheduleAction {
    /// Day checkbox toggled
    SetDayOpen { day: Weekday, is_open: bool },
    /// Time field edited
    SetInterval {
        day: Weekday,
        period: Period,
        bound: Bound,
        value: String,
    },
    /// "Copier sur la journée du lundi" on one day
    CopyMondayTo { day: Weekday },
    /// "Copier vers les jours ouvrés"
    CopyMondayToWeekdays,
    /// "Copier vers toute la semaine"
    CopyMondayToAllDays,
}

impl ScheduleAction {
    /// Week after this action
    pub fn apply(&self, week: &WeekSchedule) -> WeekSchedule {
        match self {
            Self::SetDayOpen { day, is_open } => week.set_day_open(*day, *is_open),
            Self::SetInterval {
                day,
                period,
                bound,
                value,
            } => week.set_interval(*day, *period, *bound, value.as_str()),
            Self::CopyMondayTo { day } => week.copy_monday_to(*day),
            Self::CopyMondayToWeekdays => week.copy_monday_to_weekdays(),
            Self::CopyMondayToAllDays => week.copy_monday_to_all_days(),
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetDayOpen { .. } => "set_day_open",
            Self::SetInterval { .. } => "set_interval",
            Self::CopyMondayTo { .. } => "copy_monday_to",
            Self::CopyMondayToWeekdays => "copy_monday_to_weekdays",
            Self::CopyMondayToAllDays => "copy_monday_to_all_days",
        }
    }
}

/// Apply `actions` in order, starting from `week`.
pub fn replay<'a>(
    week: &WeekSchedule,
    actions: impl IntoIterator<Item = &'a ScheduleAction>,
) -> WeekSchedule {
    actions
        .into_iter()
        .fold(week.clone(), |current, action| action.apply(&current))
}
