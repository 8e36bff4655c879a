//! Script runner
//!
//! Replays a JSON array of [`ScheduleAction`]s on a fresh profile, then
//! submits the result. This is the whole CLI flow, kept out of `main` so it
//! can be driven from tests.

use super::Config;
use crate::session::ScheduleEditor;
use crate::submit::{SubmissionReceipt, SubmissionSink, submit_profile};
use bakup_shared::{AppError, AppResult, PractitionerProfile, ScheduleAction, WeekSchedule};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the CLI prints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutput {
    /// Actions that changed the week
    pub applied: usize,
    pub opening_hours: WeekSchedule,
    pub receipt: SubmissionReceipt,
}

/// Read an action script from disk
pub fn load_actions(path: &Path) -> AppResult<Vec<ScheduleAction>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_detail("path", path.display().to_string()))?;
    let actions: Vec<ScheduleAction> = serde_json::from_str(&raw)?;
    tracing::info!(path = %path.display(), count = actions.len(), "Loaded action script");
    Ok(actions)
}

/// Apply `actions` to `profile`'s opening hours in order and submit it.
pub async fn run_script(
    config: &Config,
    sink: &dyn SubmissionSink,
    profile: PractitionerProfile,
    actions: &[ScheduleAction],
) -> AppResult<RunOutput> {
    let mut editor =
        ScheduleEditor::with_history_limit(profile.opening_hours.clone(), config.history_limit);
    let applied = editor.dispatch_all(actions);
    tracing::info!(total = actions.len(), applied, "Replayed schedule actions");

    let profile = profile.with_opening_hours(editor.into_schedule());
    let receipt = submit_profile(sink, &profile, config.strict_validation).await?;

    Ok(RunOutput {
        applied,
        opening_hours: profile.opening_hours,
        receipt,
    })
}
