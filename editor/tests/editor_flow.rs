//! End-to-end flow: action script on disk -> session -> submission

use async_trait::async_trait;
use bakup_editor::{
    Config, ScheduleEditor, SimulatedBackend, SubmissionReceipt, SubmissionSink, load_actions,
    run_script,
};
use bakup_shared::error::ErrorCode;
use bakup_shared::{
    AppError, AppResult, Bound, Period, PractitionerProfile, ScheduleAction, TimeInterval,
    WeekSchedule, Weekday,
};
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

fn test_config(strict: bool) -> Config {
    Config {
        submit_delay_ms: 0,
        strict_validation: strict,
        ..Config::default()
    }
}

fn write_script(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

/// Keeps every profile it receives
#[derive(Default)]
struct RecordingSink {
    received: Mutex<Vec<PractitionerProfile>>,
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn submit(&self, profile: &PractitionerProfile) -> AppResult<SubmissionReceipt> {
        self.received.lock().unwrap().push(profile.clone());
        SimulatedBackend::new(Duration::ZERO).submit(profile).await
    }
}

struct FailingSink;

#[async_trait]
impl SubmissionSink for FailingSink {
    async fn submit(&self, _profile: &PractitionerProfile) -> AppResult<SubmissionReceipt> {
        Err(AppError::submission("backend unreachable"))
    }
}

const MONDAY_TO_ALL: &str = r#"[
    { "type": "SetInterval",
      "data": { "day": "MONDAY", "period": "morning", "bound": "start", "value": "08:30" } },
    { "type": "CopyMondayToAllDays" }
]"#;

#[tokio::test]
async fn script_from_file_reaches_backend() {
    let file = write_script(MONDAY_TO_ALL);
    let actions = load_actions(file.path()).unwrap();
    assert_eq!(actions.len(), 2);

    let sink = RecordingSink::default();
    let output = run_script(
        &test_config(true),
        &sink,
        PractitionerProfile::default(),
        &actions,
    )
    .await
    .unwrap();

    assert_eq!(output.applied, 2);
    assert_eq!(output.receipt.days_open, 7);
    for day in &output.opening_hours {
        assert!(day.is_open);
        assert_eq!(day.morning, TimeInterval::new("08:30", "12:00"));
        assert_eq!(day.afternoon, TimeInterval::new("14:00", "18:00"));
    }

    let received = sink.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].opening_hours, output.opening_hours);
}

#[tokio::test]
async fn other_profile_fields_pass_through() {
    let profile = PractitionerProfile {
        description: "Orthodontiste".to_string(),
        languages: vec!["fr".to_string(), "en".to_string()],
        ..PractitionerProfile::default()
    };

    let sink = RecordingSink::default();
    run_script(&test_config(false), &sink, profile, &[])
        .await
        .unwrap();

    let received = sink.received.lock().unwrap();
    assert_eq!(received[0].description, "Orthodontiste");
    assert_eq!(received[0].languages, vec!["fr", "en"]);
    assert_eq!(received[0].opening_hours, WeekSchedule::default());
}

#[tokio::test]
async fn strict_mode_blocks_incomplete_weekend() {
    let actions = vec![ScheduleAction::SetDayOpen {
        day: Weekday::Saturday,
        is_open: true,
    }];

    let sink = RecordingSink::default();
    let err = run_script(
        &test_config(true),
        &sink,
        PractitionerProfile::default(),
        &actions,
    )
    .await
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert!(sink.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn backend_failure_is_reported() {
    let err = run_script(
        &test_config(false),
        &FailingSink,
        PractitionerProfile::default(),
        &[],
    )
    .await
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::SubmissionFailed);
    assert_eq!(err.message, "backend unreachable");
}

#[test]
fn missing_script_is_io_error() {
    let err = load_actions(std::path::Path::new("/nonexistent/bakup/actions.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::IoError);
    assert!(err.details.unwrap().contains_key("path"));
}

#[test]
fn malformed_script_is_format_error() {
    let file = write_script(r#"[{ "type": "CopyMondayTo", "data": { "day": 3 } }]"#);
    let err = load_actions(file.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn session_matches_direct_transitions() {
    let actions = vec![
        ScheduleAction::SetInterval {
            day: Weekday::Monday,
            period: Period::Afternoon,
            bound: Bound::End,
            value: "17:00".to_string(),
        },
        ScheduleAction::CopyMondayTo {
            day: Weekday::Saturday,
        },
        ScheduleAction::SetDayOpen {
            day: Weekday::Wednesday,
            is_open: false,
        },
        ScheduleAction::CopyMondayToWeekdays,
    ];

    let mut editor = ScheduleEditor::default();
    editor.dispatch_all(&actions);

    let expected = WeekSchedule::default()
        .set_interval(Weekday::Monday, Period::Afternoon, Bound::End, "17:00")
        .copy_monday_to(Weekday::Saturday)
        .set_day_open(Weekday::Wednesday, false)
        .copy_monday_to_weekdays();

    assert_eq!(editor.current(), &expected);
    assert!(editor.current().day(Weekday::Wednesday).is_open);
    assert!(!editor.current().day(Weekday::Sunday).is_open);
}
