//! Profile submission
//!
//! There is no backend contract yet: [`SimulatedBackend`] only waits, encodes
//! the payload and hands back a receipt.

use async_trait::async_trait;
use bakup_shared::error::ErrorCode;
use bakup_shared::models::ensure_valid;
use bakup_shared::util::snowflake_id;
use bakup_shared::{AppError, AppResult, PractitionerProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Acknowledgement of a saved profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: i64,
    pub submitted_at: DateTime<Utc>,
    /// Open days in the submitted week
    pub days_open: usize,
    /// Encoded payload size
    pub payload_bytes: usize,
}

/// Destination for a finished profile
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, profile: &PractitionerProfile) -> AppResult<SubmissionReceipt>;
}

/// Stand-in backend with a fixed latency
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl SubmissionSink for SimulatedBackend {
    async fn submit(&self, profile: &PractitionerProfile) -> AppResult<SubmissionReceipt> {
        let payload = serde_json::to_vec(profile).map_err(|e| {
            AppError::with_message(ErrorCode::SubmissionEncoding, e.to_string())
        })?;

        tokio::time::sleep(self.delay).await;

        Ok(SubmissionReceipt {
            id: snowflake_id(),
            submitted_at: Utc::now(),
            days_open: profile.opening_hours.open_days().count(),
            payload_bytes: payload.len(),
        })
    }
}

/// Submit `profile`, running the opening hours validation first when `strict`.
pub async fn submit_profile(
    sink: &dyn SubmissionSink,
    profile: &PractitionerProfile,
    strict: bool,
) -> AppResult<SubmissionReceipt> {
    if strict {
        ensure_valid(&profile.opening_hours).inspect_err(|e| {
            tracing::warn!(code = %e.code, message = %e.message, "Opening hours rejected");
        })?;
    }

    let receipt = sink.submit(profile).await.inspect_err(|e| {
        tracing::error!(code = %e.code, message = %e.message, "Submission failed");
    })?;

    tracing::info!(
        id = receipt.id,
        days_open = receipt.days_open,
        bytes = receipt.payload_bytes,
        "Profile submitted"
    );
    Ok(receipt)
}
