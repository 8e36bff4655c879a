//! Practitioner Profile Model
//!
//! Plain data sent along with the opening hours when onboarding is saved.

use super::schedule::WeekSchedule;
use serde::{Deserialize, Serialize};

/// Kind of practice location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Hospital,
    Clinic,
    Office,
}

/// Where the practitioner receives patients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationType {
    /// At the practice
    #[default]
    Office,
    /// House calls
    Home,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeLocation {
    #[serde(rename = "type")]
    pub kind: LocationType,
    pub name: String,
    pub address: String,
}

/// Diploma or certification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    #[serde(default)]
    pub title: String,
    /// Year as typed, not validated
    #[serde(default)]
    pub year: String,
}

/// Billable act with its displayed price
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalAct {
    #[serde(default)]
    pub name: String,
    /// Price as typed, not validated
    #[serde(default)]
    pub price: String,
}

/// Everything the "Mes informations" page submits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PractitionerProfile {
    #[serde(default)]
    pub locations: Vec<PracticeLocation>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub consultation_type: ConsultationType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
    #[serde(default)]
    pub medical_acts: Vec<MedicalAct>,
    #[serde(default)]
    pub opening_hours: WeekSchedule,
}

impl PractitionerProfile {
    /// Same profile with its opening hours replaced
    pub fn with_opening_hours(mut self, opening_hours: WeekSchedule) -> Self {
        self.opening_hours = opening_hours;
        self
    }
}
