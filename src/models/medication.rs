use serde::{Deserialize, Serialize};

/// Recordatorio de `GET /medication/patient/{id}/today`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationReminder {
    pub medication_id: i64,
    pub drug_name: String,
    /// Hora 24h (`HH:MM`)
    pub time: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Forma de UI del recordatorio (hora en 12h)
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderView {
    pub id: String,
    pub name: String,
    pub time: String,
    pub note: Option<String>,
}
