use serde::{Deserialize, Serialize};

/// Cita tal como la devuelve `GET /patient/{id}/appointments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub doctor_name: String,
    /// Fecha ISO (`YYYY-MM-DD`)
    pub date: String,
    /// Hora 24h (`HH:MM` o `HH:MM:SS`)
    pub time: String,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body de `POST /appointments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: i64,
    pub patient_id: i64,
    /// `YYYY-MM-DD`
    pub appointment_date: String,
    /// `HH:MM`
    pub appointment_time: String,
}

/// Cita lista para mostrar
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentView {
    pub id: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub notes: Option<String>,
}
