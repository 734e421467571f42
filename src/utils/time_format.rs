// ============================================================================
// FORMATO DE FECHAS Y HORAS
// ============================================================================
// Conversión entre el formato del backend (24h, ISO) y el de pantalla
// ============================================================================

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use crate::utils::constants::LOCAL_DATETIME_FORMAT;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid time: {0}")]
    InvalidTime(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

fn parse_time(value: &str) -> Result<NaiveTime, FormatError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| FormatError::InvalidTime(value.to_string()))
}

/// `"14:00"` → `"02:00 PM"`, `"00:05"` → `"12:05 AM"`.
/// Acepta también segundos (`"09:30:00"`).
pub fn to_12h(hhmm: &str) -> Result<String, FormatError> {
    Ok(parse_time(hhmm)?.format("%I:%M %p").to_string())
}

/// Fecha ISO (o datetime ISO) → `"Sun, 13 Jul 2025"`
pub fn format_display_date(iso: &str) -> Result<String, FormatError> {
    let trimmed = iso.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| {
            chrono::DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive())
        })
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, LOCAL_DATETIME_FORMAT).map(|dt| dt.date())
        })
        .map_err(|_| FormatError::InvalidDate(iso.to_string()))?;
    Ok(date.format("%a, %d %b %Y").to_string())
}

/// Etiqueta corta del selector de fecha: `"13 Jul 2025"`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Etiqueta del selector de hora: `"02:00 PM"`
pub fn format_picker_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// `YYYY-MM-DD` para el backend
pub fn backend_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `HH:MM` para el backend
pub fn backend_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Hora local sin zona: `"2025-07-13T00:12:00"`
pub fn local_datetime_param(now: NaiveDateTime) -> String {
    now.format(LOCAL_DATETIME_FORMAT).to_string()
}

pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
