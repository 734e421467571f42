// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Un único request tipado: URL base + path, header Bearer, JSON,
// status 2xx + clave esperada. La sesión llega como parámetro.
// ============================================================================

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::models::{
    Appointment, BookAppointmentRequest, CreatePatientRequest, CreatedProfile, Doctor,
    MedicationReminder, PatientProfile, Session,
};
use crate::services::error::ApiError;
use crate::services::http::{HttpRequest, HttpTransport, Method};
use crate::utils::time_format::local_datetime_param;
use crate::utils::url::{encode_component, query_string};

/// Cómo se usa el token de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Sin token no se envía el request
    Required,
    /// Se adjunta el token si existe
    Optional,
    /// Nunca se adjunta el token
    Public,
}

/// Descripción de un request: método, path, auth, body y clave esperada
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    auth: Auth,
    body: Option<Value>,
    expect: Option<&'static str>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            auth: Auth::Required,
            body: None,
            expect: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?;
        Ok(Self {
            body: Some(body),
            ..Self::new(Method::Post, path)
        })
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Clave de primer nivel que debe traer la respuesta (p.ej. `appointments`)
    pub fn expect(mut self, key: &'static str) -> Self {
        self.expect = Some(key);
        self
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

#[cfg(target_arch = "wasm32")]
impl ApiClient<crate::services::http::GlooTransport> {
    pub fn new() -> Self {
        let config = &*crate::config::CONFIG;
        Self::with_transport(
            config.api_base_url(),
            crate::services::http::GlooTransport::new(config.network_timeout_ms()),
        )
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Request genérico; `R` es el contenido de la clave esperada,
    /// o el payload completo si no hay clave.
    pub async fn request<R: DeserializeOwned>(
        &self,
        session: &Session,
        request: ApiRequest,
    ) -> Result<R, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if request.body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        match (request.auth, session.bearer()) {
            (Auth::Required, None) => {
                log::warn!("🔒 {} {} sin token, request no enviado", request.method.as_str(), request.path);
                return Err(ApiError::NotAuthenticated);
            }
            (Auth::Required, Some(token)) | (Auth::Optional, Some(token)) => {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
            }
            _ => {}
        }

        log::info!("🌐 {} {}", request.method.as_str(), request.path);

        let response = self
            .transport
            .send(HttpRequest {
                method: request.method,
                url,
                headers,
                body: request.body.map(|b| b.to_string()),
            })
            .await
            .map_err(|e| {
                log::error!("❌ {} {}: {}", request.method.as_str(), request.path, e);
                e
            })?;

        let payload = parse_payload(&response.body);

        if !response.ok() {
            let error = error_for_status(response.status, &payload, &response.body);
            log::error!("❌ {} {}: {}", request.method.as_str(), request.path, error);
            return Err(error);
        }

        let payload = payload.map_err(|e| {
            log::error!("❌ Respuesta no es JSON ({}): {}", request.path, e);
            e
        })?;

        let content = match request.expect {
            Some(key) => match payload.get(key) {
                Some(value) if !value.is_null() => value.clone(),
                _ => {
                    return Err(match error_field(&payload) {
                        Some(message) => ApiError::Backend(message),
                        None => {
                            log::warn!("⚠️ Falta `{}` en la respuesta de {}", key, request.path);
                            ApiError::MissingPayload(key.to_string())
                        }
                    });
                }
            },
            None => {
                if let Some(message) = error_field(&payload) {
                    return Err(ApiError::Backend(message));
                }
                payload
            }
        };

        serde_json::from_value(content).map_err(|e| {
            log::error!("❌ Parse error ({}): {}", request.path, e);
            ApiError::Parse(e.to_string())
        })
    }

    /// Citas del paciente
    pub async fn patient_appointments(&self, session: &Session) -> Result<Vec<Appointment>, ApiError> {
        let patient_id = require_profile(session)?;
        let appointments: Vec<Appointment> = self
            .request(
                session,
                ApiRequest::get(format!("/patient/{}/appointments", patient_id))
                    .expect("appointments"),
            )
            .await?;
        log::info!("📅 {} citas obtenidas", appointments.len());
        Ok(appointments)
    }

    /// Reservar cita
    pub async fn book_appointment(
        &self,
        session: &Session,
        booking: &BookAppointmentRequest,
    ) -> Result<(), ApiError> {
        require_auth(session)?;
        let _: Value = self
            .request(session, ApiRequest::post("/appointments", booking)?)
            .await?;
        log::info!(
            "✅ Cita reservada: doctor {} el {} a las {}",
            booking.doctor_id, booking.appointment_date, booking.appointment_time
        );
        Ok(())
    }

    /// Recordatorios de medicación de hoy (`now` en hora local, sin zona)
    pub async fn today_reminders(
        &self,
        session: &Session,
        now: NaiveDateTime,
    ) -> Result<Vec<MedicationReminder>, ApiError> {
        let patient_id = require_profile(session)?;
        let now = local_datetime_param(now);
        let path = format!(
            "/medication/patient/{}/today{}",
            patient_id,
            query_string(&[("now", now.as_str())])
        );
        let reminders: Vec<MedicationReminder> = self
            .request(session, ApiRequest::get(path).expect("reminders"))
            .await?;
        log::info!("💊 {} recordatorios para hoy", reminders.len());
        Ok(reminders)
    }

    /// Listado de doctores
    pub async fn doctors(&self, session: &Session) -> Result<Vec<Doctor>, ApiError> {
        self.request(
            session,
            ApiRequest::get("/doctor/all").auth(Auth::Optional).expect("doctors"),
        )
        .await
    }

    /// Crear perfil de paciente; devuelve el id local asignado
    pub async fn create_patient(
        &self,
        session: &Session,
        profile: &CreatePatientRequest,
    ) -> Result<CreatedProfile, ApiError> {
        let created: CreatedProfile = self
            .request(
                session,
                ApiRequest::post("/patient/", profile)?
                    .auth(Auth::Optional)
                    .expect("profile"),
            )
            .await?;
        log::info!("👤 Perfil creado con id {}", created.id);
        Ok(created)
    }

    /// Perfil del usuario actual (por uid)
    pub async fn patient_profile(&self, session: &Session) -> Result<PatientProfile, ApiError> {
        if session.uid.is_empty() {
            return Err(ApiError::NotAuthenticated);
        }
        self.request(
            session,
            ApiRequest::get(format!("/patient/{}", encode_component(&session.uid)))
                .auth(Auth::Optional),
        )
        .await
    }
}

fn require_auth(session: &Session) -> Result<(), ApiError> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(ApiError::NotAuthenticated)
    }
}

/// Token + local_id; sin perfil no hay request
fn require_profile(session: &Session) -> Result<i64, ApiError> {
    require_auth(session)?;
    session.local_id.ok_or(ApiError::NoProfile)
}

/// Body vacío cuenta como `null`
fn parse_payload(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

fn error_field(payload: &Value) -> Option<String> {
    match payload.get("error")? {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        Value::Object(obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn error_for_status(status: u16, payload: &Result<Value, ApiError>, raw: &str) -> ApiError {
    let message = payload
        .as_ref()
        .ok()
        .and_then(error_field)
        .or_else(|| {
            let text = raw.trim();
            (!text.is_empty() && payload.is_err()).then(|| text.to_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string());

    match status {
        401 | 403 => ApiError::Unauthorized { status, message },
        _ => ApiError::Http { status, message },
    }
}
