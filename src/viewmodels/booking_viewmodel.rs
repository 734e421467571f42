// ============================================================================
// BOOKING VIEWMODEL - Reserva de consulta con un doctor
// ============================================================================
// El doctor llega por parámetros de navegación; el paciente sale de la sesión.
// ============================================================================

use std::rc::Rc;

use chrono::{NaiveDate, NaiveTime};

use crate::models::{ActionOutcome, BookAppointmentRequest, Gender, Notice, Redirect};
use crate::navigation::Route;
use crate::services::{ApiClient, ApiError, HttpTransport};
use crate::state::{SessionState, ViewScope};
use crate::utils::time_format::{backend_date, backend_time, format_picker_time, format_short_date};
use crate::viewmodels::validation::{required, selected, ValidationError};

/// Doctor seleccionado (parámetros de la ruta)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorRef {
    pub id: i64,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub patient_name: String,
    /// None hasta que el usuario elige una opción
    pub gender: Option<Gender>,
    pub phone: String,
    pub address: String,
    pub procedure: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl BookingForm {
    /// Formulario vacío con fecha/hora iniciales
    pub fn starting_at(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            patient_name: String::new(),
            gender: None,
            phone: String::new(),
            address: String::new(),
            procedure: String::new(),
            date,
            time,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        required("Patient name", &self.patient_name)?;
        selected("Gender", self.gender)?;
        required("Phone", &self.phone)?;
        required("Address", &self.address)?;
        required("Procedure", &self.procedure)?;
        Ok(())
    }

    pub fn date_label(&self) -> String {
        format_short_date(self.date)
    }

    pub fn time_label(&self) -> String {
        format_picker_time(self.time)
    }
}

pub struct BookingViewModel<T> {
    api: Rc<ApiClient<T>>,
    session: SessionState,
    doctor: DoctorRef,
}

impl<T: HttpTransport> BookingViewModel<T> {
    pub fn new(api: Rc<ApiClient<T>>, session: SessionState, doctor: DoctorRef) -> Self {
        Self { api, session, doctor }
    }

    /// Sólo para `Route::BookConsultation`
    pub fn for_route(api: Rc<ApiClient<T>>, session: SessionState, route: &Route) -> Option<Self> {
        match route {
            Route::BookConsultation { doctor_id, name, specialty } => Some(Self::new(
                api,
                session,
                DoctorRef {
                    id: *doctor_id,
                    name: name.clone(),
                    specialty: specialty.clone(),
                },
            )),
            _ => None,
        }
    }

    pub fn doctor(&self) -> &DoctorRef {
        &self.doctor
    }

    /// Reserva la cita; None si la vista se desmontó antes de terminar
    pub async fn submit(&self, scope: &ViewScope, form: &BookingForm) -> Option<ActionOutcome> {
        if form.validate().is_err() {
            return Some(ActionOutcome::failed(
                Notice::error("Missing Information").with_detail("Please fill in all required fields"),
            ));
        }

        let session = self.session.snapshot();
        if !session.is_authenticated() {
            return Some(ActionOutcome {
                notice: Notice::error("Sign in required").with_detail("Please sign in to book an appointment."),
                redirect: Some(Redirect::Push(Route::Register)),
            });
        }
        let patient_id = match session.local_id {
            Some(id) => id,
            None => {
                return Some(ActionOutcome {
                    notice: Notice::error("Profile required")
                        .with_detail("Create your patient profile before booking."),
                    redirect: Some(Redirect::Push(Route::CreateProfile)),
                });
            }
        };

        let request = BookAppointmentRequest {
            doctor_id: self.doctor.id,
            patient_id,
            appointment_date: backend_date(form.date),
            appointment_time: backend_time(form.time),
        };

        match scope.run(self.api.book_appointment(&session, &request)).await {
            Ok(()) => Some(ActionOutcome::succeeded(
                Notice::success("Appointment Confirmed").with_detail(format!(
                    "Your appointment with {} has been booked!",
                    self.doctor.name
                )),
                Redirect::Replace(Route::Home),
            )),
            Err(ApiError::Cancelled) => None,
            Err(error) if error.is_transport() => Some(ActionOutcome::failed(
                Notice::error("Network Error").with_detail("Please try again later."),
            )),
            Err(error) => {
                let detail = match &error {
                    ApiError::Http { message, .. } | ApiError::Unauthorized { message, .. }
                        if message != "Unknown error" => message.clone(),
                    ApiError::Backend(message) => message.clone(),
                    _ => "Unable to confirm the appointment.".to_string(),
                };
                Some(ActionOutcome::failed(Notice::error("Booking Failed").with_detail(detail)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoticeKind, Session};
    use crate::services::testing::MockTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn route() -> Route {
        Route::BookConsultation {
            doctor_id: 4,
            name: "Dr. Hina".into(),
            specialty: "Pediatrician".into(),
        }
    }

    fn form() -> BookingForm {
        BookingForm {
            patient_name: "Zara".into(),
            gender: Some(Gender::Female),
            phone: "0300".into(),
            address: "House 1, Lahore".into(),
            procedure: "Checkup".into(),
            ..BookingForm::starting_at(
                NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
                NaiveTime::from_hms_opt(16, 45, 0).unwrap(),
            )
        }
    }

    fn view_model(transport: &MockTransport, session: Session) -> BookingViewModel<MockTransport> {
        let api = Rc::new(ApiClient::with_transport("http://api.test", transport.clone()));
        BookingViewModel::for_route(api, SessionState::from_session(session), &route()).unwrap()
    }

    #[test]
    fn books_with_backend_formats() {
        let transport = MockTransport::new();
        transport.respond(201, json!({ "appointment": { "id": 99 } }));
        let vm = view_model(&transport, Session::new("tok", "uid").with_local_id(8));

        let outcome = block_on(vm.submit(&ViewScope::new(), &form())).unwrap();
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
        assert_eq!(
            outcome.notice.detail.as_deref(),
            Some("Your appointment with Dr. Hina has been booked!")
        );
        assert_eq!(outcome.redirect, Some(Redirect::Replace(Route::Home)));

        let sent = transport.last_request().unwrap();
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({
            "doctor_id": 4,
            "patient_id": 8,
            "appointment_date": "2025-08-02",
            "appointment_time": "16:45"
        }));
        assert_eq!(sent.header("Authorization"), Some("Bearer tok"));
    }

    #[test]
    fn labels_use_display_formats() {
        let form = form();
        assert_eq!(form.date_label(), "02 Aug 2025");
        assert_eq!(form.time_label(), "04:45 PM");
    }

    #[test]
    fn incomplete_form_is_rejected_locally() {
        let transport = MockTransport::new();
        let vm = view_model(&transport, Session::new("tok", "uid").with_local_id(8));
        let incomplete = BookingForm { address: " ".into(), ..form() };
        let outcome = block_on(vm.submit(&ViewScope::new(), &incomplete)).unwrap();
        assert_eq!(outcome.notice.title, "Missing Information");
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn gender_must_be_chosen() {
        let blank = BookingForm::starting_at(
            NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );
        assert_eq!(blank.gender, None);

        let transport = MockTransport::new();
        let vm = view_model(&transport, Session::new("tok", "uid").with_local_id(8));
        let unset = BookingForm { gender: None, ..form() };
        assert_eq!(unset.validate(), Err(ValidationError::MissingField("Gender")));
        let outcome = block_on(vm.submit(&ViewScope::new(), &unset)).unwrap();
        assert_eq!(outcome.notice.title, "Missing Information");
        assert!(outcome.redirect.is_none());
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn missing_profile_redirects_to_profile_creation() {
        let transport = MockTransport::new();
        let vm = view_model(&transport, Session::new("tok", "uid"));
        let outcome = block_on(vm.submit(&ViewScope::new(), &form())).unwrap();
        assert_eq!(outcome.redirect, Some(Redirect::Push(Route::CreateProfile)));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn failures_map_to_notices() {
        let transport = MockTransport::new();
        transport.fail(ApiError::Network("offline".into()));
        transport.respond(400, json!({ "error": "Doctor unavailable" }));
        transport.respond_raw(500, "");
        let vm = view_model(&transport, Session::new("tok", "uid").with_local_id(8));
        let scope = ViewScope::new();

        let network = block_on(vm.submit(&scope, &form())).unwrap();
        assert_eq!(network.notice.title, "Network Error");

        let backend = block_on(vm.submit(&scope, &form())).unwrap();
        assert_eq!(backend.notice.title, "Booking Failed");
        assert_eq!(backend.notice.detail.as_deref(), Some("Doctor unavailable"));

        let unknown = block_on(vm.submit(&scope, &form())).unwrap();
        assert_eq!(unknown.notice.detail.as_deref(), Some("Unable to confirm the appointment."));
    }

    #[test]
    fn only_booking_routes_build_view_model() {
        let transport = MockTransport::new();
        let api = Rc::new(ApiClient::with_transport("http://api.test", transport));
        assert!(BookingViewModel::for_route(api, SessionState::new(), &Route::Home).is_none());
    }
}
