// ============================================================================
// APPOINTMENTS VIEWMODEL - Citas del paciente
// ============================================================================

use std::rc::Rc;

use crate::models::{Appointment, AppointmentView};
use crate::services::{ApiClient, HttpTransport};
use crate::state::{SessionState, ViewCell, ViewScope, ViewState};
use crate::utils::time_format::{format_display_date, to_12h};

pub struct AppointmentsViewModel<T> {
    api: Rc<ApiClient<T>>,
    session: SessionState,
    state: ViewCell<Vec<AppointmentView>>,
}

impl<T: HttpTransport> AppointmentsViewModel<T> {
    pub fn new(api: Rc<ApiClient<T>>, session: SessionState) -> Self {
        Self {
            api,
            session,
            state: ViewCell::new(),
        }
    }

    pub fn state(&self) -> ViewState<Vec<AppointmentView>> {
        self.state.get()
    }

    /// Carga en cada montaje; sin caché
    pub async fn load(&self, scope: &ViewScope) {
        self.state.set(ViewState::Loading);
        let session = self.session.snapshot();
        let result = scope
            .run(self.api.patient_appointments(&session))
            .await
            .map(|list| list.into_iter().map(to_view).collect());

        if let Some(next) = ViewState::from_list(result) {
            self.state.set(next);
        }
    }
}

fn to_view(appointment: Appointment) -> AppointmentView {
    let date = format_display_date(&appointment.date).unwrap_or_else(|e| {
        log::warn!("⚠️ Cita {}: {}", appointment.id, e);
        appointment.date.clone()
    });
    let time = to_12h(&appointment.time).unwrap_or_else(|e| {
        log::warn!("⚠️ Cita {}: {}", appointment.id, e);
        appointment.time.clone()
    });
    AppointmentView {
        id: appointment.id.to_string(),
        doctor_name: appointment.doctor_name,
        date,
        time,
        status: appointment.status,
        notes: appointment.notes.filter(|n| !n.trim().is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use crate::services::testing::MockTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn view_model(transport: &MockTransport, session: Session) -> AppointmentsViewModel<MockTransport> {
        let api = Rc::new(ApiClient::with_transport("http://api.test", transport.clone()));
        AppointmentsViewModel::new(api, SessionState::from_session(session))
    }

    #[test]
    fn loads_and_formats_appointments() {
        let transport = MockTransport::new();
        transport.respond(200, json!({
            "appointments": [
                { "id": 5, "doctor_name": "Dr. Sana", "date": "2025-07-13", "time": "14:00:00", "status": "PENDING", "notes": "" },
                { "id": 6, "doctor_name": "Dr. Omar", "date": "bad", "time": "09:15", "status": "CONFIRMED", "notes": "Fasting" }
            ]
        }));
        let vm = view_model(&transport, Session::new("tok", "uid").with_local_id(1));
        assert!(vm.state().is_loading());

        block_on(vm.load(&ViewScope::new()));
        let items = vm.state().ready().cloned().unwrap();
        assert_eq!(items[0].date, "Sun, 13 Jul 2025");
        assert_eq!(items[0].time, "02:00 PM");
        assert_eq!(items[0].notes, None);
        assert_eq!(items[1].date, "bad");
        assert_eq!(items[1].notes.as_deref(), Some("Fasting"));
    }

    #[test]
    fn no_session_renders_unauthenticated() {
        let transport = MockTransport::new();
        let vm = view_model(&transport, Session::default());
        block_on(vm.load(&ViewScope::new()));
        assert_eq!(vm.state(), ViewState::Unauthenticated);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn no_profile_renders_no_profile() {
        let transport = MockTransport::new();
        let vm = view_model(&transport, Session::new("tok", "uid"));
        block_on(vm.load(&ViewScope::new()));
        assert_eq!(vm.state(), ViewState::NoProfile);
    }

    #[test]
    fn empty_list_and_missing_key_are_empty() {
        let transport = MockTransport::new();
        transport.respond(200, json!({ "appointments": [] }));
        transport.respond(200, json!({}));
        let vm = view_model(&transport, Session::new("tok", "uid").with_local_id(1));
        block_on(vm.load(&ViewScope::new()));
        assert_eq!(vm.state(), ViewState::Empty);
        block_on(vm.load(&ViewScope::new()));
        assert_eq!(vm.state(), ViewState::Empty);
    }

    #[test]
    fn unmounted_scope_leaves_state_untouched() {
        let transport = MockTransport::new();
        transport.respond(200, json!({ "appointments": [] }));
        let vm = view_model(&transport, Session::new("tok", "uid").with_local_id(1));
        let (scope, guard) = ViewScope::mount();
        drop(guard);
        block_on(vm.load(&scope));
        assert!(vm.state().is_loading());
        assert!(transport.requests().is_empty());
    }
}
