// ============================================================================
// PROFILE VIEWMODEL - Crear y mostrar el perfil de paciente
// ============================================================================
// Al crear el perfil se escribe el local_id en la sesión; las pantallas de
// citas y recordatorios dependen de él.
// ============================================================================

use std::rc::Rc;

use crate::models::{ActionOutcome, CreatePatientRequest, Gender, Notice, PatientProfile, Redirect};
use crate::navigation::Route;
use crate::services::{ApiClient, ApiError, HttpTransport};
use crate::state::{SessionState, ViewCell, ViewScope, ViewState};
use crate::viewmodels::validation::{optional, parse_age, required, ValidationError};

/// Campos del formulario tal como los escribe el usuario
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub full_name: String,
    pub age: String,
    pub gender: Gender,
    pub phone: String,
    pub medical_condition: String,
}

impl ProfileForm {
    pub fn validate(&self, uid: &str) -> Result<CreatePatientRequest, ValidationError> {
        let full_name = required("Full name", &self.full_name)?;
        let age = parse_age(&self.age)?;
        let phone_number = required("Phone", &self.phone)?;
        Ok(CreatePatientRequest {
            user_firebase_uid: uid.to_string(),
            full_name,
            age,
            gender: self.gender,
            phone_number,
            medical_condition: optional(&self.medical_condition),
        })
    }
}

impl From<&PatientProfile> for ProfileForm {
    fn from(profile: &PatientProfile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            age: profile.age.map(|a| a.to_string()).unwrap_or_default(),
            gender: profile.gender(),
            phone: profile.phone_number.clone(),
            medical_condition: profile.medical_condition.clone().unwrap_or_default(),
        }
    }
}

pub struct ProfileViewModel<T> {
    api: Rc<ApiClient<T>>,
    session: SessionState,
    state: ViewCell<PatientProfile>,
}

impl<T: HttpTransport> ProfileViewModel<T> {
    pub fn new(api: Rc<ApiClient<T>>, session: SessionState) -> Self {
        Self {
            api,
            session,
            state: ViewCell::new(),
        }
    }

    pub fn state(&self) -> ViewState<PatientProfile> {
        self.state.get()
    }

    /// Formulario precargado con el perfil, si ya se cargó
    pub fn form(&self) -> ProfileForm {
        self.state
            .get()
            .ready()
            .map(ProfileForm::from)
            .unwrap_or_default()
    }

    /// Carga el perfil del usuario actual
    pub async fn load(&self, scope: &ViewScope) {
        self.state.set(ViewState::Loading);
        let session = self.session.snapshot();
        let next = match scope.run(self.api.patient_profile(&session)).await {
            Ok(profile) => {
                if let (Some(id), None) = (profile.id, session.local_id) {
                    log::info!("👤 Perfil existente, local_id = {}", id);
                    self.session.set_local_id(Some(id));
                }
                Some(ViewState::Ready(profile))
            }
            Err(error) => ViewState::from_error(&error),
        };
        if let Some(next) = next {
            self.state.set(next);
        }
    }

    /// Crea el perfil; None si la vista se desmontó antes de terminar
    pub async fn create(&self, scope: &ViewScope, form: &ProfileForm) -> Option<ActionOutcome> {
        let session = self.session.snapshot();
        if session.uid.is_empty() {
            return Some(ActionOutcome::failed(
                Notice::error("Error").with_detail("Please sign in first."),
            ));
        }

        let request = match form.validate(&session.uid) {
            Ok(request) => request,
            Err(ValidationError::InvalidAge(age)) => {
                return Some(ActionOutcome::failed(
                    Notice::error("Invalid age").with_detail(format!("\"{}\" is not a valid age.", age)),
                ));
            }
            Err(ValidationError::MissingField(_)) => {
                return Some(ActionOutcome::failed(Notice::error(
                    "All fields except medical condition are required.",
                )));
            }
        };

        match scope.run(self.api.create_patient(&session, &request)).await {
            Ok(created) => {
                self.session.set_local_id(Some(created.id));
                Some(ActionOutcome::succeeded(
                    Notice::success("Profile created successfully"),
                    Redirect::Push(Route::Home),
                ))
            }
            Err(ApiError::Cancelled) => None,
            Err(ApiError::MissingPayload(_)) => Some(ActionOutcome::failed(
                Notice::error("Error").with_detail("Profile creation failed"),
            )),
            Err(error) => Some(ActionOutcome::failed(
                Notice::error("Error").with_detail(error.user_message()),
            )),
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

    fn view_model(transport: &MockTransport, session: &SessionState) -> ProfileViewModel<MockTransport> {
        let api = Rc::new(ApiClient::with_transport("http://api.test", transport.clone()));
        ProfileViewModel::new(api, session.clone())
    }

    fn filled_form() -> ProfileForm {
        ProfileForm {
            full_name: "Ayesha Malik".into(),
            age: "29".into(),
            gender: Gender::Female,
            phone: "03001234567".into(),
            medical_condition: "  ".into(),
        }
    }

    #[test]
    fn creating_profile_sets_local_id() {
        let transport = MockTransport::new();
        transport.respond(201, json!({ "profile": { "id": 31 } }));
        let session = SessionState::from_session(Session::new("tok", "uid-9"));
        let vm = view_model(&transport, &session);

        let outcome = block_on(vm.create(&ViewScope::new(), &filled_form())).unwrap();
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
        assert_eq!(outcome.redirect, Some(Redirect::Push(Route::Home)));
        assert_eq!(session.get_local_id(), Some(31));

        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap()).unwrap();
        assert_eq!(body["user_firebase_uid"], "uid-9");
        assert_eq!(body["age"], 29);
        assert_eq!(body["gender"], "FEMALE");
        assert!(body["medical_condition"].is_null());
    }

    #[test]
    fn missing_fields_never_reach_backend() {
        let transport = MockTransport::new();
        let session = SessionState::from_session(Session::new("tok", "uid-9"));
        let vm = view_model(&transport, &session);
        let form = ProfileForm { phone: String::new(), ..filled_form() };

        let outcome = block_on(vm.create(&ViewScope::new(), &form)).unwrap();
        assert!(outcome.notice.is_error());
        assert_eq!(outcome.notice.title, "All fields except medical condition are required.");
        assert!(transport.requests().is_empty());
        assert_eq!(session.get_local_id(), None);
    }

    #[test]
    fn backend_error_is_surfaced() {
        let transport = MockTransport::new();
        transport.respond(409, json!({ "error": "Profile already exists" }));
        let session = SessionState::from_session(Session::new("tok", "uid-9"));
        let vm = view_model(&transport, &session);

        let outcome = block_on(vm.create(&ViewScope::new(), &filled_form())).unwrap();
        assert_eq!(outcome.notice.detail.as_deref(), Some("Profile already exists"));
        assert_eq!(outcome.redirect, None);
        assert_eq!(session.get_local_id(), None);
    }

    #[test]
    fn load_prefills_form_and_adopts_profile_id() {
        let transport = MockTransport::new();
        transport.respond(200, json!({
            "id": 12, "full_name": "Bilal", "age": 41, "gender": "MALE",
            "phone_number": "0321", "medical_condition": "Asthma"
        }));
        let session = SessionState::from_session(Session::new("tok", "uid-3"));
        let vm = view_model(&transport, &session);

        block_on(vm.load(&ViewScope::new()));
        let form = vm.form();
        assert_eq!(form.full_name, "Bilal");
        assert_eq!(form.age, "41");
        assert_eq!(form.gender, Gender::Male);
        assert_eq!(form.medical_condition, "Asthma");
        assert_eq!(session.get_local_id(), Some(12));
    }

    #[test]
    fn load_without_uid_is_unauthenticated() {
        let transport = MockTransport::new();
        let session = SessionState::new();
        let vm = view_model(&transport, &session);
        block_on(vm.load(&ViewScope::new()));
        assert_eq!(vm.state(), ViewState::Unauthenticated);
        assert_eq!(vm.form(), ProfileForm::default());
    }
}
