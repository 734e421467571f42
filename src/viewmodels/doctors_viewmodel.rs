use std::rc::Rc;

use crate::models::{filter_catalog, Doctor};
use crate::navigation::Route;
use crate::services::{ApiClient, HttpTransport};
use crate::state::{SessionState, ViewCell, ViewScope, ViewState};

/// Listado de doctores con búsqueda por nombre o especialidad
pub struct DoctorsViewModel<T> {
    api: Rc<ApiClient<T>>,
    session: SessionState,
    state: ViewCell<Vec<Doctor>>,
}

impl<T: HttpTransport> DoctorsViewModel<T> {
    pub fn new(api: Rc<ApiClient<T>>, session: SessionState) -> Self {
        Self {
            api,
            session,
            state: ViewCell::new(),
        }
    }

    pub fn state(&self) -> ViewState<Vec<Doctor>> {
        self.state.get()
    }

    pub async fn load(&self, scope: &ViewScope) {
        self.state.set(ViewState::Loading);
        let session = self.session.snapshot();
        let result = scope.run(self.api.doctors(&session)).await;
        if let Some(next) = ViewState::from_list(result) {
            self.state.set(next);
        }
    }

    /// Doctores visibles para la búsqueda actual (vacío si no hay datos)
    pub fn search(&self, query: &str) -> Vec<Doctor> {
        match self.state.get() {
            ViewState::Ready(doctors) => filter_catalog(&doctors, query, None)
                .into_iter()
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Ruta de reserva con los datos del doctor
    pub fn booking_route(doctor: &Doctor) -> Route {
        Route::BookConsultation {
            doctor_id: doctor.id,
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
        }
    }
}
