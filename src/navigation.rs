// ============================================================================
// NAVEGACIÓN - Rutas con parámetros planos (ids, nombres)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::utils::url::{parse_query, query_string};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    // Tabs
    Home,
    Appointment,
    Reminder,
    Chat,
    // Stack
    Register,
    CreateProfile,
    Profile,
    Cart,
    Search,
    ConsultOnline,
    InClinicAppointments,
    LaboratoryTests,
    ProceduresSurgeries,
    DiscountedMedicines,
    ChooseLocation,
    Feedback,
    Suggestion,
    SubmitFeedback,
    BookConsultation {
        doctor_id: i64,
        name: String,
        specialty: String,
    },
    DoctorDetail(i64),
    ClinicDetail(i64),
    DoctorList { search: String },
}

const SIMPLE_ROUTES: &[(&str, Route)] = &[
    ("/home", Route::Home),
    ("/appointment", Route::Appointment),
    ("/reminder", Route::Reminder),
    ("/chat", Route::Chat),
    ("/register", Route::Register),
    ("/create-profile", Route::CreateProfile),
    ("/profile", Route::Profile),
    ("/cart", Route::Cart),
    ("/search", Route::Search),
    ("/consult-online", Route::ConsultOnline),
    ("/in-clinic-appointments", Route::InClinicAppointments),
    ("/laboratory-tests", Route::LaboratoryTests),
    ("/procedures-surgeries", Route::ProceduresSurgeries),
    ("/discounted-medicines", Route::DiscountedMedicines),
    ("/choose-location", Route::ChooseLocation),
    ("/feedback", Route::Feedback),
    ("/suggestion", Route::Suggestion),
    ("/submit-feedback", Route::SubmitFeedback),
];

impl Route {
    /// Path con query string codificada
    pub fn path(&self) -> String {
        match self {
            Route::BookConsultation { doctor_id, name, specialty } => {
                let id = doctor_id.to_string();
                format!(
                    "/book-consultation{}",
                    query_string(&[
                        ("doctorId", id.as_str()),
                        ("name", name.as_str()),
                        ("specialty", specialty.as_str()),
                    ])
                )
            }
            Route::DoctorDetail(id) => format!("/doctor-detail/{}", id),
            Route::ClinicDetail(id) => format!("/clinic-detail/{}", id),
            Route::DoctorList { search } => {
                format!("/doctor-list{}", query_string(&[("search", search.as_str())]))
            }
            simple => SIMPLE_ROUTES
                .iter()
                .find(|(_, route)| route == simple)
                .map(|(path, _)| path.to_string())
                .unwrap_or_else(|| "/home".to_string()),
        }
    }

    /// Inverso de `path()`; None para rutas desconocidas o ids inválidos
    pub fn parse(raw: &str) -> Option<Route> {
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, query),
            None => (raw, ""),
        };
        let path = path.trim_end_matches('/');
        let params = parse_query(query);
        let param = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        if let Some((_, route)) = SIMPLE_ROUTES.iter().find(|(p, _)| *p == path) {
            return Some(route.clone());
        }

        match path {
            "/book-consultation" => Some(Route::BookConsultation {
                doctor_id: param("doctorId")?.parse().ok()?,
                name: param("name").unwrap_or_default(),
                specialty: param("specialty").unwrap_or_default(),
            }),
            "/doctor-list" => Some(Route::DoctorList {
                search: param("search").unwrap_or_default(),
            }),
            _ => {
                if let Some(id) = path.strip_prefix("/doctor-detail/") {
                    return id.parse().ok().map(Route::DoctorDetail);
                }
                if let Some(id) = path.strip_prefix("/clinic-detail/") {
                    return id.parse().ok().map(Route::ClinicDetail);
                }
                None
            }
        }
    }

    /// Pestañas de la barra inferior
    pub fn is_tab(&self) -> bool {
        matches!(
            self,
            Route::Home | Route::Appointment | Route::Reminder | Route::Chat
        )
    }
}

/// Pila de navegación (push / replace / back)
#[derive(Clone)]
pub struct Navigator {
    stack: Rc<RefCell<Vec<Route>>>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: Rc::new(RefCell::new(vec![initial])),
        }
    }

    pub fn current(&self) -> Route {
        self.stack
            .borrow()
            .last()
            .cloned()
            .unwrap_or(Route::Home)
    }

    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }

    pub fn push(&self, route: Route) {
        log::info!("➡️ push {}", route.path());
        self.stack.borrow_mut().push(route);
    }

    pub fn replace(&self, route: Route) {
        log::info!("🔁 replace {}", route.path());
        let mut stack = self.stack.borrow_mut();
        stack.pop();
        stack.push(route);
    }

    /// Vuelve atrás; la raíz nunca se saca de la pila
    pub fn back(&self) -> bool {
        let mut stack = self.stack.borrow_mut();
        if stack.len() > 1 {
            stack.pop();
            true
        } else {
            false
        }
    }

    /// Vacía la pila y deja sólo `route`
    pub fn reset(&self, route: Route) {
        let mut stack = self.stack.borrow_mut();
        stack.clear();
        stack.push(route);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_consultation_carries_params() {
        let route = Route::BookConsultation {
            doctor_id: 12,
            name: "Dr. Ali Khan".into(),
            specialty: "Cardiologist".into(),
        };
        let path = route.path();
        assert_eq!(
            path,
            "/book-consultation?doctorId=12&name=Dr.%20Ali%20Khan&specialty=Cardiologist"
        );
        assert_eq!(Route::parse(&path), Some(route));
    }

    #[test]
    fn parses_simple_and_dynamic_routes() {
        assert_eq!(Route::parse("/home"), Some(Route::Home));
        assert_eq!(Route::parse("/cart/"), Some(Route::Cart));
        assert_eq!(Route::parse("/doctor-detail/7"), Some(Route::DoctorDetail(7)));
        assert_eq!(
            Route::parse("/doctor-list?search=skin+care"),
            Some(Route::DoctorList { search: "skin care".into() })
        );
        assert_eq!(Route::Reminder.path(), "/reminder");
    }

    #[test]
    fn rejects_unknown_or_malformed() {
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/doctor-detail/abc"), None);
        assert_eq!(Route::parse("/book-consultation?name=x"), None);
        assert_eq!(Route::parse("/book-consultation?doctorId=%+1"), None);
    }

    #[test]
    fn malformed_escapes_stay_literal() {
        assert_eq!(Route::parse("/home?bad=%ZZ"), Some(Route::Home));
        assert_eq!(
            Route::parse("/doctor-list?search=%+1"),
            Some(Route::DoctorList { search: "% 1".into() })
        );
    }

    #[test]
    fn navigator_keeps_root() {
        let nav = Navigator::default();
        nav.push(Route::Cart);
        nav.replace(Route::Profile);
        assert_eq!(nav.current(), Route::Profile);
        assert_eq!(nav.depth(), 2);
        assert!(nav.back());
        assert!(!nav.back());
        assert_eq!(nav.current(), Route::Home);
        nav.push(Route::Chat);
        nav.reset(Route::Register);
        assert_eq!(nav.depth(), 1);
        assert!(Route::Chat.is_tab());
        assert!(!Route::Cart.is_tab());
    }
}
