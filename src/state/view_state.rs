use std::cell::RefCell;
use std::rc::Rc;
use crate::services::error::ApiError;

/// Estado de una pantalla que carga datos del backend
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    /// Sin token: pantalla de "inicia sesión"
    Unauthenticated,
    /// Sin perfil de paciente todavía
    NoProfile,
    /// Sin datos (lista vacía o payload sin la clave esperada)
    Empty,
    Ready(T),
    Failed(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    /// Mapea errores a estados de vista; None para `Cancelled`
    /// (el resultado se descarta y el estado no cambia)
    pub fn from_error(error: &ApiError) -> Option<Self> {
        match error {
            ApiError::Cancelled => None,
            ApiError::NotAuthenticated => Some(ViewState::Unauthenticated),
            ApiError::NoProfile => Some(ViewState::NoProfile),
            ApiError::MissingPayload(_) => Some(ViewState::Empty),
            other => Some(ViewState::Failed(other.user_message())),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ViewState<U> {
        match self {
            ViewState::Loading => ViewState::Loading,
            ViewState::Unauthenticated => ViewState::Unauthenticated,
            ViewState::NoProfile => ViewState::NoProfile,
            ViewState::Empty => ViewState::Empty,
            ViewState::Ready(value) => ViewState::Ready(f(value)),
            ViewState::Failed(message) => ViewState::Failed(message),
        }
    }
}

impl<T> ViewState<Vec<T>> {
    /// Lista vacía → `Empty`
    pub fn from_list(result: Result<Vec<T>, ApiError>) -> Option<Self> {
        match result {
            Ok(items) if items.is_empty() => Some(ViewState::Empty),
            Ok(items) => Some(ViewState::Ready(items)),
            Err(error) => Self::from_error(&error),
        }
    }
}

/// Celda compartida con el estado de una vista
#[derive(Clone)]
pub struct ViewCell<T> {
    state: Rc<RefCell<ViewState<T>>>,
}

impl<T> Default for ViewCell<T> {
    fn default() -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewState::Loading)),
        }
    }
}

impl<T: Clone> ViewCell<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> ViewState<T> {
        self.state.borrow().clone()
    }

    pub fn set(&self, state: ViewState<T>) {
        *self.state.borrow_mut() = state;
    }
}
