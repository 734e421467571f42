// ============================================================================
// APP - Cableado: sesión + API + navegación + carrito
// ============================================================================
// Cada pantalla obtiene su ViewModel desde aquí; todos comparten la misma
// sesión, el mismo cliente API y el mismo carrito.
// ============================================================================

use std::rc::Rc;

use crate::models::{ActionOutcome, CartItem, Pricing, Redirect, Searchable};
use crate::navigation::{Navigator, Route};
use crate::services::{ApiClient, HttpTransport};
use crate::state::SessionState;
use crate::viewmodels::{
    AppointmentsViewModel, BookingViewModel, CartViewModel, CatalogViewModel, DoctorsViewModel,
    ProfileViewModel, RemindersViewModel,
};

/// Aplicación principal
pub struct App<T> {
    session: SessionState,
    api: Rc<ApiClient<T>>,
    navigator: Navigator,
    cart: CartViewModel,
}

#[cfg(target_arch = "wasm32")]
impl App<crate::services::GlooTransport> {
    /// App con transporte fetch y configuración de compilación
    pub fn new() -> Self {
        Self::with_client(ApiClient::new(), crate::config::CONFIG.pricing())
    }
}

impl<T: HttpTransport> App<T> {
    pub fn with_client(api: ApiClient<T>, pricing: Pricing) -> Self {
        log::info!("🚀 App inicializada contra {}", api.base_url());
        Self {
            session: SessionState::new(),
            api: Rc::new(api),
            navigator: Navigator::new(Route::Register),
            cart: CartViewModel::new(pricing),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn cart(&self) -> &CartViewModel {
        &self.cart
    }

    /// Login en el proveedor de identidad completado
    pub fn sign_in(&self, token: &str, uid: &str) {
        log::info!("🔐 Sesión iniciada para {}", uid);
        self.session.sign_in(token, uid);
        let next = if self.session.get_local_id().is_some() {
            Route::Home
        } else {
            Route::CreateProfile
        };
        self.navigator.reset(next);
    }

    /// Logout completo: sesión, carrito y pila de navegación
    pub fn sign_out(&self) {
        log::info!("👋 Logout - limpiando sesión");
        self.session.logout();
        self.cart.clear();
        self.navigator.reset(Route::Register);
    }

    /// Aplica la redirección de una acción terminada
    pub fn apply(&self, outcome: &ActionOutcome) {
        match &outcome.redirect {
            Some(Redirect::Push(route)) => self.navigator.push(route.clone()),
            Some(Redirect::Replace(route)) => self.navigator.replace(route.clone()),
            None => {}
        }
    }

    pub fn appointments(&self) -> AppointmentsViewModel<T> {
        AppointmentsViewModel::new(self.api.clone(), self.session.clone())
    }

    pub fn reminders(&self) -> RemindersViewModel<T> {
        RemindersViewModel::new(self.api.clone(), self.session.clone())
    }

    pub fn doctors(&self) -> DoctorsViewModel<T> {
        DoctorsViewModel::new(self.api.clone(), self.session.clone())
    }

    pub fn profile(&self) -> ProfileViewModel<T> {
        ProfileViewModel::new(self.api.clone(), self.session.clone())
    }

    /// Catálogo (análisis, procedimientos, medicamentos) sobre el carrito de la app
    pub fn catalog<I>(&self, items: Vec<I>) -> CatalogViewModel<I>
    where
        I: Searchable + Clone,
        for<'a> &'a I: Into<CartItem>,
    {
        CatalogViewModel::new(items, self.cart.clone())
    }

    /// ViewModel de reserva para la ruta actual, si es de reserva
    pub fn booking(&self) -> Option<BookingViewModel<T>> {
        BookingViewModel::for_route(self.api.clone(), self.session.clone(), &self.navigator.current())
    }
}
