// ============================================================================
// PATIENT APP - NÚCLEO CLIENTE (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - ViewModels: Estado de pantalla + acciones (ViewState, ActionOutcome)
// - Services: SOLO comunicación API (un request tipado)
// - State: Sesión y ciclo de vida de vistas con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod navigation;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod app;

pub use app::App;
pub use models::Session;
pub use navigation::Route;
pub use services::{ApiClient, ApiError, HttpTransport};
pub use state::{SessionState, ViewScope, ViewState};

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;
    use crate::navigation::Route;
    use crate::services::GlooTransport;
    use crate::state::ViewScope;

    // Variable estática global para mantener la instancia de App
    thread_local! {
        static APP: RefCell<Option<App<GlooTransport>>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::default());
        }
        log::info!("🚀 Patient App - Rust + MVVM ({})", CONFIG.environment);

        APP.with(|app_cell| {
            *app_cell.borrow_mut() = Some(App::new());
        });
        Ok(())
    }

    /// Llamado por la capa JS tras el login en el proveedor de identidad
    #[wasm_bindgen]
    pub fn sign_in(token: String, uid: String) {
        let profile = APP.with(|app_cell| match app_cell.borrow().as_ref() {
            Some(app) => {
                app.sign_in(&token, &uid);
                Some(app.profile())
            }
            None => {
                log::warn!("⚠️ App no está inicializada");
                None
            }
        });

        // Si el perfil ya existe en backend, se adopta su id y se va a Home
        if let Some(profile) = profile {
            wasm_bindgen_futures::spawn_local(async move {
                profile.load(&ViewScope::new()).await;
                if profile.state().ready().and_then(|p| p.id).is_some() {
                    APP.with(|app_cell| {
                        if let Some(app) = app_cell.borrow().as_ref() {
                            app.navigator().reset(Route::Home);
                        }
                    });
                }
            });
        }
    }

    #[wasm_bindgen]
    pub fn sign_out() {
        APP.with(|app_cell| {
            if let Some(app) = app_cell.borrow().as_ref() {
                app.sign_out();
            }
        });
    }

    /// Ruta actual (path con query) para el router JS
    #[wasm_bindgen]
    pub fn current_route() -> String {
        APP.with(|app_cell| {
            app_cell
                .borrow()
                .as_ref()
                .map(|app| app.navigator().current().path())
                .unwrap_or_else(|| "/register".to_string())
        })
    }

    /// Navegación iniciada desde JS; false si la ruta no existe
    #[wasm_bindgen]
    pub fn navigate(path: String) -> bool {
        let Some(route) = Route::parse(&path) else {
            log::warn!("⚠️ Ruta desconocida: {}", path);
            return false;
        };
        APP.with(|app_cell| match app_cell.borrow().as_ref() {
            Some(app) => {
                app.navigator().push(route);
                true
            }
            None => false,
        })
    }

    #[wasm_bindgen]
    pub fn go_back() -> bool {
        APP.with(|app_cell| {
            app_cell
                .borrow()
                .as_ref()
                .map_or(false, |app| app.navigator().back())
        })
    }
}
