// ============================================================================
// SESSION STATE - Token + identificadores del usuario
// ============================================================================
// Se escribe en login y al crear el perfil; se lee justo antes de cada request
// mediante `snapshot()`. Sin validación ni refresh del token.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::Session;

type Callback = Rc<dyn Fn(&Session)>;

/// Estado de sesión compartido (clones apuntan al mismo estado)
#[derive(Clone, Default)]
pub struct SessionState {
    session: Rc<RefCell<Session>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl SessionState {
    /// Crear nuevo estado de sesión (no autenticado)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_session(session: Session) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Copia inmutable para pasar al request
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Obtener token
    pub fn get_token(&self) -> Option<String> {
        self.session.borrow().token.clone()
    }

    /// Obtener uid
    pub fn get_uid(&self) -> String {
        self.session.borrow().uid.clone()
    }

    /// Obtener local_id
    pub fn get_local_id(&self) -> Option<i64> {
        self.session.borrow().local_id
    }

    /// Establecer token
    pub fn set_token(&self, token: Option<String>) {
        self.update(|s| s.token = token);
    }

    /// Establecer uid
    pub fn set_uid(&self, uid: impl Into<String>) {
        let uid = uid.into();
        self.update(|s| s.uid = uid);
    }

    /// Establecer local_id (después de crear el perfil)
    pub fn set_local_id(&self, local_id: Option<i64>) {
        self.update(|s| s.local_id = local_id);
    }

    /// Login: token + uid; el local_id se conserva sólo si es el mismo usuario
    pub fn sign_in(&self, token: impl Into<String>, uid: impl Into<String>) {
        let token = token.into();
        let uid = uid.into();
        self.update(|s| {
            if s.uid != uid {
                s.local_id = None;
            }
            s.token = Some(token);
            s.uid = uid;
        });
    }

    /// Logout - limpiar todo
    pub fn logout(&self) {
        self.update(|s| *s = Session::default());
    }

    /// Suscribirse a cambios de sesión
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Session) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut Session),
    {
        updater(&mut self.session.borrow_mut());
        let snapshot = self.snapshot();
        // Copia de la lista: un callback puede suscribir o escribir en la sesión
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback(&snapshot);
        }
    }
}
