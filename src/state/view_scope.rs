// ============================================================================
// VIEW SCOPE - Ciclo de vida de una pantalla
// ============================================================================
// Cada pantalla monta un scope; los requests corren dentro de él. Al
// desmontar se abortan los requests en vuelo y sus resultados se descartan,
// así ninguna respuesta tardía escribe en el estado de una vista muerta.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};

use crate::services::error::ApiError;

#[derive(Default)]
struct ScopeInner {
    // Sólo requests en vuelo; cada uno se retira al terminar
    handles: RefCell<HashMap<u64, AbortHandle>>,
    next_id: Cell<u64>,
    cancelled: Cell<bool>,
}

/// Handle compartido del scope de una vista
#[derive(Clone, Default)]
pub struct ViewScope {
    inner: Rc<ScopeInner>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope + guard que lo cancela al hacer drop (desmontaje)
    pub fn mount() -> (Self, UnmountGuard) {
        let scope = Self::new();
        let guard = UnmountGuard {
            scope: scope.clone(),
        };
        (scope, guard)
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Requests registrados que aún no terminaron
    pub fn in_flight(&self) -> usize {
        self.inner.handles.borrow().len()
    }

    /// Ejecuta el future; si el scope se cancela antes de terminar
    /// devuelve `ApiError::Cancelled`.
    pub async fn run<F, T>(&self, future: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        if self.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.wrapping_add(1));
        self.inner.handles.borrow_mut().insert(id, handle);
        let _registered = Registered {
            inner: self.inner.clone(),
            id,
        };

        match Abortable::new(future, registration).await {
            Ok(result) if !self.is_cancelled() => result,
            _ => Err(ApiError::Cancelled),
        }
    }

    /// Aborta todo lo que está en vuelo; idempotente
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let handles: Vec<AbortHandle> = self
            .inner
            .handles
            .borrow_mut()
            .drain()
            .map(|(_, handle)| handle)
            .collect();
        if !handles.is_empty() {
            log::info!("🛑 Vista desmontada, {} request(s) abortados", handles.len());
        }
        for handle in handles {
            handle.abort();
        }
    }
}

/// Retira el handle del scope al terminar (o al descartarse) el request
struct Registered {
    inner: Rc<ScopeInner>,
    id: u64,
}

impl Drop for Registered {
    fn drop(&mut self) {
        self.inner.handles.borrow_mut().remove(&self.id);
    }
}

/// Cancela el scope al salir de la vista
pub struct UnmountGuard {
    scope: ViewScope,
}

impl Drop for UnmountGuard {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{self, Either};

    #[test]
    fn completed_future_passes_through() {
        let scope = ViewScope::new();
        let result = block_on(scope.run(async { Ok::<_, ApiError>(5) }));
        assert_eq!(result, Ok(5));
    }

    #[test]
    fn cancelled_scope_rejects_new_work() {
        let (scope, guard) = ViewScope::mount();
        drop(guard);
        assert!(scope.is_cancelled());
        let result = block_on(scope.run(async { Ok::<_, ApiError>(5) }));
        assert_eq!(result, Err(ApiError::Cancelled));
    }

    #[test]
    fn in_flight_request_is_aborted_on_unmount() {
        let (scope, guard) = ViewScope::mount();
        let pending = Box::pin(scope.run(future::pending::<Result<u8, ApiError>>()));

        // Un poll para registrar el request, luego desmontar
        let pending = match block_on(future::select(pending, future::ready(()))) {
            Either::Right((_, pending)) => pending,
            Either::Left(_) => unreachable!("pending future resolved"),
        };
        drop(guard);

        assert_eq!(block_on(pending), Err(ApiError::Cancelled));
        assert_eq!(scope.in_flight(), 0);
    }

    #[test]
    fn finished_requests_release_their_handles() {
        let scope = ViewScope::new();
        for i in 0..1000 {
            assert_eq!(block_on(scope.run(async move { Ok::<_, ApiError>(i) })), Ok(i));
        }
        assert_eq!(scope.in_flight(), 0);

        let failed = block_on(scope.run(async { Err::<u8, _>(ApiError::NoProfile) }));
        assert_eq!(failed, Err(ApiError::NoProfile));
        assert_eq!(scope.in_flight(), 0);
    }

    #[test]
    fn dropped_request_releases_its_handle() {
        let scope = ViewScope::new();
        let pending = Box::pin(scope.run(future::pending::<Result<u8, ApiError>>()));
        let pending = match block_on(future::select(pending, future::ready(()))) {
            Either::Right((_, pending)) => pending,
            Either::Left(_) => unreachable!("pending future resolved"),
        };
        assert_eq!(scope.in_flight(), 1);
        drop(pending);
        assert_eq!(scope.in_flight(), 0);
    }
}
