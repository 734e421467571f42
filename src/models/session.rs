use serde::{Deserialize, Serialize};

// ============================================================================
// SESSION - Identidad del usuario autenticado
// ============================================================================

/// Snapshot inmutable de la sesión.
/// Se pasa explícitamente a cada request, nunca se lee de un global.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token del proveedor de identidad (None = no autenticado)
    pub token: Option<String>,

    /// UID del proveedor de identidad
    pub uid: String,

    /// ID del perfil de paciente en el backend (None = sin perfil todavía)
    pub local_id: Option<i64>,
}

impl Session {
    pub fn new(token: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            uid: uid.into(),
            local_id: None,
        }
    }

    pub fn with_local_id(mut self, local_id: i64) -> Self {
        self.local_id = Some(local_id);
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().map_or(false, |t| !t.is_empty())
    }

    pub fn has_profile(&self) -> bool {
        self.local_id.is_some()
    }

    /// Token no vacío, si existe
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_not_authenticated() {
        let session = Session {
            token: Some(String::new()),
            uid: "uid-1".to_string(),
            local_id: None,
        };
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn local_id_marks_profile() {
        let session = Session::new("tok", "uid-1");
        assert!(session.is_authenticated());
        assert!(!session.has_profile());
        assert!(session.with_local_id(7).has_profile());
    }
}
