/// Resultado de una llamada a la API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Fallo de transporte (sin respuesta del servidor)
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    /// 401/403 - token ausente, inválido o expirado en el backend
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Respuesta no-2xx
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 2xx con campo `error` en el payload
    #[error("{0}")]
    Backend(String),

    /// 2xx sin la clave esperada
    #[error("Missing `{0}` in response")]
    MissingPayload(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// No hay token en la sesión; el request no se envía
    #[error("Not authenticated")]
    NotAuthenticated,

    /// No hay local_id en la sesión; el request no se envía
    #[error("No patient profile yet")]
    NoProfile,

    /// La vista que lanzó el request ya no existe
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. } | ApiError::NotAuthenticated)
    }

    /// Sin respuesta del servidor
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Timeout(_))
    }

    /// Mensaje del backend o del transporte, sin prefijos
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized { message, .. }
            | ApiError::Http { message, .. }
            | ApiError::Backend(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors() {
        assert!(ApiError::NotAuthenticated.is_auth());
        assert!(ApiError::Unauthorized { status: 401, message: "expired".into() }.is_auth());
        assert!(ApiError::Timeout(30_000).is_transport());
        assert!(!ApiError::NoProfile.is_transport());
    }

    #[test]
    fn user_message_strips_status() {
        let err = ApiError::Http { status: 400, message: "Slot already taken".into() };
        assert_eq!(err.user_message(), "Slot already taken");
        assert_eq!(err.to_string(), "HTTP 400: Slot already taken");
        assert_eq!(ApiError::MissingPayload("reminders".into()).to_string(), "Missing `reminders` in response");
    }
}
