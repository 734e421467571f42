use crate::navigation::Route;

/// Tipo de aviso mostrado al usuario (toast)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Aviso para la capa de presentación; el crate no decide cómo se muestra
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub detail: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            detail: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Resultado de una acción de usuario: aviso + navegación opcional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub notice: Notice,
    pub redirect: Option<Redirect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    Push(Route),
    Replace(Route),
}

impl ActionOutcome {
    pub fn failed(notice: Notice) -> Self {
        Self {
            notice,
            redirect: None,
        }
    }

    pub fn succeeded(notice: Notice, redirect: Redirect) -> Self {
        Self {
            notice,
            redirect: Some(redirect),
        }
    }
}
