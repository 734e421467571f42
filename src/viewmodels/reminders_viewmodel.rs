// ============================================================================
// REMINDERS VIEWMODEL - Recordatorios de medicación de hoy
// ============================================================================

use std::rc::Rc;

use chrono::NaiveDateTime;

use crate::models::{MedicationReminder, ReminderView};
use crate::services::{ApiClient, HttpTransport};
use crate::state::{SessionState, ViewCell, ViewScope, ViewState};
use crate::utils::time_format::{local_now, to_12h};

pub struct RemindersViewModel<T> {
    api: Rc<ApiClient<T>>,
    session: SessionState,
    state: ViewCell<Vec<ReminderView>>,
}

impl<T: HttpTransport> RemindersViewModel<T> {
    pub fn new(api: Rc<ApiClient<T>>, session: SessionState) -> Self {
        Self {
            api,
            session,
            state: ViewCell::new(),
        }
    }

    pub fn state(&self) -> ViewState<Vec<ReminderView>> {
        self.state.get()
    }

    pub async fn load(&self, scope: &ViewScope) {
        self.load_at(scope, local_now()).await
    }

    /// Carga con un `now` explícito (hora local del dispositivo)
    pub async fn load_at(&self, scope: &ViewScope, now: NaiveDateTime) {
        self.state.set(ViewState::Loading);
        let session = self.session.snapshot();
        let result = scope
            .run(self.api.today_reminders(&session, now))
            .await
            .map(|list| list.into_iter().map(to_view).collect());

        if let Some(next) = ViewState::from_list(result) {
            self.state.set(next);
        }
    }
}

fn to_view(reminder: MedicationReminder) -> ReminderView {
    let time = to_12h(&reminder.time).unwrap_or_else(|e| {
        log::warn!("⚠️ Recordatorio {}: {}", reminder.medication_id, e);
        reminder.time.clone()
    });
    ReminderView {
        id: reminder.medication_id.to_string(),
        name: reminder.drug_name,
        time,
        note: reminder.notes,
    }
}
