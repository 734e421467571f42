pub mod session;
pub mod patient;
pub mod appointment;
pub mod medication;
pub mod catalog;
pub mod cart;
pub mod notice;

pub use session::Session;
pub use patient::{CreatePatientRequest, CreatedProfile, Gender, PatientProfile};
pub use appointment::{Appointment, AppointmentView, BookAppointmentRequest};
pub use medication::{MedicationReminder, ReminderView};
pub use catalog::{filter_catalog, Doctor, LabTest, Medicine, Procedure, Searchable};
pub use cart::{Cart, CartItem, CartSummary, ItemKind, Pricing};
pub use notice::{ActionOutcome, Notice, NoticeKind, Redirect};
