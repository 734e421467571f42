pub mod validation;
pub mod appointments_viewmodel;
pub mod reminders_viewmodel;
pub mod doctors_viewmodel;
pub mod profile_viewmodel;
pub mod booking_viewmodel;
pub mod cart_viewmodel;
pub mod catalog_viewmodel;

pub use validation::ValidationError;
pub use appointments_viewmodel::AppointmentsViewModel;
pub use reminders_viewmodel::RemindersViewModel;
pub use doctors_viewmodel::DoctorsViewModel;
pub use profile_viewmodel::{ProfileForm, ProfileViewModel};
pub use booking_viewmodel::{BookingForm, BookingViewModel, DoctorRef};
pub use cart_viewmodel::{CartLineView, CartSummaryView, CartViewModel};
pub use catalog_viewmodel::CatalogViewModel;
