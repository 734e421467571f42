// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod session_state;
pub mod view_state;
pub mod view_scope;

pub use session_state::*;
pub use view_state::*;
pub use view_scope::*;
