// Utils compartidos

pub mod constants;
pub mod time_format;
pub mod money;
pub mod url;

pub use constants::*;
pub use time_format::*;
pub use money::*;
