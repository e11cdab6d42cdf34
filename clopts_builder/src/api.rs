mod construct;
mod core;
mod flag;
mod option;
pub(crate) mod value;

pub use self::core::*;
pub use construct::*;
pub use flag::*;
pub use option::*;
pub use value::{consume_required, RequiredEnum, RequiredString, RequiredValue};
