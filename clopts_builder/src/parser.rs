mod base;
mod interface;
mod middleware;
mod printer;
#[cfg(test)]
pub(crate) mod util;

pub use base::ParseError;
pub(crate) use base::Parser;
pub(crate) use interface::*;
pub use middleware::*;
pub(crate) use printer::*;
