//! Derive Api for `clopts` configuration.
//!
//! ### Enum Domains
//! An option restricted to a closed set of values is declared via [`with_required_enum`](crate::with_required_enum), whose value type implements [`EnumDomain`](crate::prelude::EnumDomain).
//! Instrument an enum of unit variants with `#[derive(EnumDomain)]` to generate this implementation.
//!
//! Each variant is represented on the Cli by its identifier.
//! Use `#[domain(value = "...")]` to choose a different representation.
//!
//! ```
//! use clopts::{derive::*, prelude::*};
//!
//! #[derive(Debug, PartialEq, EnumDomain)]
//! enum Format {
//!     #[domain(value = "markdown")]
//!     Markdown,
//!     Html,
//! }
//!
//! assert_eq!(Format::values(), &["markdown", "Html"]);
//! assert_eq!(Format::from_value("markdown"), Some(Format::Markdown));
//! assert_eq!(Format::from_value("html"), None);
//! ```
//!
//! The derive rejects (at compile time) structs, variants with fields, non-string values, and repeated values.
pub use clopts_derive::*;
