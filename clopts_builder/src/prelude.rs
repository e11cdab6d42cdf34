//! Traits which, typically, may be imported without concern: `use clopts::prelude::*`.

/// A closed, named set of values that an option may be restricted to.
///
/// Implement by hand, or via `#[derive(EnumDomain)]` from the facade crate.
///
/// ### Example
/// ```
/// # use clopts_builder as clopts;
/// use clopts::prelude::EnumDomain;
///
/// #[derive(Debug, PartialEq)]
/// enum OutputFormat {
///     Markdown,
///     Html,
/// }
///
/// impl EnumDomain for OutputFormat {
///     fn values() -> &'static [&'static str] {
///         &["markdown", "html"]
///     }
///
///     fn from_value(value: &str) -> Option<Self> {
///         match value {
///             "markdown" => Some(OutputFormat::Markdown),
///             "html" => Some(OutputFormat::Html),
///             _ => None,
///         }
///     }
/// }
///
/// assert!(OutputFormat::is_valid("html"));
/// assert_eq!(OutputFormat::from_value("markdown"), Some(OutputFormat::Markdown));
/// ```
pub trait EnumDomain: Sized {
    /// The string representation of every member, in declaration order.
    fn values() -> &'static [&'static str];

    /// Coerce a string representation into its member.
    fn from_value(value: &str) -> Option<Self>;

    /// Whether `value` is the string representation of some member.
    fn is_valid(value: &str) -> bool {
        Self::from_value(value).is_some()
    }
}
