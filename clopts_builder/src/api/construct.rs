use crate::api::{CliOption, Flag, RequiredEnum, RequiredString};
use crate::prelude::EnumDomain;

/// Create a flag: an option with no associated value (ex: `--verbose`).
///
/// The `setter` is invoked each time the flag is given.
///
/// Panics if `long`/`short` are malformed (see [`OptionIdentity::new`](crate::OptionIdentity::new)).
///
/// ### Example
/// ```
/// # use clopts_builder as clopts;
/// use clopts::{flag, CliOption};
/// use std::cell::Cell;
///
/// let verbosity = Cell::new(0);
/// let mut option = flag(
///     || verbosity.set(verbosity.get() + 1),
///     "Increase output verbosity.",
///     "--verbose",
///     Some("-v"),
/// );
///
/// option.consume("-v", None, Vec::default()).unwrap();
/// assert_eq!(verbosity.get(), 1);
/// ```
pub fn flag<'a>(
    setter: impl FnMut() + 'a,
    help_text: impl Into<String>,
    long: &str,
    short: Option<&str>,
) -> Box<dyn CliOption + 'a> {
    match Flag::new(setter, help_text, long, short) {
        Ok(option) => Box::new(option),
        Err(error) => panic!("{error}"),
    }
}

/// Create an option that requires a string value (ex: `--output /tmp/dir`).
///
/// Panics if `long`/`short` are malformed (see [`OptionIdentity::new`](crate::OptionIdentity::new)).
///
/// ### Example
/// ```
/// # use clopts_builder as clopts;
/// use clopts::{with_required_string, CliOption};
/// use std::cell::RefCell;
///
/// let output = RefCell::new(None);
/// let mut option = with_required_string(
///     |value| {
///         output.borrow_mut().replace(value);
///     },
///     "Directory for output files.",
///     "--output",
///     Some("-o"),
/// );
///
/// option.consume("--output", Some("/tmp/dir"), Vec::default()).unwrap();
/// assert_eq!(output.borrow().as_deref(), Some("/tmp/dir"));
/// ```
pub fn with_required_string<'a>(
    setter: impl FnMut(String) + 'a,
    help_text: impl Into<String>,
    long: &str,
    short: Option<&str>,
) -> Box<dyn CliOption + 'a> {
    match RequiredString::new(setter, help_text, long, short) {
        Ok(option) => Box::new(option),
        Err(error) => panic!("{error}"),
    }
}

/// Create an option that requires a value from the domain `T` (ex: `--format html`).
///
/// Panics if `long`/`short` are malformed (see [`OptionIdentity::new`](crate::OptionIdentity::new)).
pub fn with_required_enum<'a, T: EnumDomain + 'a>(
    setter: impl FnMut(T) + 'a,
    help_text: impl Into<String>,
    long: &str,
    short: Option<&str>,
) -> Box<dyn CliOption + 'a> {
    match RequiredEnum::new(setter, help_text, long, short) {
        Ok(option) => Box::new(option),
        Err(error) => panic!("{error}"),
    }
}
