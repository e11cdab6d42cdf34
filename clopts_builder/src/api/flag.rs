use crate::api::{CliOption, OptionError};
use crate::model::{ConfigError, OptionIdentity};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An option that takes no value (ex: `--verbose`).
///
/// Each time the flag is applied, its setter is invoked once.
pub struct Flag<'a> {
    identity: OptionIdentity,
    setter: Box<dyn FnMut() + 'a>,
}

impl<'a> std::fmt::Debug for Flag<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flag")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl<'a> Flag<'a> {
    /// Create a flag option.
    ///
    /// ### Example
    /// ```
    /// # use clopts_builder as clopts;
    /// use clopts::{CliOption, Flag};
    /// use std::cell::Cell;
    ///
    /// let verbosity = Cell::new(0);
    /// let mut flag = Flag::new(
    ///     || verbosity.set(verbosity.get() + 1),
    ///     "Increase output verbosity.",
    ///     "--verbose",
    ///     Some("-v"),
    /// )
    /// .unwrap();
    ///
    /// let remaining = flag.consume("-v", None, vec!["file.txt".to_string()]).unwrap();
    /// assert_eq!(remaining, vec!["file.txt".to_string()]);
    /// assert_eq!(verbosity.get(), 1);
    /// ```
    pub fn new(
        setter: impl FnMut() + 'a,
        help_text: impl Into<String>,
        long: &str,
        short: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            identity: OptionIdentity::new(help_text, long, short)?,
            setter: Box::new(setter),
        })
    }

    /// Invoke the setter.
    pub fn set(&mut self) {
        (self.setter)();
    }
}

impl<'a> CliOption for Flag<'a> {
    fn identity(&self) -> &OptionIdentity {
        &self.identity
    }

    fn requires_value(&self) -> bool {
        false
    }

    fn consume(
        &mut self,
        as_given: &str,
        value: Option<&str>,
        remaining: Vec<String>,
    ) -> Result<Vec<String>, OptionError> {
        if value.is_some() {
            return Err(OptionError::UnexpectedValue {
                as_given: as_given.to_string(),
            });
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Flag '{as_given}' set.");
        }

        self.set();
        Ok(remaining)
    }
}
