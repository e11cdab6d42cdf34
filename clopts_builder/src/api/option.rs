use thiserror::Error;

use crate::model::OptionIdentity;

/// An error applying the user's input to an option.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionError {
    /// The option requires a value, but none was provided.
    #[error("option '{as_given}' requires a value")]
    MissingValue {
        /// The option as written by the user.
        as_given: String,
    },
    /// The value is outside of the option's domain.
    #[error(
        "'{value}' is not a valid value for '{as_given}' - valid values are: {}",
        .accepted.join(" | ")
    )]
    InvalidValue {
        /// The rejected value.
        value: String,
        /// The option as written by the user.
        as_given: String,
        /// Every value the option accepts.
        accepted: Vec<String>,
    },
    /// The option takes no value, but one was provided inline.
    #[error("'{as_given}' specifies a value, however values aren't supported for that option")]
    UnexpectedValue {
        /// The option as written by the user.
        as_given: String,
    },
}

/// A single declared command line option.
///
/// Every option knows its own names, and how many tokens it takes from the command line.
/// Applying an option hands its (typed) value to the setter provided at construction.
pub trait CliOption {
    /// The validated names and help text of this option.
    fn identity(&self) -> &OptionIdentity;

    /// Whether this option takes a value (`--name=VALUE` or `--name VALUE`).
    fn requires_value(&self) -> bool;

    /// Apply the user's input to this option, returning the tokens that remain unprocessed.
    ///
    /// * `as_given`: the option as written by the user (ex: `--output` or `-o`).
    /// * `value`: the inline value, when the user wrote `--name=value`.
    /// * `remaining`: the tokens after `as_given`, not yet processed.
    ///
    /// The setter is invoked at most once, and only if `Ok` is returned.
    fn consume(
        &mut self,
        as_given: &str,
        value: Option<&str>,
        remaining: Vec<String>,
    ) -> Result<Vec<String>, OptionError>;

    /// The help text to show for this option.
    fn help_text(&self) -> &str {
        self.identity().help_text()
    }

    /// The long name, without the `--` prefix.
    fn long(&self) -> &str {
        self.identity().long()
    }

    /// The short name, without the `-` prefix.
    fn short(&self) -> Option<&str> {
        self.identity().short()
    }
}

impl std::fmt::Debug for dyn CliOption + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let short = match self.short() {
            Some(s) => format!("-{s}, "),
            None => "".to_string(),
        };
        let value = if self.requires_value() { "=VALUE" } else { "" };

        write!(f, "Opt[{short}--{long}{value}]", long = self.long())
    }
}
