use thiserror::Error;

use crate::constant::*;

/// An error in how the command line options were declared.
///
/// These are programmer errors: they cannot be caused by the user's input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A long/short option name is malformed.
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),
    /// Two options claim the same long or short name.
    #[error("Config error: cannot duplicate the option '{0}'.")]
    DuplicateOption(String),
}

/// The validated names and help text of a single option.
///
/// Names are stored in canonical form, without their `--`/`-` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionIdentity {
    help_text: String,
    long: String,
    short: Option<String>,
}

impl OptionIdentity {
    /// Validate and canonicalize an option's names.
    ///
    /// The `long` name must start with `--`.
    /// The `short` name, if any, must start with `-` but not with `--`.
    ///
    /// ### Example
    /// ```
    /// # use clopts_builder as clopts;
    /// use clopts::OptionIdentity;
    ///
    /// let identity = OptionIdentity::new("Output directory.", "--output", Some("-o")).unwrap();
    /// assert_eq!(identity.long(), "output");
    /// assert_eq!(identity.short(), Some("o"));
    /// ```
    pub fn new(
        help_text: impl Into<String>,
        long: &str,
        short: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let canonical_long = long.strip_prefix(LONG_PREFIX).ok_or_else(|| {
            ConfigError::InvalidDefinition(format!(
                "long option '{long}' doesn't start with '{LONG_PREFIX}'"
            ))
        })?;
        non_empty(long, canonical_long)?;

        let canonical_short = match short {
            Some(short) => {
                if short.starts_with(LONG_PREFIX) {
                    return Err(ConfigError::InvalidDefinition(format!(
                        "short option '{short}' shouldn't start with '{LONG_PREFIX}'"
                    )));
                }

                let canonical = short.strip_prefix(SHORT_PREFIX).ok_or_else(|| {
                    ConfigError::InvalidDefinition(format!(
                        "short option '{short}' doesn't start with '{SHORT_PREFIX}'"
                    ))
                })?;
                non_empty(short, canonical)?;
                Some(canonical.to_string())
            }
            None => None,
        };

        Ok(Self {
            help_text: help_text.into(),
            long: canonical_long.to_string(),
            short: canonical_short,
        })
    }

    /// The help text, verbatim.
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    /// The long name, without the `--` prefix.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The short name, without the `-` prefix.
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }
}

fn non_empty(raw: &str, canonical: &str) -> Result<(), ConfigError> {
    if canonical.is_empty() {
        Err(ConfigError::InvalidDefinition(format!(
            "option name '{raw}' is empty"
        )))
    } else {
        Ok(())
    }
}
