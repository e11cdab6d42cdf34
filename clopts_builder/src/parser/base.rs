use std::collections::HashMap;
use thiserror::Error;

use crate::api::{CliOption, OptionError};
use crate::constant::*;
use crate::model::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in the user's input, found while parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token names an option which has not been declared.
    #[error("Unrecognized option: {0}")]
    UnrecognizedOption(String),
    /// A declared option rejected the input.
    #[error(transparent)]
    Option(#[from] OptionError),
}

#[derive(Debug)]
pub(crate) enum Action {
    Continue { remaining: Vec<String> },
    PrintHelp,
}

pub(crate) struct Parser<'a> {
    options: Vec<Box<dyn CliOption + 'a>>,
    longs: HashMap<String, usize>,
    shorts: HashMap<String, usize>,
    stop_at_argument: bool,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("options", &self.options)
            .field("stop_at_argument", &self.stop_at_argument)
            .finish()
    }
}

impl<'a> Parser<'a> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default()).unwrap()
    }

    pub(crate) fn new(options: Vec<Box<dyn CliOption + 'a>>) -> Result<Self, ConfigError> {
        let mut longs: HashMap<String, usize> = HashMap::default();
        let mut shorts: HashMap<String, usize> = HashMap::default();

        for (index, option) in options.iter().enumerate() {
            if option.long() == HELP_NAME
                || longs.insert(option.long().to_string(), index).is_some()
            {
                return Err(ConfigError::DuplicateOption(format!(
                    "{LONG_PREFIX}{}",
                    option.long()
                )));
            }

            if let Some(short) = option.short() {
                if short == HELP_SHORT || shorts.insert(short.to_string(), index).is_some() {
                    return Err(ConfigError::DuplicateOption(format!("{SHORT_PREFIX}{short}")));
                }
            }
        }

        Ok(Self {
            options,
            longs,
            shorts,
            stop_at_argument: false,
        })
    }

    /// Stop applying options at the first token which isn't an option.
    pub(crate) fn stop_at_argument(mut self, stop_at_argument: bool) -> Self {
        self.stop_at_argument = stop_at_argument;
        self
    }

    /// Apply the option tokens to their options.
    ///
    /// Tokens which aren't options are collected, in order, and parsing continues with the next token.
    /// Parsing stops after the `--` marker, or at the first token which isn't an option when `stop_at_argument` is set.
    /// The collected tokens, followed by the tokens which were not processed, are returned as is.
    pub(crate) fn consume(&mut self, tokens: &[&str]) -> Result<Action, ParseError> {
        let mut remaining: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        let mut arguments: Vec<String> = Vec::default();

        while !remaining.is_empty() {
            let token = remaining.remove(0);

            if token == format!("{LONG_PREFIX}{HELP_NAME}")
                || token == format!("{SHORT_PREFIX}{HELP_SHORT}")
            {
                return Ok(Action::PrintHelp);
            }

            if token == END_OF_OPTIONS {
                break;
            }

            let (prefix, lookup) = if token.starts_with(LONG_PREFIX) {
                (LONG_PREFIX, &self.longs)
            } else if token.starts_with(SHORT_PREFIX) && token.len() > SHORT_PREFIX.len() {
                (SHORT_PREFIX, &self.shorts)
            } else {
                // Not an option (a bare '-' conventionally names stdin).
                arguments.push(token);

                if self.stop_at_argument {
                    break;
                }

                continue;
            };

            let stripped = &token[prefix.len()..];
            let (name, value) = match stripped.split_once(VALUE_SEPARATOR) {
                Some((name, value)) => (name, Some(value)),
                None => (stripped, None),
            };

            let index = *lookup
                .get(name)
                .ok_or_else(|| ParseError::UnrecognizedOption(token.clone()))?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' matched option '{prefix}{name}' (inline value: {value:?}).");
            }

            remaining = self.options[index].consume(&token, value, remaining)?;
        }

        arguments.extend(remaining);
        Ok(Action::Continue {
            remaining: arguments,
        })
    }
}
