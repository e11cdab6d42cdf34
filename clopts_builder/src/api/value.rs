use crate::api::{CliOption, OptionError};
use crate::model::{ConfigError, OptionIdentity};
use crate::prelude::EnumDomain;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Behaviour for options which take precisely one value.
///
/// The value is sourced either inline (`--name=value`) or from the next unprocessed token (`--name value`).
/// Implementations only decide what to do with the raw value, see [`consume_required`].
pub trait RequiredValue: CliOption {
    /// Convert the raw value and hand it to the setter.
    fn set_from_raw_value(&mut self, as_given: &str, value: &str) -> Result<(), OptionError>;
}

/// Source the single value for a [`RequiredValue`] option and apply it.
///
/// An inline `value` takes precedence, leaving `remaining` untouched.
/// Otherwise the first of the `remaining` tokens is taken as the value.
pub fn consume_required(
    option: &mut (impl RequiredValue + ?Sized),
    as_given: &str,
    value: Option<&str>,
    mut remaining: Vec<String>,
) -> Result<Vec<String>, OptionError> {
    let value = match value {
        Some(inline) => inline.to_string(),
        None => {
            if remaining.is_empty() {
                return Err(OptionError::MissingValue {
                    as_given: as_given.to_string(),
                });
            }

            remaining.remove(0)
        }
    };

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Option '{as_given}' sourced value '{value}', {n} token(s) remain.",
            n = remaining.len()
        );
    }

    option.set_from_raw_value(as_given, &value)?;
    Ok(remaining)
}

/// An option that takes any string value (ex: `--output /tmp/dir`).
pub struct RequiredString<'a> {
    identity: OptionIdentity,
    setter: Box<dyn FnMut(String) + 'a>,
}

impl<'a> std::fmt::Debug for RequiredString<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequiredString")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl<'a> RequiredString<'a> {
    /// Create a string option.
    ///
    /// ### Example
    /// ```
    /// # use clopts_builder as clopts;
    /// use clopts::{CliOption, RequiredString};
    /// use std::cell::RefCell;
    ///
    /// let output = RefCell::new(String::default());
    /// let mut option = RequiredString::new(
    ///     |value| *output.borrow_mut() = value,
    ///     "Directory for output files.",
    ///     "--output",
    ///     Some("-o"),
    /// )
    /// .unwrap();
    ///
    /// let remaining = option
    ///     .consume("-o", None, vec!["/tmp/dir".to_string(), "input".to_string()])
    ///     .unwrap();
    /// assert_eq!(remaining, vec!["input".to_string()]);
    /// assert_eq!(output.borrow().as_str(), "/tmp/dir");
    /// ```
    pub fn new(
        setter: impl FnMut(String) + 'a,
        help_text: impl Into<String>,
        long: &str,
        short: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            identity: OptionIdentity::new(help_text, long, short)?,
            setter: Box::new(setter),
        })
    }
}

impl<'a> CliOption for RequiredString<'a> {
    fn identity(&self) -> &OptionIdentity {
        &self.identity
    }

    fn requires_value(&self) -> bool {
        true
    }

    fn consume(
        &mut self,
        as_given: &str,
        value: Option<&str>,
        remaining: Vec<String>,
    ) -> Result<Vec<String>, OptionError> {
        consume_required(self, as_given, value, remaining)
    }
}

impl<'a> RequiredValue for RequiredString<'a> {
    fn set_from_raw_value(&mut self, _as_given: &str, value: &str) -> Result<(), OptionError> {
        (self.setter)(value.to_string());
        Ok(())
    }
}

/// An option that takes a value from a closed [`EnumDomain`] (ex: `--format html`).
pub struct RequiredEnum<'a, T> {
    identity: OptionIdentity,
    setter: Box<dyn FnMut(T) + 'a>,
}

impl<'a, T> std::fmt::Debug for RequiredEnum<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequiredEnum")
            .field("domain", &std::any::type_name::<T>())
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl<'a, T: EnumDomain> RequiredEnum<'a, T> {
    /// Create an enum option.
    /// The domain `T` is typically inferred from the setter.
    ///
    /// ### Example
    /// ```
    /// # use clopts_builder as clopts;
    /// use clopts::{CliOption, RequiredEnum};
    /// use clopts::prelude::EnumDomain;
    /// use std::cell::Cell;
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq)]
    /// enum OutputFormat {
    ///     Markdown,
    ///     Html,
    /// }
    /// # impl EnumDomain for OutputFormat {
    /// #     fn values() -> &'static [&'static str] {
    /// #         &["markdown", "html"]
    /// #     }
    /// #     fn from_value(value: &str) -> Option<Self> {
    /// #         match value {
    /// #             "markdown" => Some(OutputFormat::Markdown),
    /// #             "html" => Some(OutputFormat::Html),
    /// #             _ => None,
    /// #         }
    /// #     }
    /// # }
    ///
    /// let format = Cell::new(OutputFormat::Markdown);
    /// let mut option = RequiredEnum::new(
    ///     |value: OutputFormat| format.set(value),
    ///     "Desired output format.",
    ///     "--format",
    ///     Some("-f"),
    /// )
    /// .unwrap();
    ///
    /// option.consume("--format", Some("html"), Vec::default()).unwrap();
    /// assert_eq!(format.get(), OutputFormat::Html);
    ///
    /// assert!(option.consume("--format", Some("pdf"), Vec::default()).is_err());
    /// assert_eq!(format.get(), OutputFormat::Html);
    /// ```
    pub fn new(
        setter: impl FnMut(T) + 'a,
        help_text: impl Into<String>,
        long: &str,
        short: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            identity: OptionIdentity::new(help_text, long, short)?,
            setter: Box::new(setter),
        })
    }
}

impl<'a, T: EnumDomain> CliOption for RequiredEnum<'a, T> {
    fn identity(&self) -> &OptionIdentity {
        &self.identity
    }

    fn requires_value(&self) -> bool {
        true
    }

    fn consume(
        &mut self,
        as_given: &str,
        value: Option<&str>,
        remaining: Vec<String>,
    ) -> Result<Vec<String>, OptionError> {
        consume_required(self, as_given, value, remaining)
    }
}

impl<'a, T: EnumDomain> RequiredValue for RequiredEnum<'a, T> {
    fn set_from_raw_value(&mut self, as_given: &str, value: &str) -> Result<(), OptionError> {
        match T::from_value(value) {
            Some(member) => {
                (self.setter)(member);
                Ok(())
            }
            None => Err(OptionError::InvalidValue {
                value: value.to_string(),
                as_given: as_given.to_string(),
                accepted: T::values().iter().map(|v| v.to_string()).collect(),
            }),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixture::Colour;
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[rstest]
    #[case(vec!["v1"], "v1", vec![])]
    #[case(vec!["v1", "v2", "v3"], "v1", vec!["v2", "v3"])]
    #[case(vec!["--not-an-option", "v2"], "--not-an-option", vec!["v2"])]
    #[case(vec!["", "v2"], "", vec!["v2"])]
    fn string_next_token(
        #[case] remaining: Vec<&str>,
        #[case] expected: &str,
        #[case] expected_remaining: Vec<&str>,
    ) {
        // Setup
        let captured: RefCell<Vec<String>> = RefCell::default();
        let mut option =
            RequiredString::new(|v| captured.borrow_mut().push(v), "", "--output", None).unwrap();

        // Execute
        let result = option
            .consume("--output", None, tokens(&remaining))
            .unwrap();

        // Verify
        assert_eq!(result, tokens(&expected_remaining));
        assert_eq!(*captured.borrow(), vec![expected.to_string()]);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["v1"])]
    #[case(vec!["v1", "v2", "v3"])]
    fn string_inline(#[case] remaining: Vec<&str>) {
        // Setup
        let captured: RefCell<Vec<String>> = RefCell::default();
        let mut option =
            RequiredString::new(|v| captured.borrow_mut().push(v), "", "--output", Some("-o"))
                .unwrap();

        // Execute
        let result = option.consume("-o", Some("x"), tokens(&remaining)).unwrap();

        // Verify
        assert_eq!(result, tokens(&remaining));
        assert_eq!(*captured.borrow(), vec!["x".to_string()]);
    }

    #[rstest]
    #[case("--port")]
    #[case("-p")]
    fn string_missing_value(#[case] as_given: &str) {
        // Setup
        let count = Cell::new(0);
        let mut option =
            RequiredString::new(|_| count.set(count.get() + 1), "", "--port", Some("-p")).unwrap();

        // Execute
        let error = option.consume(as_given, None, Vec::default()).unwrap_err();

        // Verify
        assert_eq!(
            error,
            OptionError::MissingValue {
                as_given: as_given.to_string()
            }
        );
        assert_eq!(
            error.to_string(),
            format!("option '{as_given}' requires a value")
        );
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn string_sequential() {
        // Setup
        let captured: RefCell<Vec<String>> = RefCell::default();
        let mut option =
            RequiredString::new(|v| captured.borrow_mut().push(v), "", "--item", None).unwrap();

        // Execute
        let remaining = option
            .consume("--item", None, tokens(&["a", "b", "c"]))
            .unwrap();
        let remaining = option.consume("--item", None, remaining).unwrap();

        // Verify
        assert_eq!(remaining, tokens(&["c"]));
        assert_eq!(*captured.borrow(), tokens(&["a", "b"]));
    }

    #[rstest]
    #[case("RED", Colour::Red)]
    #[case("GREEN", Colour::Green)]
    #[case("BLUE", Colour::Blue)]
    fn enum_valid(#[case] value: &str, #[case] expected: Colour) {
        // Setup
        let captured: RefCell<Vec<Colour>> = RefCell::default();
        let mut option =
            RequiredEnum::new(|c: Colour| captured.borrow_mut().push(c), "", "--colour", Some("-c"))
                .unwrap();

        // Execute
        let next_token = option
            .consume("--colour", None, tokens(&[value, "rest"]))
            .unwrap();
        let inline = option
            .consume("-c", Some(value), tokens(&["rest"]))
            .unwrap();

        // Verify
        assert_eq!(next_token, tokens(&["rest"]));
        assert_eq!(inline, tokens(&["rest"]));
        assert_eq!(*captured.borrow(), vec![expected, expected]);
    }

    #[rstest]
    #[case("PURPLE")]
    #[case("green")]
    #[case("")]
    #[case("RED ")]
    fn enum_invalid(#[case] value: &str) {
        // Setup
        let count = Cell::new(0);
        let mut option =
            RequiredEnum::new(|_: Colour| count.set(count.get() + 1), "", "--colour", None)
                .unwrap();

        // Execute
        let error = option
            .consume("--colour", None, tokens(&[value, "rest"]))
            .unwrap_err();

        // Verify
        assert_matches!(error, OptionError::InvalidValue { value: v, as_given, accepted } => {
            assert_eq!(v, value);
            assert_eq!(as_given, "--colour");
            assert_eq!(accepted, tokens(&["RED", "GREEN", "BLUE"]));
        });
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn enum_missing_value() {
        let mut option = RequiredEnum::new(|_: Colour| {}, "", "--colour", None).unwrap();
        let error = option.consume("--colour", None, Vec::default()).unwrap_err();
        assert_matches!(error, OptionError::MissingValue { .. });
    }

    #[test]
    fn consume_required_direct() {
        // Setup
        let captured: RefCell<Vec<String>> = RefCell::default();
        let mut option =
            RequiredString::new(|v| captured.borrow_mut().push(v), "", "--output", None).unwrap();

        // Execute
        let remaining =
            consume_required(&mut option, "--output", Some("inline"), tokens(&["a"])).unwrap();

        // Verify
        assert_eq!(remaining, tokens(&["a"]));
        assert_eq!(*captured.borrow(), tokens(&["inline"]));
    }

    #[test]
    fn identity() {
        let string = RequiredString::new(|_| {}, "Output.", "--output", Some("-o")).unwrap();
        assert_eq!(string.long(), "output");
        assert_eq!(string.short(), Some("o"));
        assert_eq!(string.help_text(), "Output.");
        assert!(string.requires_value());

        let colour = RequiredEnum::new(|_: Colour| {}, "Colour.", "--colour", None).unwrap();
        assert_eq!(colour.long(), "colour");
        assert_eq!(colour.short(), None);
        assert!(colour.requires_value());
    }

    #[test]
    fn invalid_definition() {
        let error = RequiredString::new(|_| {}, "", "--output", Some("--o")).unwrap_err();
        assert_matches!(error, ConfigError::InvalidDefinition(_));

        let error = RequiredEnum::new(|_: Colour| {}, "", "-colour", None).unwrap_err();
        assert_matches!(error, ConfigError::InvalidDefinition(_));
    }
}
