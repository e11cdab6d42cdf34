use std::env;
use std::ffi::OsStr;

use crate::api::CliOption;
use crate::constant::POSIXLY_CORRECT;
use crate::model::ConfigError;
use crate::parser::{ConsoleInterface, GeneralParser, UserInterface};
use crate::parser::{OptionParameter, Parser, Printer};

/// The base command line option parser.
///
/// ### Example
/// ```
/// # use clopts_builder as clopts;
/// use clopts::OptionParser;
///
/// let parser = OptionParser::new("program")
///     // Configure with OptionParser::add.
///     .build();
/// parser.parse_tokens(&[]).unwrap();
/// ```
pub struct OptionParser<'a> {
    program: String,
    about: Option<String>,
    options: Vec<Box<dyn CliOption + 'a>>,
}

impl<'a> OptionParser<'a> {
    /// Create a command line option parser.
    ///
    /// ### Example
    /// ```
    /// # use clopts_builder as clopts;
    /// use clopts::OptionParser;
    ///
    /// let parser = OptionParser::new("program")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            options: Vec::default(),
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final about message will apply.
    ///
    /// ### Example
    /// ```
    /// # use clopts_builder as clopts;
    /// use clopts::OptionParser;
    ///
    /// let parser = OptionParser::new("program")
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.  Check it out!")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add an option to the command line parser.
    ///
    /// Options are displayed in the help message in the order they are added.
    ///
    /// ### Example
    /// ```
    /// # use clopts_builder as clopts;
    /// use clopts::{flag, with_required_string, OptionParser};
    /// use std::cell::{Cell, RefCell};
    ///
    /// let verbose = Cell::new(false);
    /// let output = RefCell::new(String::default());
    /// let parser = OptionParser::new("program")
    ///     .add(flag(|| verbose.set(true), "Verbose output.", "--verbose", Some("-v")))
    ///     .add(with_required_string(
    ///         |value| *output.borrow_mut() = value,
    ///         "Directory for output files.",
    ///         "--output",
    ///         Some("-o"),
    ///     ))
    ///     .build();
    ///
    /// let remaining = parser
    ///     .parse_tokens(vec!["-v", "--output=/tmp", "input.txt"].as_slice())
    ///     .unwrap();
    ///
    /// assert!(verbose.get());
    /// assert_eq!(output.borrow().as_str(), "/tmp");
    /// assert_eq!(remaining, vec!["input.txt"]);
    /// ```
    pub fn add(mut self, option: Box<dyn CliOption + 'a>) -> Self {
        self.options.push(option);
        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a>, ConfigError> {
        let OptionParser {
            program,
            about,
            options,
        } = self;
        let parameters: Vec<OptionParameter> = options
            .iter()
            .map(|option| OptionParameter::from(option.as_ref()))
            .collect();
        let parser = Parser::new(options)?
            .stop_at_argument(posixly_correct(env::var_os(POSIXLY_CORRECT).as_deref()));
        let printer = Printer::terminal(program, about, parameters);

        Ok(GeneralParser::new(parser, printer, user_interface))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    ///
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

fn posixly_correct(value: Option<&OsStr>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != "0")
}
