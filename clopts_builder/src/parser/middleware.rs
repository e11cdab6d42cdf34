use std::env;

use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

/// The configured command line option parser.
/// Built via `OptionParser::build` or `OptionParser::build_parser`.
pub struct GeneralParser<'a> {
    parser: Parser<'a>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> std::fmt::Debug for GeneralParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("parser", &self.parser)
            .finish_non_exhaustive()
    }
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn new(
        parser: Parser<'a>,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser,
            printer,
            user_interface,
        }
    }

    /// Run the option parser against the input tokens.
    ///
    /// Each option token is applied to its option, invoking the option's setter.
    /// Tokens which aren't options (ex: `file.txt` or `-`) are collected, and parsing continues with the next token.
    /// Parsing stops after the `--` marker.
    /// When the `POSIXLY_CORRECT` environment variable is set, parsing also stops at the first token which isn't an option.
    /// The collected tokens, followed by the tokens which were not processed, are returned in order for the program to handle.
    ///
    /// If at any point the parser encounters an error (ex: an unrecognized option, a missing value, etc), it prints the error and returns with `Err(1)`.
    /// Setters of the options applied before the error will have been invoked.
    ///
    /// If the help switch (`-h` or `--help`) is encountered, the parser will display the help message and return with `Err(0)`.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<Vec<String>, i32> {
        let GeneralParser {
            mut parser,
            printer,
            user_interface,
        } = self;

        match parser.consume(tokens) {
            Ok(Action::Continue { remaining }) => Ok(remaining),
            Ok(Action::PrintHelp) => {
                printer.print_help(&*user_interface);
                Err(0)
            }
            Err(error) => {
                user_interface.print_error(error);
                Err(1)
            }
        }
    }

    /// Run the option parser against the Cli [`env::args`].
    ///
    /// Behaves as [`GeneralParser::parse_tokens`], except that rather than returning `Err(code)` it exits with that code (via [`std::process::exit`]).
    /// For example, a missing value prints `option '--port' requires a value` and exits with error code `1`.
    pub fn parse(self) -> Vec<String> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(remaining) => remaining,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{flag, with_required_string};
    use crate::parser::util::SharedInterface;
    use crate::test::assert_contains;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    fn general_parser<'a>(
        parser: Parser<'a>,
        interface: &SharedInterface,
    ) -> GeneralParser<'a> {
        GeneralParser::new(parser, Printer::empty(), Box::new(interface.clone()))
    }

    #[test]
    fn parse_tokens_empty() {
        // Setup
        let interface = SharedInterface::default();
        let parser = general_parser(Parser::empty(), &interface);

        // Execute
        let remaining = parser.parse_tokens(&[]).unwrap();

        // Verify
        assert!(remaining.is_empty());
        let (message, error) = interface.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
    }

    #[rstest]
    #[case(vec!["--port", "80"], vec![])]
    #[case(vec!["--port=80", "a", "b"], vec!["a", "b"])]
    #[case(vec!["-p", "80", "--", "-q"], vec!["-q"])]
    fn parse_tokens(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        // Setup
        let port = RefCell::new(String::default());
        let interface = SharedInterface::default();
        let parser = general_parser(
            Parser::new(vec![with_required_string(
                |v| *port.borrow_mut() = v,
                "",
                "--port",
                Some("-p"),
            )])
            .unwrap(),
            &interface,
        );

        // Execute
        let remaining = parser.parse_tokens(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(remaining, expected);
        assert_eq!(port.borrow().as_str(), "80");
        let (message, error) = interface.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
    }

    #[rstest]
    #[case(vec!["--help"])]
    #[case(vec!["-h"])]
    #[case(vec!["-h", "--unknown"])]
    fn parse_tokens_help(#[case] tokens: Vec<&str>) {
        // Setup
        let interface = SharedInterface::default();
        let parser = general_parser(Parser::empty(), &interface);

        // Execute
        let error_code = parser.parse_tokens(tokens.as_slice()).unwrap_err();

        // Verify
        assert_eq!(error_code, 0);
        let (message, error) = interface.consume();
        assert_contains!(message.unwrap(), "Usage: program");
        assert_eq!(error, None);
    }

    #[rstest]
    #[case(vec!["--port"], "--port")]
    #[case(vec!["-v", "-p"], "-p")]
    fn parse_tokens_missing_value(#[case] tokens: Vec<&str>, #[case] as_given: &str) {
        // Setup
        let set = Cell::new(false);
        let interface = SharedInterface::default();
        let parser = general_parser(
            Parser::new(vec![
                with_required_string(|_| set.set(true), "", "--port", Some("-p")),
                flag(|| {}, "", "--verbose", Some("-v")),
            ])
            .unwrap(),
            &interface,
        );

        // Execute
        let error_code = parser.parse_tokens(tokens.as_slice()).unwrap_err();

        // Verify
        assert_eq!(error_code, 1);
        assert!(!set.get());
        let (message, error) = interface.consume();
        assert_eq!(message, None);
        assert_eq!(
            error.unwrap(),
            format!("option '{as_given}' requires a value")
        );
    }

    #[rstest]
    #[case(vec!["--unknown"], "Unrecognized option: --unknown")]
    #[case(vec!["--verbose=yes"], "'--verbose=yes' specifies a value")]
    #[case(vec!["a.md", "-v=", "b.md"], "'-v=' specifies a value")]
    fn parse_tokens_error(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let interface = SharedInterface::default();
        let parser = general_parser(
            Parser::new(vec![flag(|| {}, "", "--verbose", Some("-v"))]).unwrap(),
            &interface,
        );

        // Execute
        let error_code = parser.parse_tokens(tokens.as_slice()).unwrap_err();

        // Verify
        assert_eq!(error_code, 1);
        let (message, error) = interface.consume();
        assert_eq!(message, None);
        assert_contains!(error.unwrap(), expected);
    }
}
