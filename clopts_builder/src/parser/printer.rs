use terminal_size::{terminal_size, Width};

use crate::api::CliOption;
use crate::constant::*;
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

pub(crate) struct OptionParameter {
    long: String,
    short: Option<String>,
    requires_value: bool,
    help: String,
}

impl OptionParameter {
    #[cfg(test)]
    fn new(long: &str, short: Option<&str>, requires_value: bool, help: &str) -> Self {
        Self {
            long: long.to_string(),
            short: short.map(str::to_string),
            requires_value,
            help: help.to_string(),
        }
    }

    fn names(&self) -> String {
        let (long_value, short_value) = if self.requires_value {
            ("=VALUE", " VALUE")
        } else {
            ("", "")
        };

        match &self.short {
            Some(short) => format!(
                "{SHORT_PREFIX}{short}{short_value}, {LONG_PREFIX}{long}{long_value}",
                long = self.long
            ),
            None => format!("{LONG_PREFIX}{long}{long_value}", long = self.long),
        }
    }
}

impl From<&dyn CliOption> for OptionParameter {
    fn from(value: &dyn CliOption) -> Self {
        Self {
            long: value.long().to_string(),
            short: value.short().map(str::to_string),
            requires_value: value.requires_value(),
            help: value.help_text().to_string(),
        }
    }
}

pub(crate) struct Printer {
    program: String,
    about: Option<String>,
    options: Vec<OptionParameter>,
    terminal_width: Option<usize>,
}

// Help lines are indented by a single tab, which terminals typically render 8 columns wide.
const TAB_WIDTH: usize = 8;
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_HELP_WIDTH: usize = 17;

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new("program", None, Vec::default(), None)
    }

    pub(crate) fn terminal(
        program: impl Into<String>,
        about: Option<String>,
        options: Vec<OptionParameter>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(program, about, options, terminal_width)
    }

    pub(crate) fn new(
        program: impl Into<String>,
        about: Option<String>,
        options: Vec<OptionParameter>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program: program.into(),
            about,
            options,
            terminal_width,
        }
    }

    fn help_width(&self) -> Option<usize> {
        let width = self
            .terminal_width
            .map(|w| std::cmp::max(w.saturating_sub(TAB_WIDTH), MINIMUM_HELP_WIDTH));

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Terminal width {:?}, selecting help width: {width:?}.",
                self.terminal_width
            );
        }

        width
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        let help_width = self.help_width();
        let mut lines = Vec::default();

        if self.options.is_empty() {
            lines.push(format!(
                "Usage: {program} [{SHORT_PREFIX}{HELP_SHORT}|{LONG_PREFIX}{HELP_NAME}]",
                program = self.program
            ));
        } else {
            lines.push(format!("Usage: {program} [OPTIONS]", program = self.program));
        }

        if let Some(about) = &self.about {
            lines.push("".to_string());
            lines.extend(wrap(about, self.terminal_width));
        }

        if !self.options.is_empty() {
            lines.push("".to_string());
            lines.push("Options:".to_string());

            for option in &self.options {
                lines.push(format!("  {}", option.names()));

                for line in option.help.split('\n') {
                    for part in wrap(line, help_width) {
                        lines.push(format!("\t{part}"));
                    }
                }
            }

            lines.push(format!(
                "  {SHORT_PREFIX}{HELP_SHORT}, {LONG_PREFIX}{HELP_NAME}"
            ));
            lines.push("\tdisplay this text and exit".to_string());
        }

        user_interface.print(lines.join("\n"));
    }
}

/// Break `text` into lines of at most `width` characters, on whitespace.
/// Words longer than `width` are kept whole.
fn wrap(text: &str, width: Option<usize>) -> Vec<String> {
    let width = match width {
        Some(width) => width,
        None => return vec![text.to_string()],
    };

    let mut out = Vec::default();
    let mut current = String::default();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    out.push(current);
    out
}
