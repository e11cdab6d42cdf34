use clopts::{derive::*, flag, prelude::*, with_required_enum, with_required_string, OptionParser};
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, Copy, PartialEq, EnumDomain)]
enum Format {
    #[domain(value = "markdown")]
    Markdown,
    #[domain(value = "html")]
    Html,
}

fn main() {
    let verbosity = Cell::new(0);
    let output: RefCell<Option<String>> = RefCell::new(None);
    let format = Cell::new(Format::Markdown);

    let remaining = OptionParser::new("formatter")
        .about("Render the input files in the selected format.")
        .add(flag(
            || verbosity.set(verbosity.get() + 1),
            "Increase output verbosity (may be repeated).",
            "--verbose",
            Some("-v"),
        ))
        .add(with_required_string(
            |value| {
                output.borrow_mut().replace(value);
            },
            "Directory for the rendered files.\nDefault: the current directory.",
            "--output",
            Some("-o"),
        ))
        .add(with_required_enum(
            |value: Format| format.set(value),
            format!("Output format: {}.", Format::values().join(" | ")),
            "--format",
            Some("-f"),
        ))
        .build()
        .parse();

    println!(
        "Rendering {remaining:?} as {format:?} into {output} (verbosity {verbosity}).",
        format = format.get(),
        output = output.borrow().as_deref().unwrap_or("."),
        verbosity = verbosity.get(),
    );
}
