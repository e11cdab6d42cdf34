//! `clopts` is a small, typed command line option parser for Rust.
//!
//! Programs declare their options up front, each with a long name (`--output`), an optional short name (`-o`), and help text.
//! Every option is bound to a setter: parsing hands the option's typed value to that setter.
//! `clopts` focuses on the following concerns:
//! * *Typed values*:
//! Flags take no value, string options take any value, and enum options take a value from a closed domain (see [`prelude::EnumDomain`]).
//! * *Domain checked values*:
//! A value outside of an enum option's domain is rejected, listing the accepted values.
//! * *Options only*:
//! Tokens which aren't options are collected and handed back to the program, in order.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/formatter.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ formatter -h
//! Usage: formatter [OPTIONS]
//!
//! Render the input files in the selected format.
//!
//! Options:
//!   -v, --verbose
//! 	Increase output verbosity (may be repeated).
//!   -o VALUE, --output=VALUE
//! 	Directory for the rendered files.
//! 	Default: the current directory.
//!   -f VALUE, --format=VALUE
//! 	Output format: markdown | html.
//!   -h, --help
//! 	display this text and exit
//!
//! $ formatter -vv --format=html a.md b.md
//! Rendering ["a.md", "b.md"] as Html into . (verbosity 2).
//!
//! $ formatter --format pdf a.md
//! 'pdf' is not a valid value for '--format' - valid values are: markdown | html
//!
//! $ formatter a.md --format=html b.md
//! Rendering ["a.md", "b.md"] as Html into . (verbosity 0).
//!
//! $ formatter -- a.md --format=html
//! Rendering ["a.md", "--format=html"] as Markdown into . (verbosity 0).
//! ```
//!
//! # Option Syntax
//! * `--name` or `-n` applies a flag.
//! * `--name=VALUE`, `--name VALUE`, `-n=VALUE` or `-n VALUE` applies an option which requires a value.
//! * Tokens which aren't options (ex: `a.md` or `-`) may appear anywhere; they are handed back to the program.
//! * `--` stops option parsing; every following token is handed back to the program.
//! * When the `POSIXLY_CORRECT` environment variable is set, option parsing also stops at the first token which isn't an option.
//! * `-h` or `--help` displays the help message and exits.
//!
//! # Features
//! * `tracing_debug`: emit debug logs (via the [`tracing`](https://docs.rs/tracing) crate) while configuring and parsing.
pub mod derive;
pub use clopts_builder::*;
