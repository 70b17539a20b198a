//! Declarative command-line option parsing.
//!
//! A [`Parser`] owns a set of declared options, each with a primary name and
//! any number of aliases, and consumes an argument vector of the
//! `--name value` / `-alias value` / bare-flag shape, collecting everything
//! else as positional arguments. There is intentionally no support for
//! combined short-flag clusters, `--name=value`, repeated-option
//! accumulation, or sub-commands.
//!
//! `--help` and `-h` are reserved: hitting either stops the scan and hands
//! back the rendered usage block as a [`ParseOutcome::Help`], leaving the
//! caller to print it and terminate the process.
//!
//! ```
//! use oparse::{ParseOutcome, Parser};
//!
//! let mut parser = Parser::new();
//! parser
//!     .declare("output")
//!     .unwrap()
//!     .alias("o")
//!     .unwrap()
//!     .has_value();
//! parser.declare("verbose").unwrap();
//!
//! let argv = ["demo", "--output", "out.txt", "-verbose", "input.txt"];
//! let outcome = parser.parse(&argv).unwrap();
//!
//! assert_eq!(outcome, ParseOutcome::Completed);
//! assert_eq!(parser.option("output").unwrap().value().unwrap(), "out.txt");
//! assert!(parser.option("verbose").unwrap().was_read());
//! assert_eq!(parser.positional(0).unwrap(), "input.txt");
//! ```

mod error;
mod help;
mod opt;
mod parser;

pub use error::{ParseError, ParseOutcome, ParseResult};
pub use opt::Opt;
pub use parser::Parser;
