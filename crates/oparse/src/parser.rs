use std::io::{self, Write};

use tracing::debug;

use crate::error::{ParseError, ParseOutcome, ParseResult};
use crate::help;
use crate::opt::Opt;

/// Names reserved for the built-in help request.
const RESERVED: [&str; 2] = ["help", "h"];

/// Registry of declared options plus the positional arguments collected by
/// the most recent parse.
///
/// A parser is built up in a registration phase ([`declare`](Self::declare))
/// and then consumes one argument vector ([`parse`](Self::parse)), mutating
/// its options in place. Parsed state is read back through
/// [`option`](Self::option) and the positional accessors.
#[derive(Debug, Default)]
pub struct Parser {
    opts: Vec<Opt>,
    positionals: Vec<String>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option, or fetch it if any of its names is already
    /// registered.
    ///
    /// Re-declaration through the primary name or an alias returns the same
    /// underlying option, so configuration can be chained from several call
    /// sites. The returned reference aliases the stored option; parsing
    /// mutates it in place.
    pub fn declare(&mut self, name: &str) -> ParseResult<&mut Opt> {
        if RESERVED.contains(&name) {
            return Err(ParseError::ReservedName(name.to_string()));
        }
        if let Some(idx) = self.find(name) {
            return Ok(&mut self.opts[idx]);
        }
        self.opts.push(Opt::new(name)?);
        let idx = self.opts.len() - 1;
        Ok(&mut self.opts[idx])
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.opts.iter().position(|opt| opt.matches(name))
    }

    /// Whether `name` is a declared option's name or alias.
    pub fn is_option(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Look up a declared option by any of its names.
    pub fn option(&self, name: &str) -> ParseResult<&Opt> {
        self.find(name)
            .map(|idx| &self.opts[idx])
            .ok_or_else(|| ParseError::UnknownOption(name.to_string()))
    }

    /// Mutable lookup by any of a declared option's names.
    pub fn option_mut(&mut self, name: &str) -> ParseResult<&mut Opt> {
        match self.find(name) {
            Some(idx) => Ok(&mut self.opts[idx]),
            None => Err(ParseError::UnknownOption(name.to_string())),
        }
    }

    /// All declared options in registration order.
    pub fn options(&self) -> &[Opt] {
        &self.opts
    }

    /// Consume an argument vector.
    ///
    /// `argv[0]` is the program name and is never interpreted as a token;
    /// if present it must be non-empty. Remaining tokens are scanned left to
    /// right in a single pass with one-token lookahead for value
    /// consumption. A `--help` or `-h` token stops the scan and returns
    /// [`ParseOutcome::Help`] with the rendered usage block. After a full
    /// scan, every mandatory option must have been matched.
    pub fn parse<S: AsRef<str>>(&mut self, argv: &[S]) -> ParseResult<ParseOutcome> {
        if let Some(command) = argv.first() {
            if command.as_ref().is_empty() {
                return Err(ParseError::EmptyArgument);
            }
        }

        let mut i = 1;
        while i < argv.len() {
            let token = argv[i].as_ref();

            if token == "--help" || token == "-h" {
                debug!("help requested, stopping the scan");
                return Ok(ParseOutcome::Help(self.render_help()));
            }
            if token.is_empty() {
                return Err(ParseError::EmptyArgument);
            }

            if let Some(name) = strip_dashes(token) {
                if name.is_empty() {
                    return Err(ParseError::EmptyOptionName(token.to_string()));
                }
                let Some(idx) = self.find(name) else {
                    return Err(ParseError::UnknownOption(name.to_string()));
                };
                let primary = self.opts[idx].name().to_string();
                self.opts[idx].mark_read();

                if self.opts[idx].expects_value() {
                    // The lookahead token is the value even if it starts
                    // with a dash; values are allowed to look like flags.
                    let value = match argv.get(i + 1) {
                        Some(next) if !next.as_ref().is_empty() => next.as_ref(),
                        _ => return Err(ParseError::MissingValue(primary)),
                    };
                    debug!("value of option '{}': {}", primary, value);
                    self.opts[idx].assign(value)?;
                    i += 1;
                } else {
                    debug!("matched option '{}'", primary);
                }
            } else {
                debug!("positional argument: {}", token);
                self.positionals.push(token.to_string());
            }

            i += 1;
        }

        for opt in &self.opts {
            if opt.is_mandatory() && !opt.was_read() {
                return Err(ParseError::MissingMandatory(opt.name().to_string()));
            }
        }

        Ok(ParseOutcome::Completed)
    }

    /// Number of positional arguments collected by the last parse.
    pub fn positional_count(&self) -> usize {
        self.positionals.len()
    }

    /// Positional argument by encounter order.
    pub fn positional(&self, index: usize) -> ParseResult<&str> {
        self.positionals
            .get(index)
            .map(String::as_str)
            .ok_or(ParseError::PositionalOutOfRange {
                index,
                count: self.positionals.len(),
            })
    }

    /// All positional arguments in encounter order.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Render the usage block for all declared options.
    pub fn render_help(&self) -> String {
        help::render(&self.opts)
    }

    /// Write the usage block to `w`.
    pub fn print_help(&self, w: &mut dyn Write) -> io::Result<()> {
        w.write_all(self.render_help().as_bytes())
    }
}

/// Strip the option prefix: `--` if present, else a single `-`.
///
/// Returns `None` for tokens that are not option references.
fn strip_dashes(token: &str) -> Option<&str> {
    token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))
}
