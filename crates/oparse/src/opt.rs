use crate::error::{ParseError, ParseResult};

/// A single declarable command-line switch.
///
/// An `Opt` owns an ordered set of equivalent names (the first is the
/// primary name, the rest are aliases) plus its value expectation, default,
/// mandatory flag, and read state. Configuration methods return `&mut Self`
/// so a freshly declared option can be set up in one chain:
///
/// ```
/// use oparse::Parser;
///
/// let mut parser = Parser::new();
/// parser
///     .declare("output")
///     .unwrap()
///     .alias("o")
///     .unwrap()
///     .has_value();
/// ```
#[derive(Debug, Clone)]
pub struct Opt {
    names: Vec<String>,
    expects_value: bool,
    value: Option<String>,
    has_default: bool,
    mandatory: bool,
    read: bool,
}

impl Opt {
    /// Create an option with its primary name.
    ///
    /// Names start with an ASCII letter followed by any number of letters,
    /// digits, `_` or `-`.
    pub fn new(name: &str) -> ParseResult<Self> {
        if !valid_name(name) {
            return Err(ParseError::InvalidName(name.to_string()));
        }
        Ok(Self {
            names: vec![name.to_string()],
            expects_value: false,
            value: None,
            has_default: false,
            mandatory: false,
            read: false,
        })
    }

    /// Register an alternate name for this option.
    ///
    /// Aliases follow the same pattern rule as primary names and may not
    /// repeat a name already attached to this option.
    pub fn alias(&mut self, alias: &str) -> ParseResult<&mut Self> {
        if !valid_name(alias) {
            return Err(ParseError::InvalidName(alias.to_string()));
        }
        if self.matches(alias) {
            return Err(ParseError::DuplicateAlias(alias.to_string()));
        }
        self.names.push(alias.to_string());
        Ok(self)
    }

    /// Declare that the token following this option is consumed as its value.
    pub fn has_value(&mut self) -> &mut Self {
        self.expects_value = true;
        self
    }

    /// Set a default value, implying [`has_value`](Self::has_value).
    pub fn default_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(value.into());
        self.has_default = true;
        self.expects_value = true;
        self
    }

    /// Require this option to be matched during parsing.
    pub fn mandatory(&mut self) -> &mut Self {
        self.mandatory = true;
        self
    }

    /// Whether `name` is one of this option's names.
    pub fn matches(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Primary name.
    pub fn name(&self) -> &str {
        &self.names[0]
    }

    /// All names in declaration order, primary first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether a following token is consumed as this option's value.
    pub fn expects_value(&self) -> bool {
        self.expects_value
    }

    /// Whether this option must be matched for parsing to succeed.
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Whether a default value was set.
    pub fn has_default(&self) -> bool {
        self.has_default
    }

    /// The stored value, from a parse or a default.
    pub fn value(&self) -> ParseResult<&str> {
        if self.expects_value {
            if let Some(value) = &self.value {
                return Ok(value);
            }
        }
        Err(ParseError::NoValue(self.name().to_string()))
    }

    /// Store a value directly.
    pub fn assign(&mut self, value: impl Into<String>) -> ParseResult<()> {
        if !self.expects_value {
            return Err(ParseError::ValueNotExpected(self.name().to_string()));
        }
        self.value = Some(value.into());
        Ok(())
    }

    /// Record that this option was matched on the command line. Idempotent.
    pub fn mark_read(&mut self) {
        self.read = true;
    }

    /// Whether this option was matched on the command line.
    pub fn was_read(&self) -> bool {
        self.read
    }
}

impl PartialEq<str> for Opt {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for Opt {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

fn valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}
