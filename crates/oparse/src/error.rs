use thiserror::Error;

/// Failure taxonomy for option registration and command-line parsing.
///
/// Every failure is synchronous and terminal for the call that produced it;
/// there is no internal recovery. The enum derives `PartialEq` so callers
/// and tests can assert on the exact kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Option or alias name does not match `[A-Za-z][A-Za-z0-9_-]*`.
    #[error("invalid option name: '{0}'")]
    InvalidName(String),

    /// Alias already registered on the same option.
    #[error("alias '{0}' already added")]
    DuplicateAlias(String),

    /// `help` and `h` cannot be redefined.
    #[error("'{0}' is reserved and cannot be declared")]
    ReservedName(String),

    /// Token or lookup name matches no registered option.
    #[error("unknown option: '{0}'")]
    UnknownOption(String),

    /// Empty command name or empty argument token.
    #[error("empty token in argument vector")]
    EmptyArgument,

    /// A bare `-` or `--` with no option name attached.
    #[error("'{0}' carries no option name")]
    EmptyOptionName(String),

    /// Option expects a value but none follows, or the next token is empty.
    #[error("missing value for option '{0}'")]
    MissingValue(String),

    /// A mandatory option was never matched during parsing.
    #[error("mandatory option '{0}' was not supplied")]
    MissingMandatory(String),

    /// Value requested from an option with nothing set or no value expected.
    #[error("option '{0}' has no value")]
    NoValue(String),

    /// Value assigned to an option that does not take one.
    #[error("option '{0}' does not take a value")]
    ValueNotExpected(String),

    /// Positional access beyond the stored count.
    #[error("positional index {index} out of range ({count} stored)")]
    PositionalOutOfRange { index: usize, count: usize },
}

/// Convenience alias for results carrying [`ParseError`].
pub type ParseResult<T> = Result<T, ParseError>;

/// Terminal outcome of a successful [`Parser::parse`](crate::Parser::parse).
///
/// A help request is not an error: the scan stops at the help token and
/// hands the rendered text back so the caller can print it and terminate
/// the process, conventionally with exit status 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The whole argument vector was consumed and all checks passed.
    Completed,
    /// `--help` or `-h` was seen; carries the rendered usage block.
    Help(String),
}
