use core::fmt;
extern crate alloc;
#[cfg(feature = "std")]
use std::error::Error as StdError;

/// A specialized `Result` type for this crate's operations.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
#[non_exhaustive]
/// The error type for operations that can fail.
pub enum Error {
    /// The ruleset is empty or contains no rules that could be compiled.
    ///
    /// An empty ruleset is a configuration error: compilation is marked
    /// failed and every subsequent matcher call returns empty.
    EmptyRuleset,
    /// A rule line was malformed and `strict_rules` was set.
    InvalidRule {
        /// The offending line.
        line: alloc::string::String,
        /// The reason the line was rejected.
        reason: RuleSyntax,
    },
    /// A rule exceeded the six-position limit and `strict_rules` was set.
    RuleDepthExceeded {
        /// The rule line that exceeded the limit.
        line: alloc::string::String,
        /// The number of positions found before truncation.
        positions: usize,
    },
    /// An I/O error occurred while reading a rule file.
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

/// Non-fatal issues encountered while compiling a ruleset.
///
/// Collected only when `CompileOpts::collect_warnings` is set; they never
/// block compilation by themselves — the offending line is simply skipped
/// and compilation continues with the rest of the ruleset.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Warning {
    /// A line had unbalanced braces and was skipped.
    UnbalancedBraces {
        /// The offending line.
        line: alloc::string::String,
    },
    /// A rule had more than six label positions; it was truncated to six.
    Truncated {
        /// The offending line.
        line: alloc::string::String,
        /// The number of positions the line specified before truncation.
        positions: usize,
    },
    /// A rule had zero positions and was ignored.
    EmptyRule {
        /// The offending line.
        line: alloc::string::String,
    },
    /// A line could not be parsed as a rule and was skipped.
    Skipped {
        /// The offending line.
        line: alloc::string::String,
        /// The reason the line was skipped.
        reason: RuleSyntax,
    },
}

/// Describes why a rule line was rejected or truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSyntax {
    /// The line had an opening brace with no matching close (or vice versa).
    UnbalancedBraces,
    /// The leftmost token (the TLD) was missing or empty.
    MissingTld,
    /// A brace group mixed `!` with other alternatives at the same position.
    ConflictingAlternative,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
#[cfg(feature = "std")]
impl StdError for Error {}
