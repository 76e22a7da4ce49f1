//! Error types for package URL parsing and construction.

use std::fmt;

/// Failure to validate, build, or decode a package URL component.
///
/// This is a closed set: every failure mode of the crate is one of these
/// five kinds. No failure is recoverable for the current input; callers
/// either reject the input or correct it and retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageUrlError {
    /// A required component (type or name) was not provided.
    MissingComponent {
        /// Name of the missing component
        component: &'static str,
    },
    /// A namespace or subpath segment contains content its grammar forbids.
    IllegalSegmentContent {
        /// The offending segment
        segment: String,
        /// The full value the segment came from
        value: String,
    },
    /// A component failed its grammar check.
    InvalidComponent {
        /// Which component was rejected
        component: &'static str,
        /// The rejected value
        value: String,
    },
    /// A percent escape sequence was truncated or not hexadecimal.
    InvalidPercentEncoding {
        /// The value containing the bad escape
        value: String,
    },
    /// A qualifier pair had no `=` or an empty key.
    MalformedQualifier {
        /// The offending pair as it appeared in the input
        pair: String,
    },
}

impl fmt::Display for PackageUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComponent { component } => {
                write!(f, "missing required component: {component}")
            }
            Self::IllegalSegmentContent { segment, value } => {
                write!(f, "illegal segment content '{segment}' in '{value}'")
            }
            Self::InvalidComponent { component, value } => {
                write!(f, "invalid {component}: '{value}'")
            }
            Self::InvalidPercentEncoding { value } => {
                write!(f, "invalid percent encoding in '{value}'")
            }
            Self::MalformedQualifier { pair } => {
                write!(f, "malformed qualifier '{pair}'; expected key=value")
            }
        }
    }
}

impl std::error::Error for PackageUrlError {}

/// Failure to parse a package URL string.
///
/// Carries the full input alongside the specific [`PackageUrlError`] so a
/// caller reporting the failure does not have to thread the input through
/// separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: PackageUrlError,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse package URL '{}': {}", self.input, self.kind)
    }
}

impl std::error::Error for ParseError {}
