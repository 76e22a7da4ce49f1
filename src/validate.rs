//! Grammar checks for individual package URL components.
//!
//! Validation is eager: the first violation aborts the build. Name and
//! qualifier values get no pattern check — they are percent-encoded on
//! output, so any already-decoded text is representable, and a literal
//! pattern over decoded text would falsely reject valid encoded content.

use crate::error::PackageUrlError;

/// The type must start with a letter and continue with letters, digits,
/// `.`, `+`, or `-`.
pub(crate) fn validate_type(value: &str) -> Result<(), PackageUrlError> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(first) => first.is_ascii_alphabetic() && chars.all(is_type_char),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(PackageUrlError::InvalidComponent {
            component: "type",
            value: value.to_string(),
        })
    }
}

const fn is_type_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-')
}

pub(crate) fn validate_namespace(segments: &[String]) -> Result<(), PackageUrlError> {
    validate_segments(segments)
}

pub(crate) fn validate_subpath(segments: &[String]) -> Result<(), PackageUrlError> {
    validate_segments(segments)
}

/// A decoded segment must be non-empty and slash-free; a literal `/`
/// would re-render as a segment separator.
fn validate_segments(segments: &[String]) -> Result<(), PackageUrlError> {
    for segment in segments {
        if segment.is_empty() || segment.contains('/') {
            return Err(PackageUrlError::IllegalSegmentContent {
                segment: segment.clone(),
                value: segments.join("/"),
            });
        }
    }
    Ok(())
}

pub(crate) fn validate_version(value: &str) -> Result<(), PackageUrlError> {
    if value.is_empty() {
        return Err(PackageUrlError::InvalidComponent {
            component: "version",
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Qualifier keys appear unencoded in output, so they get a conservative
/// charset: letters, digits, `.`, `-`, `_`, not starting with a digit.
pub(crate) fn validate_qualifiers(pairs: &[(String, String)]) -> Result<(), PackageUrlError> {
    for (key, _) in pairs {
        validate_qualifier_key(key)?;
    }
    Ok(())
}

fn validate_qualifier_key(key: &str) -> Result<(), PackageUrlError> {
    let mut chars = key.chars();
    let valid = match chars.next() {
        Some(first) => is_qualifier_key_start(first) && chars.all(is_qualifier_key_char),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(PackageUrlError::InvalidComponent {
            component: "qualifier.key",
            value: key.to_string(),
        })
    }
}

const fn is_qualifier_key_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '.' | '-' | '_')
}

const fn is_qualifier_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')
}
