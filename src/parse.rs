//! Parsing of package URL strings into their six components.
//!
//! The parser splits from the back of the string forward: subpath at the
//! first `#`, qualifiers at the first `?`, then the type boundary, then
//! namespace / name / version out of the remaining path. Each component is
//! percent-decoded individually and handed to the builder's internal
//! no-validation path — a string that split successfully already has the
//! shapes the grammar checks enforce, but ecosystem transforms and
//! qualifier canonicalization still apply.

use crate::builder::PackageUrlBuilder;
use crate::encoding::decode;
use crate::error::{PackageUrlError, ParseError};
use crate::purl::PackageUrl;

/// Parses a package URL from either textual flavor.
pub(crate) fn parse(input: &str) -> Result<PackageUrl, ParseError> {
    parse_inner(input).map_err(|kind| ParseError {
        input: input.to_string(),
        kind,
    })
}

fn parse_inner(input: &str) -> Result<PackageUrl, PackageUrlError> {
    let (rest, has_scheme) = match input.strip_prefix("pkg:") {
        Some(rest) => (rest, true),
        None => (input, false),
    };

    let (rest, subpath) = split_subpath(rest)?;
    let (rest, qualifiers) = split_qualifiers(rest)?;
    let (package_type, path) = split_type(rest, has_scheme)?;
    let (namespace, name_and_version) = split_namespace(path)?;
    let (name, version) = split_version(name_and_version)?;

    if name.is_empty() {
        return Err(PackageUrlError::MissingComponent { component: "name" });
    }

    PackageUrlBuilder::new()
        .package_type(package_type)
        .namespace(namespace)
        .name(name)
        .maybe_version(version)
        .qualifiers(qualifiers)
        .subpath(subpath)
        .build_unvalidated()
}

fn split_subpath(input: &str) -> Result<(&str, Vec<String>), PackageUrlError> {
    match input.find('#') {
        Some(idx) => Ok((&input[..idx], parse_subpath(&input[idx + 1..])?)),
        None => Ok((input, Vec::new())),
    }
}

fn split_qualifiers(input: &str) -> Result<(&str, Vec<(String, String)>), PackageUrlError> {
    match input.find('?') {
        Some(idx) => Ok((&input[..idx], parse_qualifiers(&input[idx + 1..])?)),
        None => Ok((input, Vec::new())),
    }
}

/// Locates the type boundary: the first `:` or `/` after the type token.
///
/// With an explicit `pkg:` prefix either separator is accepted. In the
/// schemeless form only `:` can terminate the type; a `/` appearing first
/// is ambiguous (the input may be a scheme-flavor string missing its
/// prefix) and is rejected rather than guessed at.
fn split_type(input: &str, has_scheme: bool) -> Result<(&str, &str), PackageUrlError> {
    let Some(idx) = input.find(['/', ':']) else {
        return Err(PackageUrlError::MissingComponent { component: "name" });
    };
    if !has_scheme && input.as_bytes()[idx] == b'/' {
        return Err(PackageUrlError::InvalidComponent {
            component: "type",
            value: input.to_string(),
        });
    }
    let package_type = &input[..idx];
    if package_type.is_empty() {
        return Err(PackageUrlError::MissingComponent { component: "type" });
    }
    Ok((package_type, &input[idx + 1..]))
}

fn split_namespace(path: &str) -> Result<(Vec<String>, &str), PackageUrlError> {
    match path.rfind('/') {
        Some(idx) => Ok((parse_namespace(&path[..idx])?, &path[idx + 1..])),
        None => Ok((Vec::new(), path)),
    }
}

fn split_version(input: &str) -> Result<(String, Option<String>), PackageUrlError> {
    match input.find('@') {
        Some(idx) => {
            let name = decode(&input[..idx])?;
            let version = decode(&input[idx + 1..])?;
            // `name@` carries no version at all
            let version = if version.is_empty() { None } else { Some(version) };
            Ok((name, version))
        }
        None => Ok((decode(input)?, None)),
    }
}

/// Splits a raw namespace on `/`, discarding empty segments and decoding
/// the rest.
pub(crate) fn parse_namespace(value: &str) -> Result<Vec<String>, PackageUrlError> {
    parse_segments(value)
}

/// Splits a raw subpath on `/`, discarding empty segments and decoding
/// the rest.
pub(crate) fn parse_subpath(value: &str) -> Result<Vec<String>, PackageUrlError> {
    parse_segments(value)
}

fn parse_segments(value: &str) -> Result<Vec<String>, PackageUrlError> {
    let mut segments = Vec::new();
    for segment in value.split('/') {
        if segment.is_empty() {
            continue;
        }
        segments.push(decode(segment)?);
    }
    Ok(segments)
}

/// Splits a raw qualifier string on `&` into decoded pairs with
/// lower-cased keys. Values are decoded; keys appear unencoded.
pub(crate) fn parse_qualifiers(value: &str) -> Result<Vec<(String, String)>, PackageUrlError> {
    let mut pairs = Vec::new();
    for pair in value.split('&') {
        if pair.is_empty() {
            continue;
        }
        let Some(eq) = pair.find('=') else {
            return Err(PackageUrlError::MalformedQualifier {
                pair: pair.to_string(),
            });
        };
        let key = &pair[..eq];
        if key.is_empty() {
            return Err(PackageUrlError::MalformedQualifier {
                pair: pair.to_string(),
            });
        }
        pairs.push((key.to_lowercase(), decode(&pair[eq + 1..])?));
    }
    Ok(pairs)
}
