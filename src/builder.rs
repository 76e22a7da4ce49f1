//! Fluent builder producing validated, canonical [`PackageUrl`] values.

use std::collections::BTreeMap;

use crate::error::PackageUrlError;
use crate::parse::{parse_namespace, parse_qualifiers, parse_subpath};
use crate::purl::PackageUrl;
use crate::validate;

/// A fluent accumulator for the components of a [`PackageUrl`].
///
/// Setters only collect raw values; nothing is validated or canonicalized
/// until [`build`](Self::build). At minimum the type and name must be set.
///
/// The builder is a single-owner scratch value: setters consume and return
/// it, and it carries no synchronization. Share the finished [`PackageUrl`]
/// across threads instead.
///
/// # Examples
///
/// ```
/// use package_url::PackageUrl;
///
/// let purl = PackageUrl::builder()
///     .package_type("maven")
///     .namespace(["org.apache.commons"])
///     .name("commons-lang3")
///     .version("3.14.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(purl.to_string(), "pkg:maven/org.apache.commons/commons-lang3@3.14.0");
/// ```
#[derive(Debug, Clone)]
pub struct PackageUrlBuilder {
    package_type: Option<String>,
    namespace: Vec<String>,
    name: Option<String>,
    version: Option<String>,
    /// Insertion-ordered until finalization sorts them.
    qualifiers: Vec<(String, String)>,
    subpath: Vec<String>,
    type_transformations: bool,
}

impl PackageUrlBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            package_type: None,
            namespace: Vec::new(),
            name: None,
            version: None,
            qualifiers: Vec::new(),
            subpath: Vec::new(),
            type_transformations: true,
        }
    }

    /// Sets the package type (the ecosystem identifier, e.g. `maven`).
    #[must_use]
    pub fn package_type(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = Some(package_type.into());
        self
    }

    /// Sets the namespace from pre-split, already-decoded segments.
    #[must_use]
    pub fn namespace<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespace = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Parses and sets the namespace from a `/`-separated, possibly
    /// percent-encoded string.
    ///
    /// # Errors
    ///
    /// Returns [`PackageUrlError::InvalidPercentEncoding`] if a segment
    /// contains a malformed escape.
    pub fn try_namespace(self, value: &str) -> Result<Self, PackageUrlError> {
        let segments = parse_namespace(value)?;
        Ok(self.namespace(segments))
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the version if provided, otherwise leaves it unset.
    #[must_use]
    pub fn maybe_version(self, version: Option<String>) -> Self {
        match version {
            Some(version) => self.version(version),
            None => self,
        }
    }

    /// Adds one qualifier. A later call with the same key replaces the
    /// earlier value in place.
    #[must_use]
    pub fn qualifier(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.qualifiers.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.qualifiers.push((key, value));
        }
        self
    }

    /// Adds every qualifier from the given pairs, in iteration order.
    #[must_use]
    pub fn qualifiers<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self = self.qualifier(key, value);
        }
        self
    }

    /// Parses and adds qualifiers from a raw `key=value&key2=value2`
    /// string.
    ///
    /// # Errors
    ///
    /// Returns [`PackageUrlError::MalformedQualifier`] for a pair without
    /// `=` or with an empty key, or
    /// [`PackageUrlError::InvalidPercentEncoding`] for a malformed escape
    /// in a value.
    pub fn try_qualifiers(self, value: &str) -> Result<Self, PackageUrlError> {
        let pairs = parse_qualifiers(value)?;
        Ok(self.qualifiers(pairs))
    }

    /// Sets the subpath from pre-split, already-decoded segments.
    #[must_use]
    pub fn subpath<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subpath = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Parses and sets the subpath from a `/`-separated, possibly
    /// percent-encoded string.
    ///
    /// # Errors
    ///
    /// Returns [`PackageUrlError::InvalidPercentEncoding`] if a segment
    /// contains a malformed escape.
    pub fn try_subpath(self, value: &str) -> Result<Self, PackageUrlError> {
        let segments = parse_subpath(value)?;
        Ok(self.subpath(segments))
    }

    /// Enables or disables the per-ecosystem corrections applied at build
    /// time. Enabled by default to stay compliant with the Package URL
    /// specification.
    #[must_use]
    pub fn type_transformations(mut self, enable: bool) -> Self {
        self.type_transformations = enable;
        self
    }

    /// Validates, canonicalizes, and constructs the [`PackageUrl`].
    ///
    /// Runs the component grammar checks, applies the per-ecosystem
    /// corrections (unless disabled), then canonicalizes qualifiers:
    /// keys fold to lower-case, entries with blank values are dropped,
    /// and the remainder sorts by key.
    ///
    /// # Errors
    ///
    /// Returns [`PackageUrlError`] on the first component that is missing
    /// or fails its grammar. No partial value is ever produced.
    pub fn build(self) -> Result<PackageUrl, PackageUrlError> {
        self.finish(true)
    }

    /// Construction path for the parser's already-split components:
    /// ecosystem transforms and qualifier canonicalization still run, the
    /// pattern-grammar checks do not — a string that parsed already has
    /// the shapes they enforce.
    pub(crate) fn build_unvalidated(self) -> Result<PackageUrl, PackageUrlError> {
        self.finish(false)
    }

    fn finish(self, validate: bool) -> Result<PackageUrl, PackageUrlError> {
        let Some(package_type) = self.package_type else {
            return Err(PackageUrlError::MissingComponent { component: "type" });
        };
        if validate {
            validate::validate_type(&package_type)?;
            validate::validate_namespace(&self.namespace)?;
        }
        let Some(name) = self.name else {
            return Err(PackageUrlError::MissingComponent { component: "name" });
        };
        if validate {
            if let Some(version) = &self.version {
                validate::validate_version(version)?;
            }
            validate::validate_qualifiers(&self.qualifiers)?;
            validate::validate_subpath(&self.subpath)?;
        }

        let (namespace, name) = if self.type_transformations {
            apply_type_transformations(&package_type, self.namespace, name)
        } else {
            (self.namespace, name)
        };

        let mut qualifiers = BTreeMap::new();
        for (key, value) in self.qualifiers {
            if value.trim().is_empty() {
                continue;
            }
            qualifiers.insert(key.to_lowercase(), value);
        }

        Ok(PackageUrl::new(
            package_type,
            namespace,
            name,
            self.version,
            qualifiers,
            self.subpath,
        ))
    }
}

impl Default for PackageUrlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&PackageUrl> for PackageUrlBuilder {
    fn from(purl: &PackageUrl) -> Self {
        Self {
            package_type: Some(purl.package_type().to_string()),
            namespace: purl.namespace().to_vec(),
            name: Some(purl.name().to_string()),
            version: purl.version().map(ToString::to_string),
            qualifiers: purl
                .qualifiers()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            subpath: purl.subpath().to_vec(),
            type_transformations: true,
        }
    }
}

/// The closed set of per-type corrections the Package URL specification
/// requires.
/// The match is on the type exactly as given; canonical (lower-case)
/// types are the ones these names target.
fn apply_type_transformations(
    package_type: &str,
    namespace: Vec<String>,
    name: String,
) -> (Vec<String>, String) {
    match package_type {
        "github" | "bitbucket" => (
            namespace
                .into_iter()
                .map(|segment| segment.to_lowercase())
                .collect(),
            name.to_lowercase(),
        ),
        "pypi" => (namespace, name.replace('_', "-").to_lowercase()),
        _ => (namespace, name),
    }
}
