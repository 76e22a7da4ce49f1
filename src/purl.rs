//! The package URL value type and its renderer.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::builder::PackageUrlBuilder;
use crate::encoding::{encode_name, encode_qualifier_value, encode_segment, encode_version};
use crate::error::ParseError;
use crate::flavor::RenderFlavor;
use crate::parse;

/// A parsed, validated, canonical package URL.
///
/// Package URLs name a software package inside an ecosystem:
///
/// ```text
/// pkg:type/namespace/name@version?qualifiers#subpath
/// ```
///
/// Values are immutable and canonical at construction: the builder has
/// already folded and sorted qualifiers and applied the per-ecosystem
/// corrections, so equality and hashing are exact structural comparisons
/// over the six components. A value is created only through
/// [`parse`](Self::parse) or [`builder`](Self::builder); to derive a
/// modified value, go through [`to_builder`](Self::to_builder).
///
/// # Examples
///
/// ```
/// use package_url::PackageUrl;
///
/// let purl = PackageUrl::parse("pkg:maven/org.apache.commons/commons-lang3@3.14.0").unwrap();
/// assert_eq!(purl.package_type(), "maven");
/// assert_eq!(purl.namespace(), ["org.apache.commons"]);
/// assert_eq!(purl.name(), "commons-lang3");
/// assert_eq!(purl.version(), Some("3.14.0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageUrl {
    package_type: String,
    namespace: Vec<String>,
    name: String,
    version: Option<String>,
    qualifiers: BTreeMap<String, String>,
    subpath: Vec<String>,
}

impl PackageUrl {
    /// Standard URI scheme for package URLs.
    pub const SCHEME: &'static str = "pkg";

    /// Values arrive already validated and canonicalized by the builder.
    pub(crate) fn new(
        package_type: String,
        namespace: Vec<String>,
        name: String,
        version: Option<String>,
        qualifiers: BTreeMap<String, String>,
        subpath: Vec<String>,
    ) -> Self {
        Self {
            package_type,
            namespace,
            name,
            version,
            qualifiers,
            subpath,
        }
    }

    /// Parses a package URL from its textual form.
    ///
    /// Both flavors are accepted: `pkg:npm/%40angular/core@17.0.0` and the
    /// schemeless `npm:%40angular/core@17.0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a required component is missing, a
    /// percent escape is malformed, a qualifier pair has no `=` or an
    /// empty key, or the type boundary is ambiguous.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse::parse(input)
    }

    /// Helper to create a builder.
    #[must_use]
    pub fn builder() -> PackageUrlBuilder {
        PackageUrlBuilder::new()
    }

    /// Returns the package type (the ecosystem identifier).
    #[must_use]
    pub fn package_type(&self) -> &str {
        &self.package_type
    }

    /// Returns the decoded namespace segments; empty when absent.
    #[must_use]
    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    /// Returns the decoded namespace joined with `/`, or `None` when
    /// absent. For display; the segments are not re-encoded.
    #[must_use]
    pub fn namespace_as_string(&self) -> Option<String> {
        if self.namespace.is_empty() {
            None
        } else {
            Some(self.namespace.join("/"))
        }
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the version, if present.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the canonical qualifiers: keys lower-cased and sorted,
    /// blank values already dropped. Empty when absent.
    #[must_use]
    pub fn qualifiers(&self) -> &BTreeMap<String, String> {
        &self.qualifiers
    }

    /// Returns the decoded subpath segments; empty when absent.
    #[must_use]
    pub fn subpath(&self) -> &[String] {
        &self.subpath
    }

    /// Returns the decoded subpath joined with `/`, or `None` when
    /// absent. For display; the segments are not re-encoded.
    #[must_use]
    pub fn subpath_as_string(&self) -> Option<String> {
        if self.subpath.is_empty() {
            None
        } else {
            Some(self.subpath.join("/"))
        }
    }

    /// Converts to a builder holding a copy of every component, for
    /// deriving a modified package URL. The original is unaffected.
    ///
    /// # Examples
    ///
    /// ```
    /// use package_url::PackageUrl;
    ///
    /// let purl = PackageUrl::parse("pkg:npm/lodash@4.17.21").unwrap();
    /// let bumped = purl.to_builder().version("4.17.22").build().unwrap();
    /// assert_eq!(bumped.version(), Some("4.17.22"));
    /// assert_eq!(purl.version(), Some("4.17.21"));
    /// ```
    #[must_use]
    pub fn to_builder(&self) -> PackageUrlBuilder {
        PackageUrlBuilder::from(self)
    }

    /// Converts to a generic URL by rendering the default flavor and
    /// parsing the result. No validation happens beyond what URL syntax
    /// itself requires.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`url::ParseError`] if the rendering is not
    /// URL syntax.
    pub fn to_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.to_string())
    }

    /// Renders the canonical textual form in the given flavor.
    ///
    /// The type is lower-cased; namespace, name, version, qualifier
    /// values, and subpath are percent-encoded; qualifier keys appear as
    /// stored (already canonical).
    #[must_use]
    pub fn render(&self, flavor: RenderFlavor) -> String {
        let mut out = String::new();

        if flavor == RenderFlavor::Scheme {
            out.push_str(Self::SCHEME);
            out.push(':');
        }

        out.push_str(&self.package_type.to_lowercase());
        out.push(if flavor == RenderFlavor::Scheme { '/' } else { ':' });

        if !self.namespace.is_empty() {
            render_segments(&mut out, &self.namespace);
            out.push('/');
        }

        out.push_str(&encode_name(&self.name));

        if let Some(version) = &self.version {
            out.push('@');
            out.push_str(&encode_version(version));
        }

        if !self.qualifiers.is_empty() {
            out.push('?');
            let mut separator = "";
            for (key, value) in &self.qualifiers {
                out.push_str(separator);
                out.push_str(key);
                out.push('=');
                out.push_str(&encode_qualifier_value(value));
                separator = "&";
            }
        }

        if !self.subpath.is_empty() {
            out.push('#');
            render_segments(&mut out, &self.subpath);
        }

        out
    }
}

fn render_segments(out: &mut String, segments: &[String]) {
    let mut iter = segments.iter();
    if let Some(first) = iter.next() {
        out.push_str(&encode_segment(first));
    }
    for segment in iter {
        out.push('/');
        out.push_str(&encode_segment(segment));
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RenderFlavor::default()))
    }
}

impl FromStr for PackageUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PackageUrl {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PackageUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PackageUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
