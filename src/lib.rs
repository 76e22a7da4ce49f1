//! Parser, builder, and canonical renderer for the `pkg:` package URL
//! format.
//!
//! # Overview
//!
//! A package URL (purl) names a software package inside an ecosystem in a
//! compact, URI-like form:
//!
//! ```text
//! pkg:type/namespace/name@version?qualifiers#subpath
//! ```
//!
//! Only the type and name are required. The same value also has a legacy
//! schemeless rendering that drops the `pkg:` prefix and separates the type
//! with `:` instead of `/`; both forms are accepted on input.
//!
//! # Quick Start
//!
//! ```rust
//! use package_url::PackageUrl;
//!
//! // Parse a package URL
//! let purl = PackageUrl::parse("pkg:maven/org.apache.commons/commons-lang3@3.14.0").unwrap();
//!
//! // Access components
//! assert_eq!(purl.package_type(), "maven");
//! assert_eq!(purl.namespace(), ["org.apache.commons"]);
//! assert_eq!(purl.name(), "commons-lang3");
//! assert_eq!(purl.version(), Some("3.14.0"));
//!
//! // Render the canonical form
//! assert_eq!(purl.to_string(), "pkg:maven/org.apache.commons/commons-lang3@3.14.0");
//! ```
//!
//! # Builder Pattern
//!
//! Programmatic construction goes through the fluent builder, which
//! validates and canonicalizes on the final `build()` call:
//!
//! ```rust
//! use package_url::PackageUrl;
//!
//! let purl = PackageUrl::builder()
//!     .package_type("npm")
//!     .namespace(["@angular"])
//!     .name("core")
//!     .version("17.0.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(purl.to_string(), "pkg:npm/%40angular/core@17.0.0");
//! ```
//!
//! # Canonical Form
//!
//! Construction normalizes the value once, so rendering is deterministic:
//! the type renders lower-cased, qualifier keys are folded to lower-case
//! and sorted, qualifiers with blank values are dropped, and the known
//! per-ecosystem corrections are applied (`github`/`bitbucket` lower-case
//! namespace and name; `pypi` maps `_` to `-` in the name and lower-cases
//! it). Components are percent-encoded on output with the format's
//! deliberate exceptions: space is `%20`, `:` and `~` stay literal, and
//! `/` stays literal everywhere except in the name.
//!
//! # Component Grammar
//!
//! | Component | Grammar |
//! |-----------|---------|
//! | type | `[A-Za-z][A-Za-z0-9.+-]*` |
//! | namespace segment | non-empty, no `/` |
//! | name | non-empty |
//! | version | non-empty, otherwise opaque |
//! | qualifier key | `[A-Za-z._-][A-Za-z0-9._-]*` |
//! | subpath segment | non-empty, no `/` |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod encoding;
mod error;
mod flavor;
#[cfg(kani)]
mod kani_impls;
mod parse;
pub mod prelude;
mod purl;
mod validate;

pub use builder::PackageUrlBuilder;
pub use error::{PackageUrlError, ParseError};
pub use flavor::RenderFlavor;
pub use purl::PackageUrl;
