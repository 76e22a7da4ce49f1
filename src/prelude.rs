//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types:
//!
//! ```rust
//! use package_url::prelude::*;
//!
//! let purl = PackageUrl::parse("pkg:cargo/serde@1.0.0").unwrap();
//! assert_eq!(purl.package_type(), "cargo");
//! ```

pub use crate::{
    // Core types
    PackageUrl, RenderFlavor,
    // Builder
    PackageUrlBuilder,
    // Errors
    PackageUrlError, ParseError,
};
