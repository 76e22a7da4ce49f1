//! Kani Arbitrary implementations and proof harnesses for property
//! verification.
//!
//! This module provides `kani::Arbitrary` trait implementations for the
//! crate's public types, enabling property-based verification with the
//! Kani model checker.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{PackageUrl, RenderFlavor};

/// Valid leading characters for a type
const TYPE_START_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Valid trailing characters for a type
const TYPE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789.+-";

/// Render-stable characters for names and segments (encode to themselves)
const SEGMENT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789.-";

fn pick(table: &[u8]) -> char {
    let idx: usize = kani::any();
    table[idx % table.len()] as char
}

/// Generate a valid type (1-4 chars for tractability)
fn arbitrary_type() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 4);

    (0..len)
        .map(|i| {
            if i == 0 {
                pick(TYPE_START_CHARS)
            } else {
                pick(TYPE_CHARS)
            }
        })
        .collect()
}

/// Generate a valid segment or name (1-6 chars for tractability)
fn arbitrary_segment() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 6);

    (0..len).map(|_| pick(SEGMENT_CHARS)).collect()
}

impl kani::Arbitrary for PackageUrl {
    fn any() -> Self {
        let package_type = arbitrary_type();
        let name = arbitrary_segment();

        let mut builder = PackageUrl::builder().package_type(package_type).name(name);

        let with_namespace: bool = kani::any();
        if with_namespace {
            builder = builder.namespace([arbitrary_segment()]);
        }

        let with_version: bool = kani::any();
        if with_version {
            builder = builder.version(arbitrary_segment());
        }

        builder.build().expect("valid by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: rendering then parsing reproduces the value
#[kani::proof]
#[kani::unwind(10)]
fn proof_render_parse_roundtrip() {
    let purl: PackageUrl = kani::any();
    let rendered = purl.render(RenderFlavor::Scheme);
    let reparsed = PackageUrl::parse(&rendered).expect("canonical form should parse");
    assert_eq!(reparsed, purl);
}

/// Proof: both flavors carry the same value
#[kani::proof]
#[kani::unwind(10)]
fn proof_flavors_agree() {
    let purl: PackageUrl = kani::any();
    let from_scheme =
        PackageUrl::parse(&purl.render(RenderFlavor::Scheme)).expect("scheme flavor parses");
    let from_schemeless = PackageUrl::parse(&purl.render(RenderFlavor::Schemeless))
        .expect("schemeless flavor parses");
    assert_eq!(from_scheme, from_schemeless);
}

/// Proof: rendering the same value twice is deterministic
#[kani::proof]
#[kani::unwind(10)]
fn proof_render_deterministic() {
    let purl: PackageUrl = kani::any();
    assert_eq!(
        purl.render(RenderFlavor::Scheme),
        purl.render(RenderFlavor::Scheme)
    );
}

/// Proof: qualifier canonicalization sorts keys
#[kani::proof]
#[kani::unwind(8)]
fn proof_qualifier_keys_sorted() {
    // Fixed keys for tractability; insertion order deliberately reversed
    let purl = PackageUrl::builder()
        .package_type("npm")
        .name("x")
        .qualifier("os", "linux")
        .qualifier("arch", "amd64")
        .build()
        .expect("valid qualifiers");

    let keys: Vec<&String> = purl.qualifiers().keys().collect();
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}
