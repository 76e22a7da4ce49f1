//! Property-based tests validating the parse/build/render pipeline.
//!
//! These tests generate random valid component values, build package URLs
//! from them, and verify that rendering and reparsing reproduce the same
//! canonical value in both textual flavors.

use proptest::prelude::*;

use package_url::{PackageUrl, PackageUrlError, RenderFlavor};

/// Strategies for generating valid component values.
mod strategies {
    use super::*;

    /// Valid leading characters for a type
    const TYPE_START_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

    /// Valid trailing characters for a type
    const TYPE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789.+-";

    /// Characters for namespace and subpath segments
    const SEGMENT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789.-";

    /// Characters for names (mixed case; encoded chars come from escapes)
    const NAME_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.-_~";

    /// Characters for versions (no `/`, which only the name field escapes)
    const VERSION_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789.-+:~";

    /// Characters for qualifier keys after the first
    const KEY_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789.-_";

    /// Characters for qualifier values (non-blank by construction)
    const VALUE_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.-_";

    fn string_from(table: &'static [u8], len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(table.to_vec()), len)
            .prop_map(|chars| chars.into_iter().map(|c| c as char).collect())
    }

    /// Generate a valid type (leading letter, then the full type charset)
    pub fn package_type() -> impl Strategy<Value = String> {
        (
            prop::sample::select(TYPE_START_CHARS.to_vec()),
            string_from(TYPE_CHARS, 0..8),
        )
            .prop_map(|(first, rest)| format!("{}{rest}", first as char))
    }

    /// Generate a valid namespace or subpath segment
    pub fn segment() -> impl Strategy<Value = String> {
        string_from(SEGMENT_CHARS, 1..12)
    }

    /// Generate a valid name
    pub fn name() -> impl Strategy<Value = String> {
        string_from(NAME_CHARS, 1..16)
    }

    /// Generate a valid version
    pub fn version() -> impl Strategy<Value = String> {
        string_from(VERSION_CHARS, 1..12)
    }

    /// Generate a valid qualifier key
    pub fn qualifier_key() -> impl Strategy<Value = String> {
        (
            prop::sample::select(TYPE_START_CHARS.to_vec()),
            string_from(KEY_CHARS, 0..8),
        )
            .prop_map(|(first, rest)| format!("{}{rest}", first as char))
    }

    /// Generate a non-blank qualifier value
    pub fn qualifier_value() -> impl Strategy<Value = String> {
        string_from(VALUE_CHARS, 1..10)
    }
}

mod pipeline_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn built_values_round_trip_both_flavors(
            package_type in package_type(),
            namespace in prop::collection::vec(segment(), 0..3),
            name in name(),
            version in prop::option::of(version()),
            qualifiers in prop::collection::btree_map(qualifier_key(), qualifier_value(), 0..3),
            subpath in prop::collection::vec(segment(), 0..3),
        ) {
            let purl = PackageUrl::builder()
                .package_type(package_type)
                .namespace(namespace)
                .name(name)
                .maybe_version(version)
                .qualifiers(qualifiers)
                .subpath(subpath)
                .build()
                .unwrap();

            let scheme = purl.render(RenderFlavor::Scheme);
            let reparsed = PackageUrl::parse(&scheme).unwrap();
            prop_assert_eq!(&reparsed, &purl, "scheme flavor: {}", scheme);

            let schemeless = purl.render(RenderFlavor::Schemeless);
            let reparsed = PackageUrl::parse(&schemeless).unwrap();
            prop_assert_eq!(&reparsed, &purl, "schemeless flavor: {}", schemeless);
        }

        #[test]
        fn rendering_is_a_fixpoint(
            package_type in package_type(),
            namespace in prop::collection::vec(segment(), 0..3),
            name in name(),
            version in prop::option::of(version()),
            qualifiers in prop::collection::btree_map(qualifier_key(), qualifier_value(), 0..3),
        ) {
            let purl = PackageUrl::builder()
                .package_type(package_type)
                .namespace(namespace)
                .name(name)
                .maybe_version(version)
                .qualifiers(qualifiers)
                .build()
                .unwrap();

            let rendered = purl.to_string();
            let rerendered = PackageUrl::parse(&rendered).unwrap().to_string();
            prop_assert_eq!(rerendered, rendered);
        }

        #[test]
        fn parsed_qualifier_keys_are_sorted(
            package_type in package_type(),
            name in name(),
            qualifiers in prop::collection::btree_map(qualifier_key(), qualifier_value(), 0..4),
        ) {
            let purl = PackageUrl::builder()
                .package_type(package_type)
                .name(name)
                .qualifiers(qualifiers)
                .build()
                .unwrap();

            let reparsed = PackageUrl::parse(&purl.to_string()).unwrap();
            let keys: Vec<&String> = reparsed.qualifiers().keys().collect();
            prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        }

        #[test]
        fn components_survive_the_round_trip(
            package_type in package_type(),
            namespace in prop::collection::vec(segment(), 1..3),
            name in name(),
            version in version(),
        ) {
            let purl = PackageUrl::builder()
                .package_type(package_type)
                .namespace(namespace)
                .name(name)
                .version(version)
                .build()
                .unwrap();

            let reparsed = PackageUrl::parse(&purl.to_string()).unwrap();
            prop_assert_eq!(reparsed.namespace(), purl.namespace());
            prop_assert_eq!(reparsed.name(), purl.name());
            prop_assert_eq!(reparsed.version(), purl.version());
        }
    }
}

mod canonical_corpus {
    use super::*;

    /// Well-known canonical package URLs must survive parse → render
    /// byte for byte.
    #[test]
    fn canonical_strings_are_stable() {
        let corpus = [
            "pkg:maven/org.apache.xmlgraphics/batik-anim@1.9.1",
            "pkg:npm/%40angular/animation@12.3.1",
            "pkg:npm/foobar@12.3.1",
            "pkg:pypi/django@1.11.1",
            "pkg:gem/jruby-launcher@1.1.2?platform=java",
            "pkg:golang/google.golang.org/genproto#googleapis/api/annotations",
            "pkg:deb/debian/curl@7.50.3-1?arch=i386&distro=jessie",
            "pkg:cargo/rand@0.7.2",
            "pkg:docker/cassandra@sha256:244fd47e07d1004f0aed9c",
            "pkg:generic/openssl@1.1.10g?checksum=sha256:de4d501267da",
        ];

        for input in corpus {
            let purl = PackageUrl::parse(input).unwrap();
            assert_eq!(purl.to_string(), input, "not stable: {input}");
        }
    }

    #[test]
    fn schemeless_corpus_round_trips_structurally() {
        let corpus = [
            "maven:org.apache.xmlgraphics/batik-anim@1.9.1",
            "deb:debian/curl@7.50.3-1",
            "cargo:rand@0.7.2",
        ];

        for input in corpus {
            let purl = PackageUrl::parse(input).unwrap();
            let schemeless = purl.render(RenderFlavor::Schemeless);
            assert_eq!(schemeless, input, "not stable: {input}");

            let scheme = purl.render(RenderFlavor::Scheme);
            assert_eq!(PackageUrl::parse(&scheme).unwrap(), purl);
        }
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn uppercase_type_normalizes_on_render() {
        let purl = PackageUrl::parse("pkg:NPM/lodash@4.17.21").unwrap();
        assert_eq!(purl.to_string(), "pkg:npm/lodash@4.17.21");
    }

    #[test]
    fn qualifier_keys_fold_and_sort_from_text() {
        let purl = PackageUrl::parse("pkg:npm/x?Zeta=1&alpha=2").unwrap();
        assert_eq!(purl.to_string(), "pkg:npm/x?alpha=2&zeta=1");
    }

    #[test]
    fn blank_qualifier_renders_without_query_section() {
        let purl = PackageUrl::builder()
            .package_type("npm")
            .name("x")
            .qualifier("empty", "   ")
            .build()
            .unwrap();
        assert!(!purl.to_string().contains('?'));
    }

    #[test]
    fn encoded_space_and_slash_survive() {
        let purl = PackageUrl::parse("pkg:generic/name%20with%20spaces@1.0%2F2").unwrap();
        assert_eq!(purl.name(), "name with spaces");
        assert_eq!(purl.version(), Some("1.0/2"));
    }

    #[test]
    fn missing_type_is_reported_as_such() {
        let err = PackageUrl::parse("pkg:/name").unwrap_err();
        assert_eq!(
            err.kind,
            PackageUrlError::MissingComponent { component: "type" }
        );
    }

    #[test]
    fn missing_name_is_reported_as_such() {
        let err = PackageUrl::parse("pkg:npm/").unwrap_err();
        assert_eq!(
            err.kind,
            PackageUrlError::MissingComponent { component: "name" }
        );
    }

    #[test]
    fn schemeless_with_slash_boundary_is_an_error() {
        let err = PackageUrl::parse("npm/lodash@4.17.21").unwrap_err();
        assert!(matches!(
            err.kind,
            PackageUrlError::InvalidComponent { component: "type", .. }
        ));
    }

    #[test]
    fn truncated_escape_is_a_decode_error() {
        let err = PackageUrl::parse("pkg:npm/lodash@1%4").unwrap_err();
        assert!(matches!(
            err.kind,
            PackageUrlError::InvalidPercentEncoding { .. }
        ));
    }
}
