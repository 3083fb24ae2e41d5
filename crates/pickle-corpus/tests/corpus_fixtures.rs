//! Canonical text and binary artifacts of the whole catalog at a fixed time.

use pickle_corpus::{canonicalize, Catalog, CatalogBuilder, FixtureClass, SkipReason};
use pickle_pack::{PickleEncoder, Protocol};

const TS: f64 = 1_445_000_000.5;

fn catalog() -> Catalog {
    CatalogBuilder::at(TS).build()
}

fn text(name: &str) -> String {
    let catalog = catalog();
    let fixture = catalog.get(name).expect("fixture exists");
    canonicalize(&fixture.graph).to_text()
}

fn pickle(name: &str) -> Vec<u8> {
    let catalog = catalog();
    let fixture = catalog.get(name).expect("fixture exists");
    PickleEncoder::new(Protocol::V0)
        .encode(&fixture.graph)
        .expect("encode")
}

// ---------------------------------------------------------------------------
// Invalid fixtures
// ---------------------------------------------------------------------------

#[test]
fn invalid_fixtures_have_empty_text_but_full_binaries() {
    let catalog = catalog();
    for fixture in catalog.iter().filter(|f| f.class == FixtureClass::Invalid) {
        let canonical = canonicalize(&fixture.graph);
        assert_eq!(canonical.to_text(), "", "{} should have no lines", fixture.name);
        assert!(!pickle(fixture.name).is_empty());
    }

    assert_eq!(pickle("invalid.000"), b"(dp0\nS'foo'\np1\nS'bar'\np2\ns.");
    assert_eq!(pickle("invalid.001"), b"(lp0\nS'string'\np1\na.");
    assert_eq!(
        pickle("invalid.002"),
        b"(lp0\n(lp1\nI5\na(F1445000000.5\nI42\ntp2\naa."
    );
}

#[test]
fn invalid_fixture_reasons() {
    let catalog = catalog();
    let reasons = |name: &str| -> (Option<&'static str>, Vec<SkipReason>) {
        let canonical = canonicalize(&catalog.get(name).unwrap().graph);
        (
            canonical.rejected,
            canonical.skipped.into_iter().map(|s| s.reason).collect(),
        )
    };

    assert_eq!(reasons("invalid.000"), (Some("dict"), vec![]));
    assert_eq!(
        reasons("invalid.001"),
        (None, vec![SkipReason::NotSequence("str")])
    );
    assert_eq!(
        reasons("invalid.002"),
        (None, vec![SkipReason::NameNotText("int")])
    );
}

// ---------------------------------------------------------------------------
// Valid fixtures
// ---------------------------------------------------------------------------

#[test]
fn mixed_containers_emit_every_entry() {
    assert_eq!(
        text("test.001"),
        concat!(
            "test.001 42 1445000000.500000000000\n",
            "test.002 43 1445000000.500000000000\n",
            "test.003 44 1445000000.500000000000\n",
            "test.004 45 1445000000.500000000000\n",
        )
    );
}

#[test]
fn pre_stringified_values_pass_through() {
    assert_eq!(
        text("test.002"),
        concat!(
            "test.001 42 1445000000.5\n",
            "test.002 43 1445000000.500000000000\n",
            "test.003 44 1445000000.5\n",
            "test.004 3.14159265358979323846264338327950288419716939937510 1445000000.5\n",
        )
    );
}

#[test]
fn integer_domain_has_no_decimal_points() {
    let text = text("test.003");
    assert_eq!(
        text,
        concat!(
            "test.001 42 1445000000\n",
            "test.002 43 1445000000\n",
            "test.003 44 1445000000\n",
            "test.004 45 1445000000\n",
        )
    );
    assert!(text.lines().all(|l| l.split(' ').skip(1).all(|f| !f.contains('.'))));
}

#[test]
fn float_domain_uses_twelve_fractional_digits() {
    assert_eq!(
        text("test.004"),
        concat!(
            "test.001 42.345600000000 1445000000.500000000000\n",
            "test.002 3.141592653590 1445000000.500000000000\n",
            "test.003 2.718280000000 1445000000.500000000000\n",
            "test.004 -9.700000000000 1445000000.500000000000\n",
        )
    );
}

#[test]
fn overflow_boundary_integers_are_exact() {
    assert_eq!(
        text("test.005"),
        concat!(
            "test.001 18446744073709551615 1445000000.500000000000\n",
            "test.002 18446744073709551616 1445000000.500000000000\n",
            "test.003 18446744073709551617 1445000000.500000000000\n",
            "test.004 18446744073709551618 1445000000.500000000000\n",
        )
    );

    let bytes = pickle("test.005");
    for long in [
        "L18446744073709551615L\n",
        "L18446744073709551616L\n",
        "L18446744073709551617L\n",
        "L18446744073709551618L\n",
    ] {
        assert!(
            bytes.windows(long.len()).any(|w| w == long.as_bytes()),
            "missing {long:?}"
        );
    }
}

#[test]
fn outer_tuple_decodes_like_a_list() {
    assert_eq!(
        text("test.006"),
        concat!(
            "test.001 1.500000000000 1445000000\n",
            "test.002 -0.125000000000 1445000000\n",
            "test.003 46 1445000000\n",
        )
    );
    assert!(pickle("test.006").ends_with(b"tp9\n."));
}

// ---------------------------------------------------------------------------
// Run-level invariants
// ---------------------------------------------------------------------------

#[test]
fn every_valid_fixture_line_has_three_fields() {
    let catalog = catalog();
    for fixture in catalog.iter().filter(|f| f.class != FixtureClass::Invalid) {
        let canonical = canonicalize(&fixture.graph);
        assert!(!canonical.lines.is_empty(), "{} has lines", fixture.name);
        assert!(canonical.skipped.is_empty(), "{} skips nothing", fixture.name);
        for line in &canonical.lines {
            assert_eq!(line.split(' ').count(), 3, "{line:?}");
        }
    }
}

#[test]
fn all_timestamps_share_one_capture() {
    let catalog = catalog();
    for fixture in catalog.iter().filter(|f| f.class == FixtureClass::FloatDomain) {
        for line in canonicalize(&fixture.graph).lines {
            assert!(line.ends_with(" 1445000000.500000000000"), "{line:?}");
        }
    }
}

#[test]
fn binary_protocols_encode_every_fixture() {
    let catalog = catalog();
    for protocol in [Protocol::V0, Protocol::V1, Protocol::V2] {
        let mut encoder = PickleEncoder::new(protocol);
        for fixture in &catalog {
            let bytes = encoder.encode(&fixture.graph).expect("encode");
            assert_eq!(bytes.last(), Some(&b'.'), "{} ends with STOP", fixture.name);
            assert_eq!(bytes.starts_with(b"\x80\x02"), protocol == Protocol::V2);
        }
    }
}
