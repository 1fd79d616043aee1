#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Punycode codec and hostname punycoding tests
///
/// Label vectors come from `fixtures/punycode.json` (RFC 3492 §7.1 plus a
/// few hostname labels) and are cross-checked against the `idna` crate.
use serde::Deserialize;
use urlcanon::{PunycodeError, Url, punycode};

#[derive(Debug, Deserialize)]
struct Vector {
    name: String,
    decoded: String,
    encoded: String,
}

fn vectors() -> Vec<Vector> {
    serde_json::from_str(include_str!("fixtures/punycode.json")).expect("valid punycode fixture")
}

#[test]
fn test_encode_vectors() {
    for vector in vectors() {
        assert_eq!(
            punycode::encode(&vector.decoded).unwrap(),
            vector.encoded,
            "encoding {}",
            vector.name
        );
    }
}

#[test]
fn test_decode_vectors() {
    for vector in vectors() {
        assert_eq!(
            punycode::decode(&vector.encoded).unwrap(),
            vector.decoded,
            "decoding {}",
            vector.name
        );
    }
}

#[test]
fn test_vectors_match_idna() {
    for vector in vectors().iter().filter(|v| !v.decoded.is_ascii()) {
        assert_eq!(
            idna::punycode::encode_str(&vector.decoded).as_deref(),
            Some(vector.encoded.as_str()),
            "idna encoding {}",
            vector.name
        );
        assert_eq!(
            idna::punycode::decode_to_string(&vector.encoded).as_deref(),
            Some(vector.decoded.as_str()),
            "idna decoding {}",
            vector.name
        );
    }
}

#[test]
fn test_round_trip_through_codepoints() {
    for vector in vectors() {
        let codepoints = urlcanon::utf8::to_codepoints(vector.decoded.as_bytes()).unwrap();
        let encoded = punycode::encode_codepoints(&codepoints).unwrap();
        assert_eq!(punycode::decode_codepoints(&encoded).unwrap(), codepoints, "{}", vector.name);
    }
}

#[test]
fn test_decode_is_case_insensitive_on_digits() {
    assert_eq!(
        punycode::decode("D9JUAU41AWCZCZP").unwrap(),
        "\u{305d}\u{306e}\u{30b9}\u{30d4}\u{30fc}\u{30c9}\u{3067}"
    );
}

#[test]
fn test_needs_punycoding() {
    assert!(!punycode::needs_punycoding("example"));
    assert!(punycode::needs_punycoding("k\u{fc}ndigen"));
}

#[test]
fn test_decode_errors() {
    assert_eq!(punycode::decode("d9juau41awczcz"), Err(PunycodeError::EarlyTermination));
    assert_eq!(punycode::decode("\u{fc}-"), Err(PunycodeError::NonBasic));
    assert_eq!(punycode::decode("/"), Err(PunycodeError::InvalidDigit));
}

#[test]
fn test_decode_overflow() {
    assert!(punycode::decode("s121kz41webp2qdk6492joxumu36").is_err());
    assert!(punycode::decode(&"999999b".repeat(32)).is_err());
}

#[test]
fn test_url_punycode_round_trips() {
    for (unencoded, encoded) in [
        ("http://www.k\u{fc}ndigen.de/", "http://www.xn--kndigen-n2a.de/"),
        (
            "http://\u{440}\u{43e}\u{441}\u{441}\u{438}\u{44f}.\u{438}\u{43a}\u{43e}\u{43c}.museum/",
            "http://xn--h1alffa9f.xn--h1aegh.museum/",
        ),
        ("http://b\u{fc}cher/", "http://xn--bcher-kva/"),
        ("relative-url", "relative-url"),
    ] {
        let parse = |input: &str| Url::parse(input).unwrap();
        assert_eq!(parse(unencoded).punycode().unwrap().to_string(), encoded);
        assert_eq!(parse(encoded).unpunycode().unwrap().to_string(), unencoded);
        assert_eq!(
            parse(encoded).unpunycode().unwrap().punycode().unwrap().to_string(),
            encoded
        );
        assert_eq!(
            parse(unencoded).punycode().unwrap().unpunycode().unwrap().to_string(),
            unencoded
        );
    }
}

#[test]
fn test_url_punycode_safe_host() {
    let mut url = Url::parse("http://safe.segments/").unwrap();
    assert_eq!(url.punycode().unwrap().to_string(), "http://safe.segments/");
}

#[test]
fn test_url_punycode_empty_labels() {
    for input in ["http://./", "http://foo..com/", "http://foo../"] {
        let mut url = Url::parse(input).unwrap();
        assert_eq!(url.punycode().err(), Some(PunycodeError::EmptyLabel), "{input:?}");
        assert_eq!(url.to_string(), input, "host of {input:?} must be unchanged");
    }
}

#[test]
fn test_url_punycode_drops_trailing_period() {
    let mut url = Url::parse("http://foo.com./").unwrap();
    assert_eq!(url.punycode().unwrap().to_string(), "http://foo.com/");
}

#[test]
fn test_url_punycode_label_too_long() {
    for input in [
        "http://this-is-a-very-long-segment-that-has-more-than-sixty-three-characters.com/",
        "http://this-is-a-very-long-segment-that-has-more-than-sixty-three-characters/",
    ] {
        let mut url = Url::parse(input).unwrap();
        assert_eq!(url.punycode().err(), Some(PunycodeError::LabelTooLong), "{input:?}");
    }
}

#[test]
fn test_url_unpunycode_invalid_label() {
    let mut url = Url::parse("http://xn--d9juau41awczcz.com/").unwrap();
    assert_eq!(url.unpunycode().err(), Some(PunycodeError::EarlyTermination));
    assert_eq!(url.host(), "xn--d9juau41awczcz.com");
}

#[test]
fn test_url_unpunycode_empty_payload() {
    let mut url = Url::parse("http://xn--.com/").unwrap();
    assert_eq!(url.unpunycode().err(), Some(PunycodeError::EmptyLabel));
    assert_eq!(url.host(), "xn--.com");
    assert_eq!(url.to_string(), "http://xn--.com/");
}
