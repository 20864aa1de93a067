//! Integration tests for the token codec.
//!
//! These tests drive the public API end to end: video -> encode -> token ->
//! decode -> video, plus the rejection and leniency rules callers rely on.
//! Random videos come from a seeded generator so failures are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vidpack_core::{
    decode, encode, encode_with, width::MAX_VALUE, CodecConfig, DecodeError, EncodeError, Error,
    Section, Video,
};

const URL_SAFE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Generate an identifier whose last character leaves the two spare bits zero.
fn random_id(rng: &mut ChaCha8Rng) -> String {
    let mut id: String = (0..10)
        .map(|_| URL_SAFE[rng.gen_range(0..URL_SAFE.len())] as char)
        .collect();
    id.push(URL_SAFE[rng.gen_range(0..16) * 4] as char);
    id
}

/// Generate a video with a random bit width so every width code gets used.
fn random_video(rng: &mut ChaCha8Rng) -> Video {
    let count = rng.gen_range(0..=63);
    let bits = rng.gen_range(1..=21);
    let limit = (1u32 << bits) - 1;
    let sections = (0..count)
        .map(|_| Section::new(rng.gen_range(0..=limit), rng.gen_range(0..=limit)))
        .collect();
    Video::new(random_id(rng), sections)
}

#[test]
fn test_golden_vectors() {
    let cases = [
        (Video::new("00000000000", vec![]), "4k=Kdg$beQ=&s4C"),
        (
            Video::new("00000000000", vec![Section::new(0, 0)]),
            "4k=Kdg$beQ=&:sG",
        ),
        (
            Video::new("00000000000", vec![Section::new(0, 0); 6]),
            "4k=Kdg$beQ=>(-.",
        ),
        (
            Video::new("abcdefghijk", vec![Section::new(42, 8000)]),
            "2aGR:PmN]PMJNF0kMy=:",
        ),
    ];

    for (video, expected) in cases {
        let token = encode(&video).expect("encode failed");
        assert_eq!(token, expected, "token mismatch for {video:?}");
        assert_eq!(decode(&token).expect("decode failed"), video);
    }
}

#[test]
fn test_random_round_trips() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..500 {
        let video = random_video(&mut rng);
        let token = encode(&video).expect("encode failed");
        assert!(!token.is_empty());
        assert!(!token.ends_with('0') || token == "0", "filler left on {token:?}");
        assert_eq!(decode(&token).expect("decode failed"), video);
    }
}

#[test]
fn test_random_round_trips_without_stripping() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let config = CodecConfig::default().with_strip_filler(false);

    for _ in 0..200 {
        let video = random_video(&mut rng);
        let token = encode_with(&video, &config).expect("encode failed");
        assert_eq!(token.len() % 5, 0);
        assert_eq!(decode(&token).expect("decode failed"), video);
    }
}

#[test]
fn test_trailing_zero_sections_survive() {
    let mut sections = vec![Section::new(MAX_VALUE, 1)];
    sections.extend(vec![Section::new(0, 0); 20]);
    let video = Video::new("dQw4w9WgXcQ", sections);

    let token = encode(&video).unwrap();
    assert_eq!(decode(&token).unwrap(), video);
}

#[test]
fn test_section_order_preserved() {
    let video = Video::new(
        "dQw4w9WgXcQ",
        vec![Section::new(90, 120), Section::new(5, 10), Section::new(300, 200)],
    );
    let decoded = decode(&encode(&video).unwrap()).unwrap();
    assert_eq!(decoded.sections, video.sections);
}

#[test]
fn test_encode_rejections() {
    let short = Video::new("", vec![]);
    assert!(matches!(
        encode(&short),
        Err(Error::Encode(EncodeError::IdentifierLength { .. }))
    ));
    assert_eq!(short.to_token(), None);

    let too_wide = Video::new("5asd2swdaa0", vec![Section::new(42, MAX_VALUE + 1)]);
    assert!(matches!(
        encode(&too_wide),
        Err(Error::Encode(EncodeError::ValueTooLarge { .. }))
    ));

    let too_wide = Video::new("5asd2swdaa0", vec![Section::new(u32::MAX, 42)]);
    assert_eq!(too_wide.to_token(), None);

    let too_many = Video::new("5asd2swdaa0", vec![Section::new(1, 1); 64]);
    assert!(matches!(
        encode(&too_many),
        Err(Error::Encode(EncodeError::TooManySections { .. }))
    ));
}

#[test]
fn test_decode_rejections() {
    assert!(decode("").is_err());
    assert_eq!(Video::from_token(""), None);
    assert!(matches!(
        decode(","),
        Err(Error::Decode(DecodeError::Printable(_)))
    ));
    assert_eq!(Video::from_token(","), None);
}

#[test]
fn test_decode_short_tokens() {
    let expected = Video::new("AAAAAAAAAAA", vec![]);
    assert_eq!(decode("0").unwrap(), expected);
    assert_eq!(decode("000000000").unwrap(), expected);
    assert_eq!(Video::from_token("0"), Some(expected));
}

#[test]
fn test_option_helpers_round_trip() {
    let video = Video::new("abcdefghijk", vec![Section::new(42, 8000)]);
    let token = video.to_token().unwrap();
    assert_eq!(token, "2aGR:PmN]PMJNF0kMy=:");
    assert_eq!(Video::from_token(&token), Some(video));
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                for _ in 0..100 {
                    let video = random_video(&mut rng);
                    let token = encode(&video).unwrap();
                    assert_eq!(decode(&token).unwrap(), video);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}
