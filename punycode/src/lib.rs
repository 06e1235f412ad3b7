//! Punycode: the Bootstring encoding of RFC 3492.
//!
//! Converts arbitrary Unicode strings to and from an ASCII-only form. Basic
//! (ASCII) code points are kept literally, followed by a delimiter and a
//! stream of base-36 digits that describes where every other code point is
//! inserted.
//!
//! # Key Properties
//!
//! - Roundtrip: `decode(encode(s)) == s` for every string
//! - ASCII-only strings get a trailing delimiter: `encode("abc") == "abc-"`
//! - Arithmetic is checked; overflow is reported, never truncated
//!
//! The digit alphabet and the delimiter are both pluggable, see [`DigitCodec`]
//! and [`Punycode`].
//!
//! # Examples
//!
//! ```
//! use punycode::{decode, encode};
//!
//! assert_eq!(encode("Bücher").unwrap(), "Bcher-kva");
//! assert_eq!(decode("Bcher-kva").unwrap(), "Bücher");
//!
//! assert_eq!(encode("abc012").unwrap(), "abc012-");
//! ```
//!
//! Label splitting, `xn--` prefixes and normalization belong to IDNA and are
//! not handled here.

mod bootstring;
mod config;
mod decode;
mod digit;
mod encode;
mod error;

pub use bootstring::DEFAULT_DELIMITER;
pub use config::Punycode;
pub use decode::{decode_to_code_points, decode_with};
pub use digit::{decode_digit, encode_digit, Base36, DigitCodec};
pub use encode::{encode_code_points, encode_with};
pub use error::{Error, Result};

/// Encode a string with the standard delimiter (`-`) and alphabet.
pub fn encode(input: &str) -> Result<String> {
    encode_with(input, DEFAULT_DELIMITER, &Base36)
}

/// Decode a string with the standard delimiter (`-`) and alphabet.
///
/// ```
/// use punycode::{decode, Error};
///
/// assert_eq!(decode("tda"), Ok("ü".to_string()));
/// assert_eq!(decode("tdb9"), Err(Error::MalformedInput));
/// ```
pub fn decode(input: &str) -> Result<String> {
    decode_with(input, DEFAULT_DELIMITER, &Base36)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip property: decode(encode(s)) == s
        #[test]
        fn prop_roundtrip(s in ".*") {
            let encoded = encode(&s).unwrap();
            let decoded = decode(&encoded).unwrap_or_else(|e| {
                panic!("decode failed for input '{}' with encoding '{}': {:?}", &s, &encoded, e)
            });
            prop_assert_eq!(&decoded, &s);
        }

        /// Output is ASCII with the default alphabet and an ASCII delimiter
        #[test]
        fn prop_ascii_output(s in ".*") {
            let encoded = encode(&s).unwrap();
            prop_assert!(encoded.is_ascii(), "encode('{}') = '{}' is not ASCII", &s, &encoded);
        }

        /// Basic-only strings are copied and get a trailing delimiter
        #[test]
        fn prop_basic_passthrough(s in "[ -~]{1,40}") {
            prop_assert_eq!(encode(&s).unwrap(), format!("{}-", s));
        }

        /// Roundtrip with any delimiter outside the digit alphabet
        #[test]
        fn prop_roundtrip_delimiter(
            s in "\\PC{0,30}",
            delimiter in any::<char>().prop_filter("not a digit", |c| decode_digit(*c).is_none()),
        ) {
            let encoded = encode_with(&s, delimiter, &Base36).unwrap();
            let decoded = decode_with(&encoded, delimiter, &Base36).unwrap();
            prop_assert_eq!(&decoded, &s);
        }

        /// Determinism: repeated calls agree
        #[test]
        fn prop_deterministic(s in ".*") {
            prop_assert_eq!(encode(&s), encode(&s));
        }

        /// Decoding arbitrary input never panics
        #[test]
        fn prop_decode_total(s in ".*") {
            let _ = decode(&s);
        }
    }
}
