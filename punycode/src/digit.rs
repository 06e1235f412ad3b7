//! Mapping between digit values and the characters that display them.

use crate::bootstring::BASE;

/// Converts Bootstring digit values (`0..36`) to characters and back.
///
/// `encode_digit` is only ever called with values below 36 and must never
/// return the delimiter in use. `decode_digit` returns `None` for characters
/// that represent no digit. The two directions are expected to be inverses;
/// this is not checked.
///
/// Any pair of closures implements the trait, so a custom mapping can be
/// passed as two function values:
///
/// ```
/// let upper = (
///     |d: u32| char::from_digit(d, 36).unwrap().to_ascii_uppercase(),
///     |c: char| c.to_digit(36),
/// );
/// let encoded = punycode::encode_with("ü", '-', &upper).unwrap();
/// assert_eq!(encoded, "J30");
/// assert_eq!(punycode::decode_with(&encoded, '-', &upper).unwrap(), "ü");
/// ```
pub trait DigitCodec {
    /// Character for digit value `d`.
    fn encode_digit(&self, d: u32) -> char;

    /// Digit value for `c`, or `None` if `c` is not a digit.
    fn decode_digit(&self, c: char) -> Option<u32>;
}

/// The standard Punycode alphabet: `a`-`z` (0-25) then `0`-`9` (26-35).
///
/// Decoding is case-sensitive: uppercase letters are not digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base36;

impl DigitCodec for Base36 {
    fn encode_digit(&self, d: u32) -> char {
        encode_digit(d)
    }

    fn decode_digit(&self, c: char) -> Option<u32> {
        decode_digit(c)
    }
}

impl<E, D> DigitCodec for (E, D)
where
    E: Fn(u32) -> char,
    D: Fn(char) -> Option<u32>,
{
    fn encode_digit(&self, d: u32) -> char {
        (self.0)(d)
    }

    fn decode_digit(&self, c: char) -> Option<u32> {
        (self.1)(c)
    }
}

impl<C: DigitCodec + ?Sized> DigitCodec for &C {
    fn encode_digit(&self, d: u32) -> char {
        (**self).encode_digit(d)
    }

    fn decode_digit(&self, c: char) -> Option<u32> {
        (**self).decode_digit(c)
    }
}

/// Encode a digit value (0-35) with the default alphabet.
///
/// `d` must be below `BASE`.
pub fn encode_digit(d: u32) -> char {
    debug_assert!(d < BASE);
    if d < 26 {
        char::from(b'a' + d as u8)
    } else {
        char::from(b'0' + (d - 26) as u8)
    }
}

/// Decode a character to its digit value (0-35) with the default alphabet.
pub fn decode_digit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        '0'..='9' => Some(c as u32 - '0' as u32 + 26),
        _ => None,
    }
}
