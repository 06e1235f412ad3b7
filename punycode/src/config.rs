//! Reusable encoder/decoder configuration.

use crate::bootstring::DEFAULT_DELIMITER;
use crate::decode::decode_with;
use crate::digit::{Base36, DigitCodec};
use crate::encode::encode_with;
use crate::error::Result;

/// A delimiter and digit codec bundled for repeated use.
///
/// The default is the standard Punycode configuration: `-` and [`Base36`].
///
/// ```
/// use punycode::Punycode;
///
/// let puny = Punycode::new().with_delimiter('_');
/// assert_eq!(puny.encode("étoile").unwrap(), "toile_9ra");
/// assert_eq!(puny.decode("toile_9ra").unwrap(), "étoile");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Punycode<C = Base36> {
    delimiter: char,
    codec: C,
}

impl Punycode<Base36> {
    /// Standard Punycode: `-` delimiter and the [`Base36`] alphabet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Punycode<Base36> {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            codec: Base36,
        }
    }
}

impl<C: DigitCodec> Punycode<C> {
    /// Use `delimiter` between the literal prefix and the digit stream.
    ///
    /// The codec must never produce this character.
    pub fn with_delimiter(self, delimiter: char) -> Self {
        Self { delimiter, ..self }
    }

    /// Replace the digit codec.
    pub fn with_codec<D: DigitCodec>(self, codec: D) -> Punycode<D> {
        Punycode {
            delimiter: self.delimiter,
            codec,
        }
    }

    /// Delimiter between the literal prefix and the digit stream.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The digit codec in use.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Encode `input` with this delimiter and codec.
    ///
    /// Fails only with [`Error::Overflow`](crate::Error::Overflow).
    pub fn encode(&self, input: &str) -> Result<String> {
        encode_with(input, self.delimiter, &self.codec)
    }

    /// Decode `input` with this delimiter and codec.
    ///
    /// Everything before the last delimiter is copied literally.
    pub fn decode(&self, input: &str) -> Result<String> {
        decode_with(input, self.delimiter, &self.codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default() {
        let puny: Punycode = Punycode::default();
        assert_eq!(puny.delimiter(), '-');
        assert_eq!(puny.codec(), &Base36);
        assert_eq!(puny, Punycode::new());
    }

    #[test]
    fn test_with_delimiter() {
        let puny = Punycode::new().with_delimiter('_');
        assert_eq!(puny.encode("abc"), Ok("abc_".to_string()));
        assert_eq!(puny.decode("a-b_"), Ok("a-b".to_string()));
    }

    #[test]
    fn test_with_codec_keeps_delimiter() {
        let codec = (
            |d: u32| char::from_digit(d, 36).unwrap_or('?').to_ascii_uppercase(),
            |c: char| c.to_digit(36),
        );
        let puny = Punycode::new().with_delimiter('_').with_codec(codec);
        assert_eq!(puny.delimiter(), '_');
        assert_eq!(puny.encode("étoile"), Ok("toile_ZH0".to_string()));
        assert_eq!(puny.decode("toile_ZH0"), Ok("étoile".to_string()));
    }

    #[test]
    fn test_errors_surface() {
        let puny = Punycode::new();
        assert_eq!(puny.decode("abc-9"), Err(Error::MalformedInput));
    }

    #[test]
    fn test_shared_across_threads() {
        let puny = Punycode::new();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| puny.encode("Bücher")))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), Ok("Bcher-kva".to_string()));
            }
        });
    }
}
