//! Punycode decoding implementation.

use crate::bootstring::{adapt_bias, threshold, BASE, INITIAL_BIAS, INITIAL_N};
use crate::digit::DigitCodec;
use crate::error::{Error, Result};

/// Decode a Punycode string with the given delimiter and digit codec.
///
/// # Examples
///
/// ```
/// use punycode::{decode_with, Base36, Error};
///
/// assert_eq!(decode_with("toile_9ra", '_', &Base36).unwrap(), "étoile");
///
/// // The digit stream stops in the middle of a number
/// assert_eq!(decode_with("toile_9r", '_', &Base36), Err(Error::MalformedInput));
/// ```
pub fn decode_with<C>(input: &str, delimiter: char, codec: &C) -> Result<String>
where
    C: DigitCodec + ?Sized,
{
    decode_to_code_points(input, delimiter, codec).map(|chars| chars.into_iter().collect())
}

/// Decode a Punycode string into its sequence of code points.
///
/// Everything before the last delimiter is copied verbatim. The digit stream
/// after it describes the extended code points and the positions they are
/// inserted at.
pub fn decode_to_code_points<C>(input: &str, delimiter: char, codec: &C) -> Result<Vec<char>>
where
    C: DigitCodec + ?Sized,
{
    tracing::trace!(len = input.len(), %delimiter, "decoding");

    decode_impl(input, delimiter, codec).inspect_err(|e| {
        tracing::debug!(input, error = %e, "decoding failed");
    })
}

fn decode_impl<C>(input: &str, delimiter: char, codec: &C) -> Result<Vec<char>>
where
    C: DigitCodec + ?Sized,
{
    let (mut output, digits): (Vec<char>, &str) = match input.rfind(delimiter) {
        Some(pos) => (
            input[..pos].chars().collect(),
            &input[pos + delimiter.len_utf8()..],
        ),
        None => (Vec::new(), input),
    };

    let mut chars = digits.chars().peekable();
    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;

    while chars.peek().is_some() {
        let old_i = i;
        i = decode_varint(&mut chars, i, bias, codec)?;

        let len = u32::try_from(output.len() + 1).map_err(|_| Error::Overflow)?;
        bias = adapt_bias(i - old_i, len, old_i == 0);

        // n += i / len
        n = n.checked_add(i / len).ok_or(Error::Overflow)?;
        i %= len;

        let c = char::from_u32(n).ok_or(Error::InvalidCodePoint(n))?;
        output.insert(i as usize, c);
        i += 1;
    }

    Ok(output)
}

/// Decode one generalized variable-length integer, adding it to `i`.
///
/// A character the codec does not recognise counts as digit `BASE`. That is
/// never below the threshold, so it can't end a number: the stream has to
/// continue, and if it doesn't the next read fails with `MalformedInput`.
fn decode_varint<C>(
    chars: &mut std::iter::Peekable<std::str::Chars>,
    mut i: u32,
    bias: u32,
    codec: &C,
) -> Result<u32>
where
    C: DigitCodec + ?Sized,
{
    let mut w: u32 = 1;
    let mut k: u32 = BASE;

    loop {
        let c = chars.next().ok_or(Error::MalformedInput)?;
        let digit = codec.decode_digit(c).unwrap_or(BASE);

        // i += digit * w
        i = digit
            .checked_mul(w)
            .and_then(|dw| i.checked_add(dw))
            .ok_or(Error::Overflow)?;

        let t = threshold(k, bias);
        if digit < t {
            break;
        }

        // w *= (BASE - t)
        w = w.checked_mul(BASE - t).ok_or(Error::Overflow)?;
        k = k.checked_add(BASE).ok_or(Error::Overflow)?;
    }

    Ok(i)
}
