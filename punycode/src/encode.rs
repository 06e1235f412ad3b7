//! Punycode encoding implementation.

use crate::bootstring::{adapt_bias, threshold, BASE, INITIAL_BIAS, INITIAL_N};
use crate::digit::DigitCodec;
use crate::error::{Error, Result};

/// Encode a string with the given delimiter and digit codec.
///
/// # Examples
///
/// ```
/// use punycode::{encode_with, Base36};
///
/// assert_eq!(encode_with("étoile", '_', &Base36).unwrap(), "toile_9ra");
/// ```
pub fn encode_with<C>(input: &str, delimiter: char, codec: &C) -> Result<String>
where
    C: DigitCodec + ?Sized,
{
    let code_points: Vec<char> = input.chars().collect();
    encode_code_points(&code_points, delimiter, codec)
}

/// Encode a sequence of code points.
///
/// Basic (ASCII) code points are copied to the output in order, followed by
/// the delimiter if there were any, followed by the digit stream describing
/// where the extended code points go.
pub fn encode_code_points<C>(input: &[char], delimiter: char, codec: &C) -> Result<String>
where
    C: DigitCodec + ?Sized,
{
    tracing::trace!(code_points = input.len(), %delimiter, "encoding");

    encode_impl(input, delimiter, codec).inspect_err(|e| {
        tracing::debug!(code_points = input.len(), error = %e, "encoding failed");
    })
}

fn encode_impl<C>(input: &[char], delimiter: char, codec: &C) -> Result<String>
where
    C: DigitCodec + ?Sized,
{
    let total = u32::try_from(input.len()).map_err(|_| Error::Overflow)?;

    let mut output: String = input.iter().filter(|c| c.is_ascii()).collect();

    // Every copied char is one byte, so the byte length is the count.
    let basic = output.len() as u32;
    if basic > 0 {
        output.push(delimiter);
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic;

    while handled < total {
        // Smallest code point not yet handled
        let Some(m) = input.iter().map(|&c| c as u32).filter(|&p| p >= n).min() else {
            break;
        };

        // delta += (m - n) * (handled + 1)
        let skipped = (m - n)
            .checked_mul(handled + 1)
            .ok_or(Error::Overflow)?;
        delta = delta.checked_add(skipped).ok_or(Error::Overflow)?;
        n = m;

        for &c in input {
            let p = c as u32;

            if p < n {
                delta = delta.checked_add(1).ok_or(Error::Overflow)?;
            }

            if p == n {
                encode_varint(&mut output, delta, bias, codec);
                bias = adapt_bias(delta, handled + 1, handled == basic);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(Error::Overflow)?;
        n = n.checked_add(1).ok_or(Error::Overflow)?;
    }

    Ok(output)
}

/// Encode a value as a generalized variable-length integer.
pub(crate) fn encode_varint<C>(output: &mut String, mut value: u32, bias: u32, codec: &C)
where
    C: DigitCodec + ?Sized,
{
    let mut k: u32 = BASE;

    loop {
        let t = threshold(k, bias);

        if value < t {
            output.push(codec.encode_digit(value));
            break;
        }

        let digit = t + (value - t) % (BASE - t);
        output.push(codec.encode_digit(digit));

        value = (value - t) / (BASE - t);
        k += BASE;
    }
}
