//! Bootstring parameters and the helpers shared by the encoder and decoder.
//!
//! These are the Punycode parameter values from RFC 3492 §5. Both pipelines
//! must derive the same bias sequence from the same deltas, so the adapter and
//! threshold live here and nowhere else.

/// Number of distinct digit values.
pub(crate) const BASE: u32 = 36;

/// Minimum threshold value.
pub(crate) const T_MIN: u32 = 1;

/// Maximum threshold value.
pub(crate) const T_MAX: u32 = 26;

/// Skew factor for bias adaptation.
pub(crate) const SKEW: u32 = 38;

/// Damping factor for the first adaptation.
pub(crate) const DAMP: u32 = 700;

/// Initial bias value.
pub(crate) const INITIAL_BIAS: u32 = 72;

/// First non-basic code point.
pub(crate) const INITIAL_N: u32 = 0x80;

/// Delimiter used when the caller does not pick one.
pub const DEFAULT_DELIMITER: char = '-';

/// Adapt bias after encoding/decoding a delta.
///
/// RFC 3492 §6.1:
/// - delta: the delta value just processed
/// - num_points: number of code points handled so far, including this one
/// - first_time: whether this is the first adaptation
pub(crate) fn adapt_bias(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    // Scale delta down
    delta = if first_time { delta / DAMP } else { delta / 2 };

    // Compensate for the length of the string
    delta += delta / num_points;

    let mut k = 0u32;
    let base_minus_tmin = BASE - T_MIN;
    let threshold = (base_minus_tmin * T_MAX) / 2;

    while delta > threshold {
        delta /= base_minus_tmin;
        k += BASE;
    }

    k + ((base_minus_tmin + 1) * delta) / (delta + SKEW)
}

/// Calculate the digit threshold for weight position `k` and the current bias.
pub(crate) fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}
