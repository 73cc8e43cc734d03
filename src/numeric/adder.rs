// ============================================================================
// Adder
// Exact signed addition over decimal digit strings
// ============================================================================
//
// Pipeline for add(a, b):
// 1. Split sign, normalize each magnitude (zero is always positive)
// 2. Align integer and fractional widths with zero padding
// 3. Same sign: carry pass. Opposite signs: borrow pass, larger minus smaller
// 4. Normalize the result and reattach the sign

use super::comparator::compare_absolute;
use super::normalizer::{normalize_magnitude, split_parts, strip_sign};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Digits emitted least-significant first during a carry or borrow pass.
type DigitBuffer = SmallVec<[u8; 64]>;

/// Exact sum of two signed decimal numerals, in canonical form.
///
/// Both inputs are expected to pass [`is_valid`](super::is_valid). The
/// result never reads `"-0"`.
///
/// # Examples
/// ```
/// use decimal_strings::numeric::add;
///
/// assert_eq!(add("1.5", "2.25"), "3.75");
/// assert_eq!(add("-5", "3"), "-2");
/// assert_eq!(add("999", "1"), "1000");
/// ```
pub fn add(a: &str, b: &str) -> String {
    let (neg_a, mag_a) = signed_magnitude(a);
    let (neg_b, mag_b) = signed_magnitude(b);
    let (aligned_a, aligned_b) = align(&mag_a, &mag_b);

    let (negative, raw) = if neg_a == neg_b {
        tracing::trace!(a, b, "same sign, adding magnitudes");
        (neg_a, add_aligned(&aligned_a, &aligned_b))
    } else {
        match compare_absolute(&mag_a, &mag_b) {
            Ordering::Equal => {
                tracing::trace!(a, b, "opposite signs cancel");
                return "0".to_string();
            },
            Ordering::Greater => {
                tracing::trace!(a, b, "opposite signs, left magnitude larger");
                (neg_a, subtract_aligned(&aligned_a, &aligned_b))
            },
            Ordering::Less => {
                tracing::trace!(a, b, "opposite signs, right magnitude larger");
                (neg_b, subtract_aligned(&aligned_b, &aligned_a))
            },
        }
    };

    let magnitude = normalize_magnitude(&raw);
    if negative && magnitude != "0" {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Sign and normalized magnitude of an operand; zero is never negative.
fn signed_magnitude(numeral: &str) -> (bool, String) {
    let (negative, magnitude) = strip_sign(numeral);
    let magnitude = normalize_magnitude(magnitude);
    (negative && magnitude != "0", magnitude)
}

/// Pad two unsigned magnitudes to a common layout.
///
/// Integer parts get leading zeros, fractional parts trailing zeros. The
/// point is kept only when the shared fractional width is non-zero, so both
/// outputs always have the same length and the same point position.
pub fn align(a: &str, b: &str) -> (String, String) {
    let (int_a, frac_a) = split_parts(a);
    let (int_b, frac_b) = split_parts(b);
    let int_width = int_a.len().max(int_b.len());
    let frac_width = frac_a.len().max(frac_b.len());

    let pad = |int: &str, frac: &str| {
        let mut out = String::with_capacity(int_width + 1 + frac_width);
        out.extend(std::iter::repeat('0').take(int_width - int.len()));
        out.push_str(int);
        if frac_width > 0 {
            out.push('.');
            out.push_str(frac);
            out.extend(std::iter::repeat('0').take(frac_width - frac.len()));
        }
        out
    };

    (pad(int_a, frac_a), pad(int_b, frac_b))
}

#[inline]
fn digit_value(byte: u8) -> u8 {
    if byte.is_ascii_digit() {
        byte - b'0'
    } else {
        0
    }
}

/// Collect a least-significant-first buffer into a most-significant-first string.
fn reversed(buffer: DigitBuffer) -> String {
    buffer.iter().rev().map(|&b| b as char).collect()
}

/// Digit-wise sum of two aligned magnitudes.
///
/// A final carry becomes a new leading digit. The output is not normalized.
pub fn add_aligned(a: &str, b: &str) -> String {
    debug_assert_eq!(a.len(), b.len(), "operands must be aligned");
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let width = a.len().max(b.len());

    let mut out = DigitBuffer::new();
    let mut carry = 0u8;

    for i in (0..width).rev() {
        let (ca, cb) = (a.get(i).copied(), b.get(i).copied());
        if ca == Some(b'.') || cb == Some(b'.') {
            out.push(b'.');
            continue;
        }
        let sum = ca.map_or(0, digit_value) + cb.map_or(0, digit_value) + carry;
        out.push(b'0' + sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(b'0' + carry);
    }

    reversed(out)
}

/// Digit-wise difference `larger - smaller` of two aligned magnitudes.
///
/// `larger` must not be smaller in magnitude than `smaller`. The output may
/// carry leading zeros; callers normalize it.
pub fn subtract_aligned(larger: &str, smaller: &str) -> String {
    debug_assert_eq!(larger.len(), smaller.len(), "operands must be aligned");
    let (a, b) = (larger.as_bytes(), smaller.as_bytes());

    let mut out = DigitBuffer::new();
    let mut borrow = 0i8;

    for i in (0..a.len()).rev() {
        if a[i] == b'.' {
            out.push(b'.');
            continue;
        }
        let subtrahend = b.get(i).copied().map_or(0, digit_value) as i8;
        let mut diff = digit_value(a[i]) as i8 - subtrahend - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(b'0' + diff as u8);
    }

    reversed(out)
}
