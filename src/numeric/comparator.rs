// ============================================================================
// Magnitude Comparator
// Ordering of non-negative decimal digit strings
// ============================================================================

use super::normalizer::split_parts;
use std::cmp::Ordering;

/// Compare two non-negative numerals by magnitude.
///
/// Integer parts are ordered by length first, then digit by digit, so the
/// caller must pass them either without leading zeros or padded to the same
/// width. On equal integer parts the fractional parts are compared as if
/// right-padded with `'0'` to a common length.
///
/// # Examples
/// ```
/// use decimal_strings::numeric::compare_absolute;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_absolute("10", "9.99"), Ordering::Greater);
/// assert_eq!(compare_absolute("1.5", "1.50"), Ordering::Equal);
/// ```
pub fn compare_absolute(a: &str, b: &str) -> Ordering {
    let (int_a, frac_a) = split_parts(a);
    let (int_b, frac_b) = split_parts(b);

    int_a
        .len()
        .cmp(&int_b.len())
        .then_with(|| int_a.cmp(int_b))
        .then_with(|| compare_fractions(frac_a, frac_b))
}

/// Lexicographic comparison with implicit trailing zeros.
fn compare_fractions(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let width = a.len().max(b.len());

    (0..width)
        .map(|i| {
            let da = a.get(i).copied().unwrap_or(b'0');
            let db = b.get(i).copied().unwrap_or(b'0');
            da.cmp(&db)
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_length_dominates() {
        assert_eq!(compare_absolute("100", "99.999"), Ordering::Greater);
        assert_eq!(compare_absolute("9", "10"), Ordering::Less);
    }

    #[test]
    fn test_equal_length_integers() {
        assert_eq!(compare_absolute("123", "124"), Ordering::Less);
        assert_eq!(compare_absolute("500", "499"), Ordering::Greater);
        assert_eq!(compare_absolute("42", "42"), Ordering::Equal);
    }

    #[test]
    fn test_fraction_padding() {
        assert_eq!(compare_absolute("1.5", "1.50"), Ordering::Equal);
        assert_eq!(compare_absolute("1.5", "1.49"), Ordering::Greater);
        assert_eq!(compare_absolute("0.1", "0.10001"), Ordering::Less);
        assert_eq!(compare_absolute("3", "3.000"), Ordering::Equal);
        assert_eq!(compare_absolute("3", "3.001"), Ordering::Less);
    }

    #[test]
    fn test_zero_padded_aligned_operands() {
        // Aligned operands share a width, so leading zeros are harmless
        assert_eq!(compare_absolute("007.50", "123.45"), Ordering::Less);
        assert_eq!(compare_absolute("000.10", "000.01"), Ordering::Greater);
    }

    #[test]
    fn test_antisymmetry() {
        let pairs = [("1", "2"), ("0.5", "0.25"), ("10", "10.0"), ("99.9", "100")];
        for (a, b) in pairs {
            assert_eq!(compare_absolute(a, b), compare_absolute(b, a).reverse());
        }
    }
}
