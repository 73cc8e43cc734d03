// ============================================================================
// Decimal String
// Immutable canonical numeral with exact arithmetic
// ============================================================================

use super::adder::add;
use super::comparator::compare_absolute;
use super::errors::{NumericError, NumericResult};
use super::normalizer::{normalize, split_parts, strip_sign};
use super::validator::validate;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validated decimal numeral held in canonical form.
///
/// Values are never mutated in place; every operation yields a new value.
/// Two values are equal exactly when they denote the same number, since the
/// canonical text is unique per value.
///
/// # Example
/// ```
/// use decimal_strings::numeric::DecimalString;
///
/// let a: DecimalString = "007.500".parse().unwrap();
/// let b: DecimalString = "0.5".parse().unwrap();
/// assert_eq!((a + b).as_str(), "8");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DecimalString(String);

impl DecimalString {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value zero.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Create from an integer value.
    pub fn from_integer(value: i64) -> Self {
        Self(value.to_string())
    }

    /// Wrap text that is already canonical.
    fn from_canonical(text: String) -> Self {
        debug_assert_eq!(normalize(&text), text);
        Self(text)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The canonical text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for the canonical zero `"0"`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// True for values below zero; zero is never negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// True for values above zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Unsigned canonical text.
    #[inline]
    fn magnitude(&self) -> &str {
        strip_sign(&self.0).1
    }

    /// Digits before the point, without sign.
    pub fn integer_part(&self) -> &str {
        split_parts(self.magnitude()).0
    }

    /// Digits after the point; empty for integers.
    pub fn fractional_part(&self) -> &str {
        split_parts(self.magnitude()).1
    }

    /// Number of fractional digits.
    pub fn scale(&self) -> usize {
        self.fractional_part().len()
    }

    pub fn abs(&self) -> Self {
        Self(self.magnitude().to_string())
    }

    /// `-1`, `0` or `1` by sign.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact sum.
    pub fn add_exact(&self, rhs: &Self) -> Self {
        Self::from_canonical(add(&self.0, &rhs.0))
    }

    fn negated(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else if let Some(rest) = self.0.strip_prefix('-') {
            Self(rest.to_string())
        } else {
            Self(format!("-{}", self.0))
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

impl FromStr for DecimalString {
    type Err = NumericError;

    /// Validate then canonicalize.
    ///
    /// # Examples
    /// - "1.50" -> 1.5
    /// - ".5" -> 0.5
    /// - "-0.0" -> 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)?;
        Ok(Self(normalize(s)))
    }
}

impl TryFrom<&str> for DecimalString {
    type Error = NumericError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for DecimalString {
    type Error = NumericError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DecimalString> for String {
    fn from(value: DecimalString) -> Self {
        value.0
    }
}

impl From<i64> for DecimalString {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl AsRef<str> for DecimalString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalString {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for DecimalString {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalString {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.signum(), other.signum()) {
            (a, b) if a != b => a.cmp(&b),
            (-1, _) => compare_absolute(other.magnitude(), self.magnitude()),
            _ => compare_absolute(self.magnitude(), other.magnitude()),
        }
    }
}

impl Neg for DecimalString {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for &DecimalString {
    type Output = DecimalString;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Add for DecimalString {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_exact(&rhs)
    }
}

impl<'a> Add<&'a DecimalString> for &'a DecimalString {
    type Output = DecimalString;

    fn add(self, rhs: &'a DecimalString) -> Self::Output {
        self.add_exact(rhs)
    }
}

impl AddAssign<&DecimalString> for DecimalString {
    fn add_assign(&mut self, rhs: &DecimalString) {
        *self = self.add_exact(rhs);
    }
}

impl std::iter::Sum for DecimalString {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc.add_exact(&x))
    }
}

impl<'a> std::iter::Sum<&'a DecimalString> for DecimalString {
    fn sum<I: Iterator<Item = &'a DecimalString>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc.add_exact(x))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalString({})", self.0)
    }
}

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

// ============================================================================
// Conversion to and from rust_decimal (for API boundaries)
// ============================================================================

impl DecimalString {
    /// Convert from rust_decimal::Decimal.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self(normalize(&d.normalize().to_string()))
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `Overflow` if the integer part exceeds the 96-bit mantissa
    /// - `PrecisionLoss` if the value has more fractional digits than
    ///   `Decimal` can hold at this magnitude
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        use rust_decimal::Decimal;

        let int_only = if self.is_negative() {
            format!("-{}", self.integer_part())
        } else {
            self.integer_part().to_string()
        };
        Decimal::from_str_exact(&int_only).map_err(|_| NumericError::Overflow)?;

        let d = Decimal::from_str_exact(&self.0).map_err(|_| NumericError::PrecisionLoss)?;
        if Self::from_decimal(d) != *self {
            return Err(NumericError::PrecisionLoss);
        }
        Ok(d)
    }

    /// Nearest `f64` to this value.
    ///
    /// Lossy: binary floating point cannot represent most decimal fractions.
    /// Never feed the result back into exact arithmetic.
    pub fn to_f64_lossy(&self) -> f64 {
        // Canonical text is always accepted by the float grammar
        self.0.parse().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> DecimalString {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_canonicalizes() {
        assert_eq!(d("007.500").as_str(), "7.5");
        assert_eq!(d(".5").as_str(), "0.5");
        assert_eq!(d("-0.0").as_str(), "0");
        assert_eq!(d("+12").as_str(), "12");
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!("5.".parse::<DecimalString>(), Err(NumericError::TrailingDecimalPoint));
        assert_eq!("".parse::<DecimalString>(), Err(NumericError::Empty));
        assert!(DecimalString::try_from("1.2.3").is_err());
    }

    #[test]
    fn test_accessors() {
        let x = d("-123.4500");
        assert!(x.is_negative());
        assert_eq!(x.integer_part(), "123");
        assert_eq!(x.fractional_part(), "45");
        assert_eq!(x.scale(), 2);
        assert_eq!(x.abs().as_str(), "123.45");
        assert_eq!(x.signum(), -1);
        assert_eq!(DecimalString::zero().signum(), 0);
        assert!(d("0.001").is_positive());
    }

    #[test]
    fn test_arithmetic_operators() {
        assert_eq!(d("1.5") + d("2.25"), d("3.75"));
        assert_eq!(d("1") + -d("1.001"), d("-0.001"));
        assert_eq!(&d("-5") + &d("3"), d("-2"));
        assert_eq!(-d("4.2"), d("-4.2"));
        assert_eq!(-DecimalString::zero(), DecimalString::zero());

        let mut acc = DecimalString::zero();
        acc += &d("0.1");
        acc += &d("0.2");
        assert_eq!(acc, d("0.3"));
        acc += &-d("0.3");
        assert!(acc.is_zero());
    }

    #[test]
    fn test_sum_iterator() {
        let values: Vec<DecimalString> = ["0.1", "0.1", "0.1", "-0.3"].iter().map(|s| d(s)).collect();
        let total: DecimalString = values.iter().sum();
        assert_eq!(total, DecimalString::zero());
    }

    #[test]
    fn test_ordering() {
        let mut values: Vec<DecimalString> =
            ["10", "-2.5", "0", "9.99", "-10", "0.001"].iter().map(|s| d(s)).collect();
        values.sort();
        let sorted: Vec<&str> = values.iter().map(|v| v.as_str()).collect();
        assert_eq!(sorted, ["-10", "-2.5", "0", "0.001", "9.99", "10"]);
        assert_eq!(d("1.50"), d("1.5"));
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(d("-1.50").to_string(), "-1.5");
        assert_eq!(format!("{:?}", d("2")), "DecimalString(2)");
        assert_eq!(format!("{:>5}", d("2.5")), "  2.5");
    }

    #[test]
    fn test_from_integer() {
        assert_eq!(DecimalString::from_integer(-42).as_str(), "-42");
        assert_eq!(DecimalString::from(0).as_str(), "0");
    }

    #[test]
    fn test_decimal_conversions() {
        use rust_decimal::Decimal;

        let x = d("-123.456");
        assert_eq!(x.to_decimal().unwrap(), Decimal::new(-123456, 3));
        assert_eq!(DecimalString::from_decimal(Decimal::new(12500, 2)), d("125"));

        let huge = d("123456789012345678901234567890123");
        assert_eq!(huge.to_decimal(), Err(NumericError::Overflow));

        let fine = d("1.0000000000000000000000000000001");
        assert_eq!(fine.to_decimal(), Err(NumericError::PrecisionLoss));
    }

    #[test]
    fn test_f64_is_lossy() {
        assert_eq!(d("0.5").to_f64_lossy(), 0.5);
        let exact = d("0.1") + d("0.2");
        assert_eq!(exact, d("0.3"));
        assert_ne!(d("0.1").to_f64_lossy() + d("0.2").to_f64_lossy(), 0.3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json_string() {
        let x: DecimalString = serde_json::from_str(r#""007.50""#).unwrap();
        assert_eq!(x, d("7.5"));
        assert_eq!(serde_json::to_string(&x).unwrap(), r#""7.5""#);

        assert!(serde_json::from_str::<DecimalString>(r#""5.""#).is_err());
        assert!(serde_json::from_str::<DecimalString>("7.5").is_err());

        let values: Vec<DecimalString> = serde_json::from_str(r#"["-0.0", "+.5"]"#).unwrap();
        assert_eq!(values, vec![DecimalString::zero(), d("0.5")]);
    }
}
