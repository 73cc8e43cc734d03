// ============================================================================
// Numeric Module
// Exact decimal arithmetic on digit strings
// ============================================================================
//
// This module provides:
// - validate / is_valid: numeral grammar check
// - normalize: canonical text for a numeral
// - compare_absolute: magnitude ordering of unsigned numerals
// - add: exact signed sum via carry/borrow passes
// - DecimalString: immutable canonical value with operator impls
// - NumericError: rejection reasons and conversion failures
//
// Design principles:
// - No floating-point intermediates
// - Every operation returns a new value, inputs are never mutated
// - Core operations are total; only parsing and conversions return Result

mod adder;
mod comparator;
mod decimal_string;
mod errors;
mod normalizer;
mod validator;

pub use adder::{add, add_aligned, align, subtract_aligned};
pub use comparator::compare_absolute;
pub use decimal_string::DecimalString;
pub use errors::{NumericError, NumericResult};
pub use normalizer::{normalize, split_parts, strip_sign};
pub use validator::{is_valid, validate};
