// ============================================================================
// Validator
// Classifies raw tokens as signed decimal numerals
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Check a token against the numeral grammar, reporting the first violation.
///
/// Grammar: an optional `+` or `-`, then ASCII digits with at most one `.`,
/// at least one digit overall, and no `.` as the last character. A point
/// with no digits before it is accepted, so `".5"` and `"-.5"` are valid
/// while `"5."` is not.
///
/// # Errors
/// - `Empty` for `""`
/// - `SignOnly` for `"+"` / `"-"`
/// - `InvalidCharacter` for anything outside `[0-9.]` after the sign
/// - `MultipleDecimalPoints` for a second `.`
/// - `NoDigits` when no digit was seen (e.g. `"."`, `"-."`)
/// - `TrailingDecimalPoint` when the token ends in `.`
pub fn validate(token: &str) -> NumericResult<()> {
    if token.is_empty() {
        return Err(NumericError::Empty);
    }

    let body_start = match token.as_bytes()[0] {
        b'+' | b'-' => {
            if token.len() == 1 {
                return Err(NumericError::SignOnly);
            }
            1
        },
        _ => 0,
    };

    let mut has_point = false;
    let mut has_digit = false;
    let mut awaiting_fraction_digit = false;

    for (offset, ch) in token[body_start..].char_indices() {
        match ch {
            '0'..='9' => {
                has_digit = true;
                awaiting_fraction_digit = false;
            },
            '.' => {
                if has_point {
                    return Err(NumericError::MultipleDecimalPoints);
                }
                has_point = true;
                awaiting_fraction_digit = true;
            },
            _ => {
                return Err(NumericError::InvalidCharacter {
                    ch,
                    position: body_start + offset,
                })
            },
        }
    }

    if !has_digit {
        return Err(NumericError::NoDigits);
    }
    if awaiting_fraction_digit {
        return Err(NumericError::TrailingDecimalPoint);
    }

    Ok(())
}

/// Returns `true` if `token` is a well-formed signed decimal numeral.
#[inline]
pub fn is_valid(token: &str) -> bool {
    validate(token).is_ok()
}
