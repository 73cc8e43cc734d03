// ============================================================================
// Normalizer
// Canonical form for signed decimal digit strings
// ============================================================================

/// Split an optional leading sign off a numeral.
///
/// Returns `(is_negative, magnitude)`. A leading `+` is dropped.
#[inline]
pub fn strip_sign(numeral: &str) -> (bool, &str) {
    if let Some(rest) = numeral.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = numeral.strip_prefix('+') {
        (false, rest)
    } else {
        (false, numeral)
    }
}

/// Split an unsigned magnitude at its first `.` into integer and fractional parts.
///
/// The fractional part is empty when there is no point.
#[inline]
pub fn split_parts(magnitude: &str) -> (&str, &str) {
    match magnitude.find('.') {
        Some(pos) => (&magnitude[..pos], &magnitude[pos + 1..]),
        None => (magnitude, ""),
    }
}

/// Canonicalize the unsigned part of a numeral.
///
/// Leading integer zeros and trailing fractional zeros are removed; an empty
/// integer part becomes `"0"`, an empty fraction drops the point.
pub(crate) fn normalize_magnitude(magnitude: &str) -> String {
    let (int_part, frac_part) = split_parts(magnitude);

    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = frac_part.trim_end_matches('0');

    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        let mut out = String::with_capacity(int_part.len() + 1 + frac_part.len());
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
        out
    }
}

/// Canonicalize a signed decimal numeral.
///
/// Total over any input; `""`, `"+"` and `"-"` are read as zero. The result
/// never reads `"-0"`, never starts or ends with a bare `.`, and
/// `normalize(&normalize(x)) == normalize(x)`.
///
/// # Examples
/// ```
/// use decimal_strings::numeric::normalize;
///
/// assert_eq!(normalize("007.500"), "7.5");
/// assert_eq!(normalize("-0.000"), "0");
/// assert_eq!(normalize("+.5"), "0.5");
/// ```
pub fn normalize(numeral: &str) -> String {
    let (negative, magnitude) = strip_sign(numeral);
    let canonical = normalize_magnitude(magnitude);

    if negative && canonical != "0" {
        format!("-{}", canonical)
    } else {
        canonical
    }
}
