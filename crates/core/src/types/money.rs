//! Currency display formatting.

/// Format an amount as a dollar string with exactly two decimal places.
///
/// Uses standard fixed-point rounding and no locale handling.
///
/// ```
/// use cartlab_core::format_currency;
///
/// assert_eq!(format_currency(3.1), "$3.10");
/// assert_eq!(format_currency(0.0), "$0.00");
/// ```
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}
