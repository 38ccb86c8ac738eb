//! Numeric normalization utilities.

/// Removes every character that is not an ASCII digit or `.`.
///
/// Currency symbols, whitespace and thousands separators disappear, and so
/// does a comma decimal separator: `"12,50"` becomes `"1250"`.
pub fn clean_numeric(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect()
}

/// Parses a value after [`clean_numeric`], returning None when nothing
/// parseable remains (empty, a lone `.`, several decimal points).
pub fn parse_tolerant_f64(raw: &str) -> Option<f64> {
    let cleaned = clean_numeric(raw);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Parses a quantity, keeping its sign.
///
/// A plain number such as `-4` or `2.5` is taken as written so returns stay
/// negative; anything else falls back to [`parse_tolerant_f64`].
pub fn parse_quantity(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => parse_tolerant_f64(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_and_whitespace() {
        assert_eq!(clean_numeric(" $12.50 "), "12.50");
        assert_eq!(parse_tolerant_f64("$12.50"), Some(12.5));
        assert_eq!(parse_tolerant_f64("€ 3"), Some(3.0));
    }

    #[test]
    fn comma_decimal_is_stripped_not_normalized() {
        assert_eq!(clean_numeric("12,50"), "1250");
        assert_eq!(parse_tolerant_f64("12,50"), Some(1250.0));
    }

    #[test]
    fn rejects_values_with_nothing_numeric() {
        assert_eq!(parse_tolerant_f64(""), None);
        assert_eq!(parse_tolerant_f64("n/a"), None);
        assert_eq!(parse_tolerant_f64("."), None);
    }

    #[test]
    fn rejects_multiple_decimal_points() {
        assert_eq!(parse_tolerant_f64("1.200,50"), Some(1.2005));
        assert_eq!(parse_tolerant_f64("1.200.50"), None);
    }

    #[test]
    fn negative_sign_is_dropped() {
        assert_eq!(parse_tolerant_f64("-4"), Some(4.0));
    }

    #[test]
    fn quantity_keeps_its_sign() {
        assert_eq!(parse_quantity("-4"), Some(-4.0));
        assert_eq!(parse_quantity(" -2.5 "), Some(-2.5));
        assert_eq!(parse_quantity("7"), Some(7.0));
    }

    #[test]
    fn quantity_falls_back_to_tolerant_parse() {
        assert_eq!(parse_quantity("12 units"), Some(12.0));
        assert_eq!(parse_quantity("inf"), None);
        assert_eq!(parse_quantity("many"), None);
        assert_eq!(parse_quantity(""), None);
    }
}
