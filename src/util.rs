// Utility helpers for parsing cells and formatting numbers.
//
// Parsing is forgiving about CSV export noise; formatting is only ever
// called from the page builders in `reports`, never from the core.
use num_format::{Locale, ToFormattedString};

/// Parse a string-like value into `f64` while being forgiving about
/// formatting issues that are common in CSV exports.
///
/// - Trims whitespace.
/// - Accepts plain and scientific notation (`7.5E+12`) as-is.
/// - Otherwise rejects values that contain alphabetic characters and strips
///   thousands separators like `","` before parsing.
/// - Returns `None` for non-finite results and anything that cannot be
///   safely parsed.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    let v = match s.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            if s.chars().any(|c| c.is_ascii_alphabetic()) {
                return None;
            }
            s.replace(',', "").parse::<f64>().ok()?
        }
    };
    v.is_finite().then_some(v)
}

/// Parse a non-negative count. Spreadsheet exports sometimes write counts
/// as `12.0`, so integral floats are accepted too, as long as they fit in
/// a `u64`.
pub fn parse_count_safe(s: Option<&str>) -> Option<u64> {
    let raw = s?.trim();
    if let Ok(n) = raw.replace(',', "").parse::<u64>() {
        return Some(n);
    }
    let v = parse_f64_safe(Some(raw))?;
    // `u64::MAX as f64` rounds up to 2^64, which is already out of range.
    if v < 0.0 || v.fract() != 0.0 || v >= u64::MAX as f64 {
        return None;
    }
    Some(v as u64)
}

/// Arithmetic mean over the finite values only. Returns NaN when nothing
/// finite is left, so callers can tell "no data" from zero.
pub fn mean_finite(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        f64::NAN
    } else {
        sum / n as f64
    }
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals with `,` thousands separators, e.g. `1,234,567.89`.
    if !n.is_finite() {
        return "-".to_string();
    }
    let s = format!("{:.*}", decimals, n.abs());
    // Only signed if something non-zero survives the rounding.
    let neg = n.is_sign_negative() && s.chars().any(|c| matches!(c, '1'..='9'));
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: u64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        res.push('.');
        res.push_str(frac);
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

/// Ratio in `[0, 1]` rendered as a percentage, e.g. `0.1234` -> `12.34%`.
pub fn format_percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "-".to_string();
    }
    format!("{:.2}%", ratio * 100.0)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

/// Integer with Indonesian grouping (`1.234.567`), used for student counts.
pub fn format_int_id<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_with_separators() {
        assert_eq!(parse_f64_safe(Some(" 1,234.5 ")), Some(1234.5));
        assert_eq!(parse_f64_safe(Some("")), None);
        assert_eq!(parse_f64_safe(Some("n/a")), None);
        assert_eq!(parse_f64_safe(None), None);
    }

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(parse_f64_safe(Some("1.5e9")), Some(1.5e9));
        assert_eq!(parse_f64_safe(Some(" 7.5E+12 ")), Some(7.5e12));
        assert_eq!(parse_f64_safe(Some("NaN")), None);
        assert_eq!(parse_f64_safe(Some("inf")), None);
        assert_eq!(parse_f64_safe(Some("1e400")), None);
    }

    #[test]
    fn counts_accept_integral_floats_only() {
        assert_eq!(parse_count_safe(Some("12")), Some(12));
        assert_eq!(parse_count_safe(Some("12.0")), Some(12));
        assert_eq!(parse_count_safe(Some("12.5")), None);
        assert_eq!(parse_count_safe(Some("-3")), None);
        assert_eq!(parse_count_safe(Some("1,200")), Some(1200));
        assert_eq!(parse_count_safe(Some("1.2e3")), Some(1200));
    }

    #[test]
    fn counts_outside_u64_are_rejected() {
        assert_eq!(
            parse_count_safe(Some("18446744073709551615")),
            Some(u64::MAX)
        );
        assert_eq!(parse_count_safe(Some("18446744073709551616")), None);
        assert_eq!(parse_count_safe(Some("1e20")), None);
    }

    #[test]
    fn mean_skips_non_finite() {
        assert_eq!(mean_finite([1.0, f64::NAN, 3.0]), 2.0);
        assert!(mean_finite([f64::NAN]).is_nan());
        assert!(mean_finite(Vec::new()).is_nan());
    }

    #[test]
    fn formats() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-0.5, 2), "-0.50");
        assert_eq!(format_number(-0.001, 2), "0.00");
        assert_eq!(format_number(-0.004, 0), "0");
        assert_eq!(format_number(f64::NAN, 2), "-");
        assert_eq!(format_percent(0.1), "10.00%");
        assert_eq!(format_int_id(1234567u64), "1.234.567");
        assert_eq!(format_int(9855u64), "9,855");
    }
}
