//! Aggregate helpers for summary cards: counting, summing and delta formatting.

/// Counts the items matching `predicate`.
pub fn count_where<I, F>(items: I, mut predicate: F) -> usize
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).count()
}

/// Sums the numeric field picked by `selector`. An empty input sums to `0.0`.
pub fn sum_field<I, F>(items: I, selector: F) -> f64
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    items.into_iter().map(selector).sum()
}

/// Formats the relative change from `previous` to `current` as a signed
/// percentage with one decimal place: `"+12.0%"`, `"-5.0%"`.
///
/// A zero (or non-finite) baseline reports `"+0.0%"` instead of dividing by
/// zero. Changes that round to zero are always reported as `"+0.0%"`. A change
/// too large to represent (a tiny nonzero baseline) saturates at `f64::MAX`
/// with its sign kept.
pub fn format_delta(current: f64, previous: f64) -> String {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return "+0.0%".to_string();
    }
    format_signed_percent((current - previous) / previous * 100.0)
}

/// Chart trend from the first to the last value: `'+'` only when `last`
/// is strictly greater, `'-'` otherwise (so a flat series reads `"-0.0%"`),
/// followed by `|last - first| / first * 100` to one decimal place.
///
/// A zero or non-finite `first` has no defined magnitude and reports `0.0`.
pub fn format_trend(first: f64, last: f64) -> String {
    let sign = if last > first { '+' } else { '-' };
    let magnitude = if first == 0.0 || !first.is_finite() || !last.is_finite() {
        0.0
    } else {
        ((last - first) / first * 100.0).abs()
    };
    format!("{sign}{:.1}%", saturate(magnitude))
}

fn saturate(value: f64) -> f64 {
    if value.is_infinite() {
        f64::MAX.copysign(value)
    } else {
        value
    }
}

/// Formats `percent` with an explicit sign and one decimal place.
pub(crate) fn format_signed_percent(percent: f64) -> String {
    if percent.is_nan() {
        return "+0.0%".to_string();
    }
    let rounded = saturate((percent * 10.0).round() / 10.0);
    if rounded == 0.0 {
        return "+0.0%".to_string();
    }
    let sign = if rounded > 0.0 { '+' } else { '-' };
    format!("{sign}{:.1}%", rounded.abs())
}

/// Parses the compact counters used on dashboard cards.
///
/// Accepts plain numbers with optional thousands separators (`"1,247"`),
/// `K`/`M`/`B` suffixes in either case (`"12.5K"`, `"50M"`, `"2B"`) and a
/// trailing `+` (`"800K+"`).
/// Returns `None` for anything else, including negative values.
pub fn parse_compact_count(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let s = s.strip_suffix('+').unwrap_or(s);
    let (digits, scale) = match s.chars().last()? {
        'K' | 'k' => (&s[..s.len() - 1], 1_000.0),
        'M' | 'm' => (&s[..s.len() - 1], 1_000_000.0),
        'B' | 'b' => (&s[..s.len() - 1], 1_000_000_000.0),
        _ => (s, 1.0),
    };
    let digits: String = digits.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let value: f64 = digits.parse().ok()?;
    Some(value * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_delta_examples() {
        assert_eq!(format_delta(112.0, 100.0), "+12.0%");
        assert_eq!(format_delta(95.0, 100.0), "-5.0%");
        assert_eq!(format_delta(100.0, 100.0), "+0.0%");
        assert_eq!(format_delta(1.0, 3.0), "-66.7%");
    }

    #[test]
    fn test_format_delta_zero_baseline() {
        assert_eq!(format_delta(0.0, 0.0), "+0.0%");
        assert_eq!(format_delta(42.0, 0.0), "+0.0%");
        assert_eq!(format_delta(f64::NAN, 10.0), "+0.0%");
    }

    #[test]
    fn test_format_delta_tiny_negative_rounds_to_positive_zero() {
        assert_eq!(format_delta(99.999, 100.0), "+0.0%");
    }

    #[test]
    fn test_format_delta_saturates_on_tiny_baseline() {
        let up = format_delta(1.0, 5e-324);
        assert_ne!(up, "+0.0%");
        assert!(up.starts_with("+17976931348623157"), "{up}");
        assert!(format_delta(-1.0, 5e-324).starts_with("-17976931348623157"));
    }

    #[test]
    fn test_format_trend_sign_rule() {
        assert_eq!(format_trend(50.0, 56.0), "+12.0%");
        assert_eq!(format_trend(100.0, 95.0), "-5.0%");
        assert_eq!(format_trend(50.0, 50.0), "-0.0%");
        assert_eq!(format_trend(0.0, 40.0), "+0.0%");
        assert_eq!(format_trend(0.0, 0.0), "-0.0%");
    }

    #[test]
    fn test_count_where_and_sum_field() {
        let views = [12_500.0, 0.0, 8_200.0, 15_100.0];
        assert_eq!(count_where(views.iter(), |v| **v > 0.0), 3);
        assert_eq!(sum_field(views.iter(), |v| *v), 35_800.0);

        let empty: [f64; 0] = [];
        assert_eq!(count_where(empty.iter(), |_| true), 0);
        assert_eq!(sum_field(empty.iter(), |v| *v), 0.0);
    }

    #[test]
    fn test_parse_compact_count() {
        assert_eq!(parse_compact_count("12.5K"), Some(12_500.0));
        assert_eq!(parse_compact_count("0"), Some(0.0));
        assert_eq!(parse_compact_count("1,247"), Some(1_247.0));
        assert_eq!(parse_compact_count("50M+"), Some(50_000_000.0));
        assert_eq!(parse_compact_count(" 800K+ "), Some(800_000.0));
        assert_eq!(parse_compact_count("2B"), Some(2_000_000_000.0));
        assert_eq!(parse_compact_count("3m"), Some(3_000_000.0));

        assert_eq!(parse_compact_count(""), None);
        assert_eq!(parse_compact_count("K"), None);
        assert_eq!(parse_compact_count("-3"), None);
        assert_eq!(parse_compact_count("98.5%"), None);
    }
}
