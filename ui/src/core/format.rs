//! Formatting helpers for presenting payloads and chart shares.

/// Whole kilograms with thousands separators, e.g. `9,600`.
pub fn format_kg(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Share of `part` in `total` with one decimal, e.g. `42.9%`.
pub fn format_share(part: u32, total: u32) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", f64::from(part) * 100.0 / f64::from(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilograms_are_grouped_by_thousands() {
        assert_eq!(format_kg(0.0), "0");
        assert_eq!(format_kg(525.0), "525");
        assert_eq!(format_kg(3000.0), "3,000");
        assert_eq!(format_kg(15_600.4), "15,600");
        assert_eq!(format_kg(-2500.0), "-2,500");
    }

    #[test]
    fn shares_round_to_one_decimal() {
        assert_eq!(format_share(3, 7), "42.9%");
        assert_eq!(format_share(4, 4), "100.0%");
        assert_eq!(format_share(1, 0), "0.0%");
    }
}
