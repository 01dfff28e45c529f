//! 數值顯示格式

use plan_calc::rounding::round_percent;
use rust_decimal::{Decimal, RoundingStrategy};

/// 印尼盾格式：四捨五入至整數並加千分位，例如 `Rp 1,190,000`、`Rp -2,810,000`
///
/// 負號取自修約前的金額，因此 `-0.4` 顯示為 `Rp -0`。
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    format!("Rp {}{}", sign, group_thousands(&rounded.abs().trunc().to_string()))
}

/// 百分比：1 位小數，例如 `29.8%`
pub fn format_percent(value: Decimal) -> String {
    format!("{:.1}%", round_percent(value))
}

/// 工時：2 位小數
pub fn format_hours(hours: Decimal) -> String {
    format!("{:.2}", hours)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::from(1_190_000), "Rp 1,190,000")]
    #[case(Decimal::from(-2_810_000), "Rp -2,810,000")]
    #[case(Decimal::from(999), "Rp 999")]
    #[case(Decimal::ZERO, "Rp 0")]
    #[case(Decimal::new(12_495, 1), "Rp 1,250")]
    #[case(Decimal::new(12_485, 1), "Rp 1,248")]
    #[case(Decimal::new(-4, 1), "Rp -0")]
    #[case(Decimal::new(-5, 1), "Rp -0")]
    #[case(Decimal::new(-15, 1), "Rp -2")]
    #[case(Decimal::new(124_950_000, 2), "Rp 1,249,500")]
    fn test_format_rupiah(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_rupiah(amount), expected);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Decimal::new(2975, 2)), "29.8%");
        assert_eq!(format_percent(Decimal::ONE_HUNDRED), "100.0%");
        assert_eq!(format_percent(Decimal::ZERO), "0.0%");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(Decimal::new(136, 1)), "13.60");
        assert_eq!(format_hours(Decimal::from(24)), "24.00");
    }
}
