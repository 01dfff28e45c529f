//! 數值修約
//!
//! 皆採銀行家修約（四捨六入五成雙），與 Python `round` 對十進位值的行為一致。

use rust_decimal::{Decimal, RoundingStrategy};

/// 金額：2 位小數
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// 工時：2 位小數
pub fn round_hours(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// 百分比：1 位小數
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_currency(Decimal::new(12345, 3)), Decimal::new(1234, 2));
        assert_eq!(round_currency(Decimal::new(12355, 3)), Decimal::new(1236, 2));
        assert_eq!(round_hours(Decimal::new(375, 3)), Decimal::new(38, 2));
        assert_eq!(round_percent(Decimal::new(2975, 2)), Decimal::new(298, 1));
        assert_eq!(round_percent(Decimal::new(2965, 2)), Decimal::new(296, 1));
    }
}
