//! 目標利潤比較

use plan_core::PlanError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 目標達成狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetStatus {
    /// 已達成
    Met,
    /// 未達成
    NotMet,
}

impl TargetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TargetStatus::Met => "Target met",
            TargetStatus::NotMet => "Target not met",
        }
    }
}

/// 目標與實際利潤比較
///
/// 目標利潤只作比較，不參與最佳化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetComparison {
    /// 每日目標利潤
    pub target_profit: Decimal,

    /// 實際總利潤
    pub actual_profit: Decimal,

    /// 差額（實際 - 目標）
    pub difference: Decimal,

    /// 達成率（%，未修約；目標為 0 時為 0）
    pub achievement_percent: Decimal,

    /// 是否達成（實際 >= 目標）
    pub target_met: bool,
}

impl TargetComparison {
    pub fn new(actual_profit: Decimal, target_profit: Decimal) -> plan_core::Result<Self> {
        let achievement_percent = if target_profit > Decimal::ZERO {
            actual_profit
                .checked_div(target_profit)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or_else(|| {
                    PlanError::CalculationError(format!(
                        "達成率溢位：實際 {}，目標 {}",
                        actual_profit, target_profit
                    ))
                })?
        } else {
            Decimal::ZERO
        };

        let difference = actual_profit
            .checked_sub(target_profit)
            .ok_or_else(|| PlanError::CalculationError("利潤差額溢位".to_string()))?;

        Ok(Self {
            target_profit,
            actual_profit,
            difference,
            achievement_percent,
            target_met: actual_profit >= target_profit,
        })
    }

    pub fn status(&self) -> TargetStatus {
        if self.target_met {
            TargetStatus::Met
        } else {
            TargetStatus::NotMet
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_not_met() {
        let comparison =
            TargetComparison::new(Decimal::from(1_190_000), Decimal::from(4_000_000)).unwrap();

        assert_eq!(comparison.difference, Decimal::from(-2_810_000));
        assert_eq!(comparison.achievement_percent, Decimal::new(2975, 2));
        assert!(!comparison.target_met);
        assert_eq!(comparison.status(), TargetStatus::NotMet);
        assert_eq!(comparison.status().label(), "Target not met");
    }

    #[test]
    fn test_target_met_exactly() {
        let comparison = TargetComparison::new(Decimal::from(4_000_000), Decimal::from(4_000_000)).unwrap();

        assert_eq!(comparison.difference, Decimal::ZERO);
        assert_eq!(comparison.achievement_percent, Decimal::ONE_HUNDRED);
        assert_eq!(comparison.status(), TargetStatus::Met);
    }

    #[test]
    fn test_zero_target_guard() {
        let comparison = TargetComparison::new(Decimal::from(12_000_000), Decimal::ZERO).unwrap();

        assert_eq!(comparison.achievement_percent, Decimal::ZERO);
        assert!(comparison.target_met);
    }

    #[test]
    fn test_loss_against_zero_target() {
        let comparison = TargetComparison::new(Decimal::from(-240), Decimal::ZERO).unwrap();

        assert_eq!(comparison.achievement_percent, Decimal::ZERO);
        assert!(!comparison.target_met);
        assert_eq!(comparison.difference, Decimal::from(-240));
    }

    #[test]
    fn test_tiny_target_overflow_is_error() {
        // 目標極小時達成率超出 Decimal 範圍
        let result = TargetComparison::new(
            Decimal::from(12_000_000),
            Decimal::new(1, 28),
        );
        assert!(matches!(result, Err(PlanError::CalculationError(_))));
    }

    #[test]
    fn test_difference_overflow_is_error() {
        let result = TargetComparison::new(Decimal::MIN, Decimal::MAX);
        assert!(matches!(result, Err(PlanError::CalculationError(_))));
    }
}
