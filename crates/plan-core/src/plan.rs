//! 生產計劃模型（計算結果）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 生產計劃
///
/// 每次計算產生新的值物件，立即交給呈現層使用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 生產數量（整數，無法生產部分單位）
    pub units_produced: u64,

    /// 單位利潤
    pub profit_per_unit: Decimal,

    /// 總利潤（四捨五入至 2 位小數）
    pub total_profit: Decimal,

    /// 已使用工時（四捨五入至 2 位小數）
    pub total_time_used_hours: Decimal,

    /// 可用工時（四捨五入至 2 位小數）
    pub total_time_available_hours: Decimal,

    /// 達成效率（%，1 位小數）
    pub efficiency_achieved_percent: Decimal,
}

impl ProductionPlan {
    /// 剩餘可用工時
    pub fn time_remaining_hours(&self) -> Decimal {
        self.total_time_available_hours - self.total_time_used_hours
    }

    /// 檢查是否沒有任何產出
    pub fn is_idle(&self) -> bool {
        self.units_produced == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> ProductionPlan {
        ProductionPlan {
            units_produced: 17,
            profit_per_unit: Decimal::from(70_000),
            total_profit: Decimal::from(1_190_000),
            total_time_used_hours: Decimal::new(1360, 2),
            total_time_available_hours: Decimal::new(1500, 2),
            efficiency_achieved_percent: Decimal::new(907, 1),
        }
    }

    #[test]
    fn test_time_remaining() {
        let plan = sample_plan();
        assert_eq!(plan.time_remaining_hours(), Decimal::new(14, 1));
        assert!(!plan.is_idle());
    }

    #[test]
    fn test_serialize_plan() {
        let plan = sample_plan();
        let json = serde_json::to_string(&plan).unwrap();
        let back: ProductionPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
