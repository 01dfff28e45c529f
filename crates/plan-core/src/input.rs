//! 計劃輸入模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

/// 每次計算的輸入參數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningInput {
    /// 每日產能（小時）
    pub daily_capacity_hours: Decimal,

    /// 效率係數（0-1），扣除停機等損失後可用的產能比例
    pub efficiency_fraction: Decimal,
}

impl PlanningInput {
    /// 創建並驗證計劃輸入
    ///
    /// 產能與效率可以為 0，此時計劃結果為零產出而非錯誤。
    pub fn new(daily_capacity_hours: Decimal, efficiency_fraction: Decimal) -> Result<Self> {
        let input = Self {
            daily_capacity_hours,
            efficiency_fraction,
        };
        input.validate()?;
        Ok(input)
    }

    /// 以百分比（0-100）表示效率創建輸入
    pub fn from_percent(daily_capacity_hours: Decimal, efficiency_percent: Decimal) -> Result<Self> {
        Self::new(daily_capacity_hours, efficiency_percent / Decimal::ONE_HUNDRED)
    }

    /// 驗證參數
    pub fn validate(&self) -> Result<()> {
        if self.daily_capacity_hours < Decimal::ZERO {
            return Err(PlanError::InvalidPlanningInput(format!(
                "每日產能不可為負數: {}",
                self.daily_capacity_hours
            )));
        }
        if self.efficiency_fraction < Decimal::ZERO || self.efficiency_fraction > Decimal::ONE {
            return Err(PlanError::InvalidPlanningInput(format!(
                "效率係數必須介於 0 與 1 之間: {}",
                self.efficiency_fraction
            )));
        }
        Ok(())
    }

    /// 實際可用工時（產能 × 效率）
    pub fn total_hours_available(&self) -> Decimal {
        self.daily_capacity_hours * self.efficiency_fraction
    }
}
