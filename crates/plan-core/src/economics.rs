//! 產品經濟參數模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

/// 產品經濟參數（售價、成本、單位工時）
///
/// 屬於參考資料：由目錄定義一次，呼叫端只做選取，不做修改。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEconomics {
    /// 單位售價
    pub unit_price: Decimal,

    /// 單位生產成本
    pub unit_cost: Decimal,

    /// 單位生產時間（小時）
    pub unit_time_hours: Decimal,
}

impl ProductEconomics {
    /// 創建並驗證產品經濟參數
    pub fn new(unit_price: Decimal, unit_cost: Decimal, unit_time_hours: Decimal) -> Result<Self> {
        let economics = Self {
            unit_price,
            unit_cost,
            unit_time_hours,
        };
        economics.validate()?;
        Ok(economics)
    }

    /// 驗證參數
    ///
    /// 欄位為公開且可反序列化，計劃器在計算前會再驗證一次。
    pub fn validate(&self) -> Result<()> {
        if self.unit_time_hours <= Decimal::ZERO {
            return Err(PlanError::InvalidProductEconomics(format!(
                "單位生產時間必須大於 0，實際為 {}",
                self.unit_time_hours
            )));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(PlanError::InvalidProductEconomics(format!(
                "售價不可為負數: {}",
                self.unit_price
            )));
        }
        if self.unit_cost < Decimal::ZERO {
            return Err(PlanError::InvalidProductEconomics(format!(
                "生產成本不可為負數: {}",
                self.unit_cost
            )));
        }
        Ok(())
    }

    /// 單位利潤（售價 - 成本），可為負數
    pub fn profit_per_unit(&self) -> Decimal {
        self.unit_price - self.unit_cost
    }

    /// 是否為虧損產品
    pub fn is_loss_making(&self) -> bool {
        self.profit_per_unit() < Decimal::ZERO
    }
}
