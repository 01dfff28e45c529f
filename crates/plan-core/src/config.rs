//! 計劃器配置（輸入範圍與預設值）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

/// 輸入範圍與預設值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// 每日產能下限（小時）
    pub min_capacity_hours: Decimal,

    /// 每日產能上限（小時）
    pub max_capacity_hours: Decimal,

    /// 預設每日產能
    pub default_capacity_hours: Decimal,

    /// 機器效率下限（%）
    pub min_efficiency_percent: Decimal,

    /// 機器效率上限（%）
    pub max_efficiency_percent: Decimal,

    /// 預設機器效率（%）
    pub default_efficiency_percent: Decimal,

    /// 預設每日目標利潤
    pub default_target_profit: Decimal,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_capacity_hours: Decimal::from(8),
            max_capacity_hours: Decimal::from(24),
            default_capacity_hours: Decimal::from(16),
            min_efficiency_percent: Decimal::from(60),
            max_efficiency_percent: Decimal::ONE_HUNDRED,
            default_efficiency_percent: Decimal::from(85),
            default_target_profit: Decimal::from(4_000_000),
        }
    }
}

impl PlannerConfig {
    /// 建構器模式：設置產能範圍
    pub fn with_capacity_bounds(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_capacity_hours = min;
        self.max_capacity_hours = max;
        self
    }

    /// 建構器模式：設置效率範圍（%）
    pub fn with_efficiency_bounds(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_efficiency_percent = min;
        self.max_efficiency_percent = max;
        self
    }

    /// 建構器模式：設置預設產能
    pub fn with_default_capacity(mut self, hours: Decimal) -> Self {
        self.default_capacity_hours = hours;
        self
    }

    /// 建構器模式：設置預設效率
    pub fn with_default_efficiency(mut self, percent: Decimal) -> Self {
        self.default_efficiency_percent = percent;
        self
    }

    /// 建構器模式：設置預設目標利潤
    pub fn with_default_target(mut self, target: Decimal) -> Self {
        self.default_target_profit = target;
        self
    }

    /// 檢查每日產能是否在範圍內
    pub fn check_capacity(&self, hours: Decimal) -> Result<Decimal> {
        check_range(
            "daily_capacity_hours",
            hours,
            self.min_capacity_hours,
            self.max_capacity_hours,
        )
    }

    /// 檢查機器效率（%）是否在範圍內
    pub fn check_efficiency_percent(&self, percent: Decimal) -> Result<Decimal> {
        check_range(
            "efficiency_percent",
            percent,
            self.min_efficiency_percent,
            self.max_efficiency_percent,
        )
    }

    /// 檢查目標利潤（不可為負數）
    pub fn check_target(&self, target: Decimal) -> Result<Decimal> {
        if target < Decimal::ZERO {
            return Err(PlanError::OutOfBounds {
                field: "target_profit",
                value: target.to_string(),
                min: "0".to_string(),
                max: "∞".to_string(),
            });
        }
        Ok(target)
    }
}

fn check_range(field: &'static str, value: Decimal, min: Decimal, max: Decimal) -> Result<Decimal> {
    if value < min || value > max {
        return Err(PlanError::OutOfBounds {
            field,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(value)
}
