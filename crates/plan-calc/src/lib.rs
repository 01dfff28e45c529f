//! # Plan Calculation Engine
//!
//! 單一產品生產計劃計算引擎

pub mod planner;
pub mod rounding;
pub mod target;
pub mod trend;

// Re-export 主要類型
pub use planner::ProductionPlanner;
pub use target::{TargetComparison, TargetStatus};
pub use trend::{TrendPoint, WeeklyTrend};

use rust_decimal::Decimal;
use serde::Serialize;

/// 完整評估結果
#[derive(Debug, Clone, Serialize)]
pub struct PlanningResult {
    /// 生產計劃
    pub plan: plan_core::ProductionPlan,

    /// 目標比較
    pub comparison: TargetComparison,

    /// 每週趨勢
    pub trend: WeeklyTrend,

    /// 警告信息
    pub warnings: Vec<PlanWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl PlanningResult {
    pub fn new(plan: plan_core::ProductionPlan, comparison: TargetComparison, trend: WeeklyTrend) -> Self {
        Self {
            plan,
            comparison,
            trend,
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: PlanWarning) {
        self.warnings.push(warning);
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// 計劃警告（不影響計算結果）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlanWarning {
    /// 單位利潤為負
    LossMakingProduct { profit_per_unit: Decimal },

    /// 可用工時不足以生產任何一件
    IdleCapacity {
        hours_available: Decimal,
        unit_time_hours: Decimal,
    },

    /// 未達目標利潤
    TargetNotMet { shortfall: Decimal },
}

impl std::fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanWarning::LossMakingProduct { profit_per_unit } => {
                write!(f, "單位利潤為負 ({})，產量越高虧損越大", profit_per_unit)
            }
            PlanWarning::IdleCapacity {
                hours_available,
                unit_time_hours,
            } => write!(
                f,
                "可用工時 {} 小時不足以生產一件（單位工時 {} 小時）",
                hours_available, unit_time_hours
            ),
            PlanWarning::TargetNotMet { shortfall } => {
                write!(f, "距離目標利潤尚差 {}", shortfall)
            }
        }
    }
}
