//! 單一產品生產計劃計算器

use plan_core::{PlanError, PlanningInput, ProductCatalog, ProductEconomics, ProductionPlan};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::rounding::{round_currency, round_hours, round_percent};
use crate::target::TargetComparison;
use crate::trend::WeeklyTrend;
use crate::{PlanWarning, PlanningResult};

/// 生產計劃計算器（無狀態）
pub struct ProductionPlanner;

impl ProductionPlanner {
    /// 計算產能限制下的最大產量與利潤
    ///
    /// 產能或效率為 0 時回傳零產出計劃；單位工時非正數時回傳
    /// [`PlanError::InvalidProductEconomics`]。
    pub fn compute_plan(
        economics: &ProductEconomics,
        input: &PlanningInput,
    ) -> plan_core::Result<ProductionPlan> {
        economics.validate()?;
        input.validate()?;

        tracing::debug!(
            "計算生產計劃：產能 {} 小時，效率 {}，單位工時 {} 小時",
            input.daily_capacity_hours,
            input.efficiency_fraction,
            economics.unit_time_hours
        );

        // Step 1: 單位利潤
        let profit_per_unit = economics.profit_per_unit();

        // Step 2: 可用工時
        let total_hours_available = input.total_hours_available();

        // Step 3: 最大產量（向下取整，部分單位不可生產）
        let units = total_hours_available
            .checked_div(economics.unit_time_hours)
            .ok_or_else(|| PlanError::CalculationError("可用工時除以單位工時溢位".to_string()))?
            .floor();
        let units_produced = units
            .to_u64()
            .ok_or_else(|| PlanError::CalculationError(format!("產量超出範圍: {}", units)))?;
        tracing::debug!("可用工時 {}，最大產量 {}", total_hours_available, units_produced);

        // Step 4-5: 總利潤與已用工時
        let total_profit = units
            .checked_mul(profit_per_unit)
            .ok_or_else(|| PlanError::CalculationError("總利潤溢位".to_string()))?;
        let total_time_used = units
            .checked_mul(economics.unit_time_hours)
            .ok_or_else(|| PlanError::CalculationError("已用工時溢位".to_string()))?;

        // Step 6: 達成效率（可用工時為 0 時定義為 0%）
        let efficiency_achieved_percent = if total_hours_available > Decimal::ZERO {
            round_percent(total_time_used / total_hours_available * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };

        Ok(ProductionPlan {
            units_produced,
            profit_per_unit,
            total_profit: round_currency(total_profit),
            total_time_used_hours: round_hours(total_time_used),
            total_time_available_hours: round_hours(total_hours_available),
            efficiency_achieved_percent,
        })
    }

    /// 依產品名稱從目錄計算
    pub fn plan_for(
        catalog: &ProductCatalog,
        product: &str,
        input: &PlanningInput,
    ) -> plan_core::Result<ProductionPlan> {
        let economics = catalog.get(product)?;
        Self::compute_plan(economics, input)
    }

    /// 完整評估：計劃、目標比較、週趨勢與警告
    pub fn evaluate(
        economics: &ProductEconomics,
        input: &PlanningInput,
        target_profit: Decimal,
    ) -> plan_core::Result<PlanningResult> {
        let start_time = std::time::Instant::now();

        let plan = Self::compute_plan(economics, input)?;
        let comparison = TargetComparison::new(plan.total_profit, target_profit)?;
        let trend = WeeklyTrend::from_daily_profit(plan.total_profit)?;

        let mut result = PlanningResult::new(plan, comparison, trend);

        if economics.is_loss_making() {
            result.add_warning(PlanWarning::LossMakingProduct {
                profit_per_unit: economics.profit_per_unit(),
            });
        }
        if result.plan.is_idle() {
            result.add_warning(PlanWarning::IdleCapacity {
                hours_available: result.plan.total_time_available_hours,
                unit_time_hours: economics.unit_time_hours,
            });
        }
        if !result.comparison.target_met {
            result.add_warning(PlanWarning::TargetNotMet {
                shortfall: -result.comparison.difference,
            });
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "生產計劃完成：產量 {}，總利潤 {}，警告 {} 筆",
            result.plan.units_produced,
            result.plan.total_profit,
            result.warnings.len()
        );

        Ok(result)
    }
}
