//! 儀表板報表資料

use plan_calc::PlanningResult;
use plan_core::ProductEconomics;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::{format_hours, format_percent, format_rupiah};

/// 產品明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetail {
    pub unit_price: Decimal,
    pub unit_cost: Decimal,
    pub profit_per_unit: Decimal,
    pub unit_time_hours: Decimal,
}

/// 生產計劃列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanRow {
    pub product: String,
    pub units_produced: u64,
    pub total_time_used_hours: Decimal,
    pub total_profit: Decimal,
}

/// 摘要指標（已格式化）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryMetric {
    pub label: String,
    pub value: String,

    /// 附註（例如目標達成狀態）
    pub note: Option<String>,
}

impl SummaryMetric {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
            note: None,
        }
    }
}

/// 圖表類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Bar,
    Donut,
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Decimal,
}

/// 圖表資料序列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    fn new(title: &str, kind: ChartKind, points: Vec<(String, Decimal)>) -> Self {
        Self {
            title: title.to_string(),
            kind,
            points: points
                .into_iter()
                .map(|(label, value)| ChartPoint { label, value })
                .collect(),
        }
    }
}

/// 儀表板報表
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub product: String,
    pub detail: ProductDetail,
    pub plan: PlanRow,
    pub metrics: Vec<SummaryMetric>,

    /// 目標 vs 實際（說明, 數值）
    pub target_table: Vec<(String, String)>,

    pub profit_chart: ChartSeries,
    pub time_chart: ChartSeries,
    pub trend_chart: ChartSeries,

    /// 警告信息
    pub warnings: Vec<String>,
}

impl DashboardReport {
    /// 由評估結果建立報表
    pub fn build(product: &str, economics: &ProductEconomics, result: &PlanningResult) -> Self {
        let plan = &result.plan;
        let comparison = &result.comparison;

        let detail = ProductDetail {
            unit_price: economics.unit_price,
            unit_cost: economics.unit_cost,
            profit_per_unit: plan.profit_per_unit,
            unit_time_hours: economics.unit_time_hours,
        };

        let plan_row = PlanRow {
            product: product.to_string(),
            units_produced: plan.units_produced,
            total_time_used_hours: plan.total_time_used_hours,
            total_profit: plan.total_profit,
        };

        let mut achievement = SummaryMetric::new(
            "Target Achievement",
            format_percent(comparison.achievement_percent),
        );
        achievement.note = Some(comparison.status().label().to_string());

        let metrics = vec![
            SummaryMetric::new("Units Produced", plan.units_produced.to_string()),
            SummaryMetric::new("Total Profit", format_rupiah(plan.total_profit)),
            SummaryMetric::new(
                "Efficiency Achieved",
                format_percent(plan.efficiency_achieved_percent),
            ),
            achievement,
        ];

        let target_table = vec![
            (
                "Daily Target Profit".to_string(),
                format_rupiah(comparison.target_profit),
            ),
            (
                "Total Profit Achieved".to_string(),
                format_rupiah(comparison.actual_profit),
            ),
            ("Difference".to_string(), format_rupiah(comparison.difference)),
            (
                "Achievement Percentage".to_string(),
                format_percent(comparison.achievement_percent),
            ),
        ];

        let profit_chart = ChartSeries::new(
            "Target vs Actual Profit",
            ChartKind::Bar,
            vec![
                ("Target Profit".to_string(), comparison.target_profit),
                ("Actual Profit".to_string(), comparison.actual_profit),
            ],
        );

        let time_chart = ChartSeries::new(
            "Production Time Distribution (hours)",
            ChartKind::Donut,
            vec![
                ("Time Used".to_string(), plan.total_time_used_hours),
                ("Time Remaining".to_string(), plan.time_remaining_hours()),
            ],
        );

        let trend_chart = ChartSeries::new(
            "Weekly Profit Trend (simulated)",
            ChartKind::Line,
            result
                .trend
                .points()
                .iter()
                .map(|p| (p.day.to_string(), p.profit))
                .collect(),
        );

        tracing::debug!("報表建立完成：{}", product);

        Self {
            product: product.to_string(),
            detail,
            plan: plan_row,
            metrics,
            target_table,
            profit_chart,
            time_chart,
            trend_chart,
            warnings: result.warnings.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// 序列化為 JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// 產品明細表的格式化列
    pub fn detail_cells(&self) -> Vec<String> {
        vec![
            format_rupiah(self.detail.unit_price),
            format_rupiah(self.detail.unit_cost),
            format_rupiah(self.detail.profit_per_unit),
            format_hours(self.detail.unit_time_hours),
        ]
    }

    /// 生產計劃表的格式化列
    pub fn plan_cells(&self) -> Vec<String> {
        vec![
            self.plan.product.clone(),
            self.plan.units_produced.to_string(),
            format_hours(self.plan.total_time_used_hours),
            format_rupiah(self.plan.total_profit),
        ]
    }
}
