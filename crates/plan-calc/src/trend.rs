//! 每週利潤趨勢（展示用）
//!
//! 以固定倍率展開單日利潤，不是預測模型。

use chrono::Weekday;
use plan_core::PlanError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 週一至週日的固定倍率（1.0, 0.9, 1.1, 1.05, 0.95, 1.0, 1.2）
pub const WEEKLY_MULTIPLIERS: [(Weekday, i64, u32); 7] = [
    (Weekday::Mon, 10, 1),
    (Weekday::Tue, 9, 1),
    (Weekday::Wed, 11, 1),
    (Weekday::Thu, 105, 2),
    (Weekday::Fri, 95, 2),
    (Weekday::Sat, 10, 1),
    (Weekday::Sun, 12, 1),
];

/// 趨勢點
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub day: Weekday,
    pub profit: Decimal,
}

/// 每週趨勢
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    points: Vec<TrendPoint>,
}

impl WeeklyTrend {
    /// 由單日利潤展開七天
    pub fn from_daily_profit(daily_profit: Decimal) -> plan_core::Result<Self> {
        let points = WEEKLY_MULTIPLIERS
            .iter()
            .map(|&(day, num, scale)| {
                let profit = daily_profit
                    .checked_mul(Decimal::new(num, scale))
                    .ok_or_else(|| {
                        PlanError::CalculationError(format!("{} 趨勢利潤溢位: {}", day, daily_profit))
                    })?;
                Ok(TrendPoint { day, profit })
            })
            .collect::<plan_core::Result<Vec<_>>>()?;

        Ok(Self { points })
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    /// 週最高利潤
    pub fn peak(&self) -> Option<&TrendPoint> {
        self.points.iter().max_by(|a, b| a.profit.cmp(&b.profit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_fan_out() {
        let trend = WeeklyTrend::from_daily_profit(Decimal::from(1_190_000)).unwrap();
        let profits: Vec<Decimal> = trend.points().iter().map(|p| p.profit).collect();

        assert_eq!(
            profits,
            vec![
                Decimal::from(1_190_000),
                Decimal::from(1_071_000),
                Decimal::from(1_309_000),
                Decimal::from(1_249_500),
                Decimal::from(1_130_500),
                Decimal::from(1_190_000),
                Decimal::from(1_428_000),
            ]
        );
        assert_eq!(trend.points()[0].day, Weekday::Mon);
        assert_eq!(trend.points()[6].day, Weekday::Sun);
    }

    #[test]
    fn test_peak_is_sunday() {
        let trend = WeeklyTrend::from_daily_profit(Decimal::from(100)).unwrap();
        let peak = trend.peak().unwrap();

        assert_eq!(peak.day, Weekday::Sun);
        assert_eq!(peak.profit, Decimal::from(120));
    }

    #[test]
    fn test_zero_profit_trend() {
        let trend = WeeklyTrend::from_daily_profit(Decimal::ZERO).unwrap();
        assert!(trend.points().iter().all(|p| p.profit.is_zero()));
    }

    #[test]
    fn test_overflow_is_error() {
        // 1.0 倍可容納，1.1 倍超出 Decimal 上限
        let result = WeeklyTrend::from_daily_profit(Decimal::MAX);
        assert!(matches!(result, Err(PlanError::CalculationError(_))));

        let loss = WeeklyTrend::from_daily_profit(Decimal::MIN);
        assert!(loss.is_err());
    }
}
