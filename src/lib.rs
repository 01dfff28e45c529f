//! # ProdPlan
//!
//! 單一產品每日生產計劃：在工時產能限制下求最大產量，並與目標利潤比較。
//!
//! ```
//! use prodplan::{PlanningInput, ProductCatalog, ProductionPlanner};
//! use rust_decimal::Decimal;
//!
//! let catalog = ProductCatalog::reference();
//! let input = PlanningInput::new(Decimal::from(16), Decimal::new(85, 2)).unwrap();
//! let plan = ProductionPlanner::plan_for(&catalog, "Sepatu Olahraga", &input).unwrap();
//! assert_eq!(plan.units_produced, 17);
//! ```

pub mod cli;
pub mod logging;

pub use plan_calc::{
    PlanWarning, PlanningResult, ProductionPlanner, TargetComparison, TargetStatus, TrendPoint,
    WeeklyTrend,
};
pub use plan_core::{
    CatalogProduct, PlanError, PlannerConfig, PlanningInput, ProductCatalog, ProductEconomics,
    ProductionPlan,
};
pub use plan_report::{render_text, DashboardReport};
