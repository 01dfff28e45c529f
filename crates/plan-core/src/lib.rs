//! # Plan Core
//!
//! 核心資料模型與類型定義

pub mod catalog;
pub mod config;
pub mod economics;
pub mod input;
pub mod plan;

// Re-export 主要類型
pub use catalog::{CatalogProduct, ProductCatalog};
pub use config::PlannerConfig;
pub use economics::ProductEconomics;
pub use input::PlanningInput;
pub use plan::ProductionPlan;

/// 生產計劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("無效的產品經濟參數: {0}")]
    InvalidProductEconomics(String),

    #[error("無效的計劃輸入: {0}")]
    InvalidPlanningInput(String),

    #[error("找不到產品: {0}")]
    ProductNotFound(String),

    #[error("產品重複: {0}")]
    DuplicateProduct(String),

    #[error("{field} 超出範圍 [{min}, {max}]: {value}")]
    OutOfBounds {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("配置錯誤: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
