//! # Plan Report
//!
//! 呈現層資料：表格、摘要指標與圖表序列（不含 UI）

pub mod format;
pub mod render;
pub mod report;

// Re-export 主要類型
pub use format::{format_hours, format_percent, format_rupiah};
pub use render::render_text;
pub use report::{ChartKind, ChartPoint, ChartSeries, DashboardReport, SummaryMetric};
