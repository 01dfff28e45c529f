//! 命令列介面

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use plan_calc::ProductionPlanner;
use plan_core::{PlannerConfig, PlanningInput, ProductCatalog};
use plan_report::{format_hours, format_rupiah, render_text, DashboardReport};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// 報表輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Plan daily production of a single product under a capacity limit
#[derive(Debug, Parser)]
#[command(name = "prodplan")]
#[command(about = "prodplan - single-product daily production planner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Product name from the catalog (defaults to the first product)
    #[arg(short, long)]
    pub product: Option<String>,

    /// Daily production capacity in hours
    #[arg(short, long)]
    pub capacity: Option<Decimal>,

    /// Machine efficiency in percent
    #[arg(short, long)]
    pub efficiency: Option<Decimal>,

    /// Daily target profit
    #[arg(short, long)]
    pub target: Option<Decimal>,

    /// JSON product catalog (defaults to the built-in reference catalog)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List catalog products and exit
    #[arg(long)]
    pub list_products: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// 執行命令並回傳要輸出的內容
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let catalog = match &cli.catalog {
        Some(path) => ProductCatalog::from_json_file(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => ProductCatalog::reference(),
    };
    tracing::debug!("產品目錄載入完成：{} 項", catalog.len());

    if cli.list_products {
        return Ok(list_products(&catalog));
    }

    let config = PlannerConfig::default();

    let product = match &cli.product {
        Some(name) => name.clone(),
        None => match catalog.names().first() {
            Some(name) => name.to_string(),
            None => bail!("product catalog is empty"),
        },
    };
    let economics = catalog
        .get(&product)
        .with_context(|| format!("available products: {}", catalog.names().join(", ")))?;

    let capacity = config.check_capacity(cli.capacity.unwrap_or(config.default_capacity_hours))?;
    let efficiency = config
        .check_efficiency_percent(cli.efficiency.unwrap_or(config.default_efficiency_percent))?;
    let target = config.check_target(cli.target.unwrap_or(config.default_target_profit))?;

    let input = PlanningInput::from_percent(capacity, efficiency)?;
    let result = ProductionPlanner::evaluate(economics, &input, target)
        .with_context(|| format!("failed to plan production for {}", product))?;

    for warning in &result.warnings {
        tracing::warn!("{}", warning);
    }

    let report = DashboardReport::build(&product, economics, &result);
    match cli.format {
        OutputFormat::Text => Ok(render_text(&report)),
        OutputFormat::Json => report.to_json().context("failed to serialize report"),
    }
}

fn list_products(catalog: &ProductCatalog) -> String {
    let rows: Vec<Vec<String>> = catalog
        .products()
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                format_rupiah(p.economics.unit_price),
                format_rupiah(p.economics.unit_cost),
                format_hours(p.economics.unit_time_hours),
            ]
        })
        .collect();
    plan_report::render::render_table(&["Product", "Unit Price", "Unit Cost", "Time per Unit (h)"], &rows)
}
