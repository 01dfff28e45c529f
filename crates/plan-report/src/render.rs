//! 純文字表格輸出

use std::fmt::Write;

use crate::format::{format_hours, format_rupiah};
use crate::report::{ChartKind, ChartSeries, DashboardReport};

/// 渲染整份報表
pub fn render_text(report: &DashboardReport) -> String {
    let mut out = String::new();

    section(&mut out, &format!("Product Detail: {}", report.product));
    out.push_str(&render_table(
        &["Unit Price", "Unit Cost", "Profit per Unit", "Time per Unit (h)"],
        &[report.detail_cells()],
    ));

    section(&mut out, "Production Plan");
    out.push_str(&render_table(
        &["Product", "Units Produced", "Time Used (h)", "Total Profit"],
        &[report.plan_cells()],
    ));

    section(&mut out, "Summary");
    for metric in &report.metrics {
        let _ = match &metric.note {
            Some(note) => writeln!(out, "  {}: {} ({})", metric.label, metric.value, note),
            None => writeln!(out, "  {}: {}", metric.label, metric.value),
        };
    }

    section(&mut out, "Target vs Actual");
    let rows: Vec<Vec<String>> = report
        .target_table
        .iter()
        .map(|(label, value)| vec![label.clone(), value.clone()])
        .collect();
    out.push_str(&render_table(&["Item", "Value"], &rows));

    for chart in [&report.profit_chart, &report.time_chart, &report.trend_chart] {
        section(&mut out, &chart.title);
        out.push_str(&render_series(chart));
    }

    if !report.warnings.is_empty() {
        section(&mut out, "Warnings");
        for warning in &report.warnings {
            let _ = writeln!(out, "  - {}", warning);
        }
    }

    out
}

/// 以固定寬度對齊的表格
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header_cells, &widths);

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &separator, &widths);

    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "| {} |", line.join(" | "));
}

fn render_series(series: &ChartSeries) -> String {
    let rows: Vec<Vec<String>> = series
        .points
        .iter()
        .map(|p| {
            let value = match series.kind {
                ChartKind::Donut => format_hours(p.value),
                ChartKind::Bar | ChartKind::Line => format_rupiah(p.value),
            };
            vec![p.label.clone(), value]
        })
        .collect();
    render_table(&["Category", "Value"], &rows)
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "== {} ==", title);
}
