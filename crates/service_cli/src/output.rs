//! Report rendering as box tables or JSON.

use clap::ValueEnum;
use serde::Serialize;

use crate::Result;

/// Output format for command reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawn table for terminals
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// A report that can be laid out as a table.
pub trait Tabular {
    /// Column headings.
    fn headers(&self) -> Vec<&'static str>;

    /// One entry per row, each with one cell per heading.
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Renders `report` in the requested format.
pub fn render<T>(report: &T, format: OutputFormat) -> Result<String>
where
    T: Serialize + Tabular,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(draw_table(&report.headers(), &report.rows())),
    }
}

/// Formats a number for table cells.
pub fn fmt_value(value: f64) -> String {
    if value.is_finite() {
        format!("{:.10}", value)
    } else {
        value.to_string()
    }
}

fn draw_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                format!(" {}{} ", cell, " ".repeat(w - cell.chars().count()))
            })
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = vec![rule("┌", "┬", "┐"), line(&header_cells), rule("├", "┼", "┤")];
    out.extend(rows.iter().map(|row| line(row)));
    out.push(rule("└", "┴", "┘"));
    out.join("\n")
}
