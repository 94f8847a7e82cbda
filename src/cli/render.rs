//! Plain-text rendering of the views for a terminal.

use crate::features::dashboard::Dashboard;
use std::fmt::Write;

const EMPTY_TABLE: &str = "No records found.";
const BAR_WIDTH: f64 = 40.0;

/// Left-aligned columns separated by two spaces, padded to the widest cell.
pub(crate) fn table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    let rules: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_row(&mut out, rules.iter().map(String::as_str), &widths);
    if rows.is_empty() {
        out.push_str(EMPTY_TABLE);
        out.push('\n');
    }
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

pub(crate) fn dashboard(dashboard: &Dashboard) -> String {
    let stats = &dashboard.stats;
    let mut out = String::new();

    for (title, value) in stats.cards.entries() {
        let value = value.map_or_else(|| "-".to_string(), ToString::to_string);
        let _ = writeln!(out, "{title:<18} {value}");
    }

    out.push_str("\nLogins per hour\n");
    match &stats.grafico_logins_por_hora {
        Some(chart) if !chart.points().is_empty() => {
            let points = chart.points();
            let max = points
                .iter()
                .filter_map(|(_, value)| value.as_f64())
                .fold(0.0_f64, f64::max);
            for (label, value) in points {
                let count = value.as_f64().unwrap_or(0.0);
                let bar = if max > 0.0 {
                    "#".repeat(((count / max) * BAR_WIDTH).round() as usize)
                } else {
                    String::new()
                };
                let _ = writeln!(out, "{label:>6} {bar} {value}");
            }
        }
        _ => out.push_str("No data.\n"),
    }

    out.push_str("\nConnection status\n");
    let rows: Vec<[String; 3]> = stats
        .tabela_status_conexao
        .iter()
        .map(|row| {
            let online = if row.is_active() { "yes" } else { "no" };
            [row.nome_usuario.clone(), row.status.clone(), online.into()]
        })
        .collect();
    out.push_str(&table(["User", "Status", "Online"], &rows));

    out.push_str("\nLatest alerts\n");
    if dashboard.latest_alerts.is_empty() {
        out.push_str("No recent alerts.\n");
    }
    for alert in &dashboard.latest_alerts {
        let _ = writeln!(out, "! {}", alert.row()[0]);
    }

    out
}
