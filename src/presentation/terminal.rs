// Plain-text rendering of the panel for the terminal session
use crate::application::panel_session::PanelSnapshot;
use crate::domain::chart::{ChartData, SeriesData};
use crate::domain::history::HistoryEntry;
use crate::domain::reading::{SensorField, SensorReading};
use crate::presentation::diagnostic_view::{DiagnosticView, WAITING_PLACEHOLDER};
use crate::presentation::trend_view::{TEMPERATURE_SERIES_ID, TrendView, VIBRATION_SERIES_ID};
use std::fmt::Write;

pub fn render_panel(snapshot: &PanelSnapshot) -> String {
    let mut out = String::new();
    out.push_str("⚙️ InovSpin - Painel Inteligente de Manutenção Preditiva\n\n");
    out.push_str(&render_form(&snapshot.draft, snapshot.is_loading()));
    out.push('\n');
    out.push_str(&render_diagnostic(snapshot.current.as_ref().map(DiagnosticView::render)));
    if let Some(chart) = TrendView::render(&snapshot.history) {
        out.push('\n');
        out.push_str(&render_trend(&chart));
    }
    out
}

pub fn render_form(draft: &SensorReading, loading: bool) -> String {
    let mut out = String::from("== Parâmetros do Motor ==\n");
    for field in SensorField::ALL {
        let _ = writeln!(
            out,
            "  {:<20} {:>10}   ({})",
            field.label(),
            draft.get(field),
            field.wire_name()
        );
    }
    let button = if loading {
        "[ Processando IA... ]"
    } else {
        "[ Analisar com IA ]"
    };
    let _ = writeln!(out, "  {}", button);
    out
}

pub fn render_diagnostic(view: Option<DiagnosticView>) -> String {
    let mut out = String::from("== Diagnóstico do Sistema ==\n");
    let Some(view) = view else {
        let _ = writeln!(out, "  {}", WAITING_PLACEHOLDER);
        return out;
    };

    let _ = writeln!(out, "  Risco de falha:  {} {}", gauge_bar(view.gauge_fraction), view.gauge_label);
    let _ = writeln!(out, "  Status de Operação: {} [{}]", view.status, view.tier);
    let _ = writeln!(out, "  Causa Raiz Detectada: {} ({})", view.root_cause, view.cause_color);
    let _ = writeln!(out, "  Recomendação Técnica: {}", view.recommendation);
    let _ = writeln!(out, "  Impacto Financeiro (ROI): {}", view.estimated_roi);
    out
}

pub fn render_trend(chart: &ChartData) -> String {
    let mut out = format!("== {} ==\n", chart.title);
    let temperature = chart.series(TEMPERATURE_SERIES_ID);
    let vibration = chart.series(VIBRATION_SERIES_ID);

    let _ = writeln!(
        out,
        "  {:<22} {:>10} {:>10}",
        "hora",
        series_heading(temperature),
        series_heading(vibration)
    );
    for (i, label) in chart.labels().into_iter().enumerate() {
        let temp = temperature.and_then(|s| s.points.get(i)).map(|p| p.value);
        let vib = vibration.and_then(|s| s.points.get(i)).map(|p| p.value);
        let _ = writeln!(
            out,
            "  {:<22} {:>10} {:>10}",
            label,
            format_value(temp),
            format_value(vib)
        );
    }
    out
}

/// Stored-order listing including the per-row verdict when the service sent one
pub fn render_history(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "  (sem histórico)\n".to_string();
    }

    let mut out = String::new();
    for entry in history {
        let risk = entry
            .risk_percent
            .map(|r| format!("{}%", r))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  {:<22} {:>8.1} °C {:>6.1} mm/s  risco {:>6}  {}",
            entry.hour,
            entry.temperature,
            entry.vibration,
            risk,
            entry.status.as_deref().unwrap_or("")
        );
    }
    out
}

fn gauge_bar(fraction: f64) -> String {
    const WIDTH: usize = 20;
    let filled = if fraction.is_finite() {
        (fraction.clamp(0.0, 1.0) * WIDTH as f64).round() as usize
    } else {
        0
    };
    format!("[{}{}]", "#".repeat(filled), ".".repeat(WIDTH - filled))
}

fn series_heading(series: Option<&SeriesData>) -> &str {
    series.map(|s| s.name.as_str()).unwrap_or("-")
}

fn format_value(value: Option<f64>) -> String {
    value.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string())
}
