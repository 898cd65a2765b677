// Diagnostic card - severity tier and render payload for a diagnosis
use crate::domain::diagnosis::{PredictionResult, SeverityTier};

pub const CAUSE_COLOR_NORMAL: &str = "#48bb78";
pub const CAUSE_COLOR_ABNORMAL: &str = "#e53e3e";
pub const WAITING_PLACEHOLDER: &str = "Aguardando dados para análise...";

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticView {
    pub tier: SeverityTier,
    pub style_class: &'static str,
    /// `failure_risk_percent / 100`, not clamped
    pub gauge_fraction: f64,
    pub gauge_label: String,
    pub status: String,
    pub root_cause: String,
    pub cause_color: &'static str,
    pub recommendation: String,
    pub estimated_roi: String,
}

impl DiagnosticView {
    pub fn render(result: &PredictionResult) -> Self {
        let tier = result.severity();
        let cause_color = if result.is_normal() {
            CAUSE_COLOR_NORMAL
        } else {
            CAUSE_COLOR_ABNORMAL
        };

        Self {
            tier,
            style_class: tier.style_class(),
            gauge_fraction: result.failure_risk_percent / 100.0,
            gauge_label: format!("{}%", result.failure_risk_percent),
            status: result.status.clone(),
            root_cause: result.root_cause.clone(),
            cause_color,
            recommendation: result.recommendation.clone(),
            estimated_roi: result.estimated_roi.clone(),
        }
    }
}
