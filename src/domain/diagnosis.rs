// Diagnosis domain model - service verdict and severity tiers
use serde::Deserialize;
use std::fmt;

pub const CRITICAL_MARKER: &str = "CRÍTICO";
pub const ALERT_MARKER: &str = "ALERTA";
pub const NORMAL_MARKER: &str = "NORMAL";

/// Risk assessment returned by the prediction service.
///
/// Missing fields fall back to empty/zero values and show up as blanks when
/// rendered; they are not treated as errors.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub status: String,
    #[serde(rename = "risco_falha_percentagem", default)]
    pub failure_risk_percent: f64,
    #[serde(rename = "causa_raiz", default)]
    pub root_cause: String,
    #[serde(rename = "recomendacao", default)]
    pub recommendation: String,
    #[serde(rename = "roi_estimado", default)]
    pub estimated_roi: String,
}

impl PredictionResult {
    pub fn severity(&self) -> SeverityTier {
        SeverityTier::classify(&self.status)
    }

    pub fn is_normal(&self) -> bool {
        self.status.contains(NORMAL_MARKER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityTier {
    Critical,
    Warning,
    Normal,
}

impl SeverityTier {
    /// Classify a free-text status by substring, critical first, then alert.
    /// A status carrying neither marker falls through to `Normal`.
    pub fn classify(status: &str) -> Self {
        if status.contains(CRITICAL_MARKER) {
            SeverityTier::Critical
        } else if status.contains(ALERT_MARKER) {
            SeverityTier::Warning
        } else {
            SeverityTier::Normal
        }
    }

    pub fn style_class(&self) -> &'static str {
        match self {
            SeverityTier::Critical => "status-critico",
            SeverityTier::Warning => "status-alerta",
            SeverityTier::Normal => "status-normal",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeverityTier::Critical => "CRITICAL",
            SeverityTier::Warning => "WARNING",
            SeverityTier::Normal => "NORMAL",
        };
        f.write_str(name)
    }
}
