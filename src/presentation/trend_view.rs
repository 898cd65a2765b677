// Trend chart - temperature and vibration over the stored history
use crate::domain::chart::{ChartData, ChartPoint, SeriesData};
use crate::domain::history::HistoryEntry;

pub const TEMPERATURE_SERIES_ID: &str = "temperatura";
pub const VIBRATION_SERIES_ID: &str = "vibracao";

pub struct TrendView;

impl TrendView {
    /// Chart for the stored `history`, plotted in the order the service
    /// sent it (the stored order reversed).
    /// `None` when there is nothing to plot.
    pub fn render(history: &[HistoryEntry]) -> Option<ChartData> {
        if history.is_empty() {
            return None;
        }

        let chronological: Vec<&HistoryEntry> = history.iter().rev().collect();

        let temperature = SeriesData::new(
            TEMPERATURE_SERIES_ID.to_string(),
            "Temp °C".to_string(),
            Some("#e53e3e".to_string()),
            chronological
                .iter()
                .map(|e| ChartPoint::new(e.hour.clone(), e.temperature))
                .collect(),
        );
        let vibration = SeriesData::new(
            VIBRATION_SERIES_ID.to_string(),
            "Vib mm/s".to_string(),
            Some("#3182ce".to_string()),
            chronological
                .iter()
                .map(|e| ChartPoint::new(e.hour.clone(), e.vibration))
                .collect(),
        );

        Some(ChartData::new(
            "Evolução do Comportamento".to_string(),
            vec![temperature, vibration],
        ))
    }
}
