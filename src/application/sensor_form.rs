// Sensor form - editable draft of the next reading
use crate::domain::reading::{SensorField, SensorReading};

#[derive(Debug, Clone, Default)]
pub struct SensorForm {
    draft: SensorReading,
}

impl SensorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &SensorReading {
        &self.draft
    }

    /// Coerce `raw` to a number and replace that one field.
    /// Input that does not parse becomes `NaN` and is kept.
    pub fn edit(&mut self, field: SensorField, raw: &str) -> f64 {
        let value = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.draft = self.draft.with(field, value);
        value
    }

    /// Snapshot of the draft for dispatch; the draft stays editable.
    pub fn submit(&self) -> SensorReading {
        self.draft
    }
}
