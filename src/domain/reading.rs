// Sensor reading domain model
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One operator-submitted set of motor readings.
///
/// Serialized with the service's field names. Non-finite values are kept as
/// they are; serde_json writes them as `null` and the service rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorReading {
    #[serde(rename = "horas_uso")]
    pub usage_hours: f64,
    #[serde(rename = "temperatura_c")]
    pub temperature_c: f64,
    #[serde(rename = "vibracao_mms")]
    pub vibration_mm_s: f64,
    #[serde(rename = "corrente_a")]
    pub current_a: f64,
    #[serde(rename = "fator_potencia")]
    pub power_factor: f64,
}

impl Default for SensorReading {
    fn default() -> Self {
        Self {
            usage_hours: 5000.0,
            temperature_c: 60.0,
            vibration_mm_s: 3.0,
            current_a: 15.0,
            power_factor: 0.90,
        }
    }
}

impl SensorReading {
    pub fn get(&self, field: SensorField) -> f64 {
        match field {
            SensorField::UsageHours => self.usage_hours,
            SensorField::TemperatureC => self.temperature_c,
            SensorField::VibrationMmS => self.vibration_mm_s,
            SensorField::CurrentA => self.current_a,
            SensorField::PowerFactor => self.power_factor,
        }
    }

    /// Returns a copy with only `field` replaced.
    pub fn with(mut self, field: SensorField, value: f64) -> Self {
        match field {
            SensorField::UsageHours => self.usage_hours = value,
            SensorField::TemperatureC => self.temperature_c = value,
            SensorField::VibrationMmS => self.vibration_mm_s = value,
            SensorField::CurrentA => self.current_a = value,
            SensorField::PowerFactor => self.power_factor = value,
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorField {
    UsageHours,
    TemperatureC,
    VibrationMmS,
    CurrentA,
    PowerFactor,
}

impl SensorField {
    pub const ALL: [SensorField; 5] = [
        SensorField::UsageHours,
        SensorField::TemperatureC,
        SensorField::VibrationMmS,
        SensorField::CurrentA,
        SensorField::PowerFactor,
    ];

    /// Name used on the wire and in the terminal `set` command
    pub fn wire_name(&self) -> &'static str {
        match self {
            SensorField::UsageHours => "horas_uso",
            SensorField::TemperatureC => "temperatura_c",
            SensorField::VibrationMmS => "vibracao_mms",
            SensorField::CurrentA => "corrente_a",
            SensorField::PowerFactor => "fator_potencia",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SensorField::UsageHours => "Horas de Uso",
            SensorField::TemperatureC => "Temperatura (°C)",
            SensorField::VibrationMmS => "Vibração (mm/s)",
            SensorField::CurrentA => "Corrente (A)",
            SensorField::PowerFactor => "Fator de Potência",
        }
    }
}

impl fmt::Display for SensorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sensor field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for SensorField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horas_uso" | "usage_hours" | "hours" => Ok(SensorField::UsageHours),
            "temperatura_c" | "temperature_c" | "temperature" => Ok(SensorField::TemperatureC),
            "vibracao_mms" | "vibration_mm_s" | "vibration" => Ok(SensorField::VibrationMmS),
            "corrente_a" | "current_a" | "current" => Ok(SensorField::CurrentA),
            "fator_potencia" | "power_factor" | "pf" => Ok(SensorField::PowerFactor),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reading() {
        let reading = SensorReading::default();
        assert_eq!(reading.usage_hours, 5000.0);
        assert_eq!(reading.temperature_c, 60.0);
        assert_eq!(reading.vibration_mm_s, 3.0);
        assert_eq!(reading.current_a, 15.0);
        assert_eq!(reading.power_factor, 0.90);
    }

    #[test]
    fn test_serializes_with_service_names() {
        let json = serde_json::to_value(SensorReading::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "horas_uso": 5000.0,
                "temperatura_c": 60.0,
                "vibracao_mms": 3.0,
                "corrente_a": 15.0,
                "fator_potencia": 0.90
            })
        );
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let reading = SensorReading::default().with(SensorField::CurrentA, f64::NAN);
        let json = serde_json::to_value(reading).unwrap();
        assert!(json["corrente_a"].is_null());
    }

    #[test]
    fn test_parse_field_names() {
        for field in SensorField::ALL {
            assert_eq!(field.wire_name().parse::<SensorField>(), Ok(field));
        }
        assert_eq!("Temperature".parse::<SensorField>(), Ok(SensorField::TemperatureC));
        assert!("pressure".parse::<SensorField>().is_err());
    }
}
