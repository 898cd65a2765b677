// Domain layer - readings, diagnoses, history and chart models
pub mod chart;
pub mod diagnosis;
pub mod history;
pub mod reading;
