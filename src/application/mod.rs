// Application layer - panel state and request orchestration
pub mod dashboard_state;
pub mod history_store;
pub mod panel_session;
pub mod prediction_client;
pub mod request_controller;
pub mod sensor_form;

#[cfg(test)]
pub mod test_support;
