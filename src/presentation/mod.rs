// Presentation layer - views and terminal commands
pub mod diagnostic_view;
pub mod handlers;
pub mod terminal;
pub mod trend_view;
