// Library exports for testing
pub mod app;
pub mod cli;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod types;
pub mod ui;
