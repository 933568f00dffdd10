pub mod app_config;
pub mod app_state;
pub mod cors;
pub mod database;
