pub mod agenda;
pub mod config;
pub mod events;
pub mod provider;
pub mod ui;
