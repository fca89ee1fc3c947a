//! Library entry for Shelfwatch exposing the inventory core for the binary and integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod i18n;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;
