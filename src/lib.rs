pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod normalize;
pub mod server;
pub mod views;

// Use cases and the port they depend on
pub mod app;
// Adapters for the outside world
pub mod infra;
