pub mod compiled;
pub mod config;
pub mod error;
pub mod metrics;
