//! Configuration module.

pub mod insights;

pub use insights::InsightsConfig;
