//! Application handlers - commands and queries over the domain core.

pub mod assessment;
pub mod insights;
