//! Application layer - orchestrates ports and the domain core.

pub mod handlers;
