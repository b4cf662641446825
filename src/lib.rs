//! Cognita Insights - Learning Profile Scoring and Class Aggregation
//!
//! This crate implements the scoring core of the Cognita platform: it turns
//! raw questionnaire answers (VARK, DISC, Jungian typology, Schwartz values)
//! into per-student learning profiles and synthesizes class-level insights
//! (learning compass, insight cards, team formation).

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
