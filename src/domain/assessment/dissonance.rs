//! Dissonance detection between self-reported and behavioral signals.
//!
//! A flat list of trait-pair rules, each flagging a Jungian letter that
//! conflicts with a DISC dominant trait. This is deliberately not an
//! inference engine: adding a rule means adding an entry to the list.

use serde::{Deserialize, Serialize};

use super::disc::{DiscProfile, DiscTrait};
use super::jungian::JungianType;

/// One conflicting trait pair: a Jungian axis letter against a DISC
/// dominant trait.
#[derive(Debug, Clone, Copy)]
pub struct ConflictRule {
    /// Letter that must appear in the Jungian type code.
    pub jungian_letter: char,
    /// DISC dominant trait that conflicts with it.
    pub disc_trait: DiscTrait,
    /// Short description of what the conflict signals.
    pub label: &'static str,
}

/// The rule list. Order is the order findings are reported in.
pub const CONFLICT_RULES: [ConflictRule; 1] = [ConflictRule {
    jungian_letter: 'I',
    disc_trait: DiscTrait::Dominance,
    label: "introversão autodeclarada com padrão comportamental de alta assertividade",
}];

/// Result of dissonance detection for one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DissonanceFinding {
    pub alert: bool,
    pub notes: Option<String>,
}

/// Dissonance detection functions.
pub struct DissonanceDetector;

impl DissonanceDetector {
    /// Checks a profile's Jungian type against its DISC dominant trait.
    ///
    /// Returns an alert with a templated note naming both conflicting
    /// traits when any rule matches; multiple matches concatenate notes.
    pub fn detect(jungian: &JungianType, disc: &DiscProfile) -> DissonanceFinding {
        let notes: Vec<String> = CONFLICT_RULES
            .iter()
            .filter(|rule| {
                jungian.as_str().contains(rule.jungian_letter) && disc.dominant == rule.disc_trait
            })
            .map(|rule| {
                format!(
                    "Possível dissonância: perfil Jung '{}' (contém '{}') com traço DISC dominante {} — {}.",
                    jungian, rule.jungian_letter, rule.disc_trait, rule.label
                )
            })
            .collect();

        if notes.is_empty() {
            DissonanceFinding::default()
        } else {
            DissonanceFinding {
                alert: true,
                notes: Some(notes.join(" ")),
            }
        }
    }
}
