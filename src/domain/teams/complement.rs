//! Complementary-trait pairing tables.
//!
//! Fixed tables scoring how well two profiles complete each other:
//! opposite DISC traits, opposite Jungian axis letters, and complementary
//! VARK channels. Used by the mixed-team criterion to rank shuffles.

use crate::domain::assessment::{DiscTrait, JungianType, VarkStyle};

/// Points for a DISC opposite-trait pairing.
pub const DISC_PAIR_POINTS: i32 = 2;

/// Points per opposing Jungian axis.
pub const JUNGIAN_AXIS_POINTS: i32 = 1;

/// Points for a complementary VARK pairing.
pub const VARK_PAIR_POINTS: i32 = 1;

/// DISC traits considered opposites: task-driven with people-driven,
/// outgoing with reserved.
pub const DISC_OPPOSITES: [(DiscTrait, DiscTrait); 2] = [
    (DiscTrait::Dominance, DiscTrait::Steadiness),
    (DiscTrait::Influence, DiscTrait::Conscientiousness),
];

/// VARK styles that cover each other's gaps.
pub const VARK_COMPLEMENTS: [(VarkStyle, VarkStyle); 2] = [
    (VarkStyle::Visual, VarkStyle::Auditory),
    (VarkStyle::ReadingWriting, VarkStyle::Kinesthetic),
];

/// True when the two DISC traits form an opposite pair, in either order.
pub fn disc_opposed(a: DiscTrait, b: DiscTrait) -> bool {
    DISC_OPPOSITES
        .iter()
        .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
}

/// True when the two VARK styles complement each other.
///
/// Multimodal complements every single style, since it bridges channels.
pub fn vark_complementary(a: VarkStyle, b: VarkStyle) -> bool {
    if a == VarkStyle::Multimodal || b == VarkStyle::Multimodal {
        return a != b;
    }
    VARK_COMPLEMENTS
        .iter()
        .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
}

/// Complementary score for one pair of profiles.
///
/// Sum of the three tables: DISC opposite pairing, count of opposing
/// Jungian axes, VARK complement pairing. Higher means the pair covers
/// more ground together.
pub fn pair_score(
    disc_a: DiscTrait,
    disc_b: DiscTrait,
    jungian_a: &JungianType,
    jungian_b: &JungianType,
    vark_a: VarkStyle,
    vark_b: VarkStyle,
) -> i32 {
    let mut score = 0;
    if disc_opposed(disc_a, disc_b) {
        score += DISC_PAIR_POINTS;
    }
    score += jungian_a.opposing_axes(jungian_b) as i32 * JUNGIAN_AXIS_POINTS;
    if vark_complementary(vark_a, vark_b) {
        score += VARK_PAIR_POINTS;
    }
    score
}
