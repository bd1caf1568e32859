//! Frozen hand scoring tables.
//!
//! Produced by exhaustive enumeration of every (hand, starter)
//! combination and checked against published reference counts. These are
//! fixtures: nothing in this workspace re-derives them.

/// Number of distinct (four-card hand, starter) combinations.
pub const TOTAL_HANDS: u64 = 12_994_800;

/// Highest achievable hand score.
pub const MAX_SCORE: u8 = 29;

/// Scores in `0..=MAX_SCORE` that no hand can produce.
pub const IMPOSSIBLE_SCORES: [u8; 4] = [19, 25, 26, 27];

/// Published average hand score, to four decimal places.
pub const AVG_SCORE: f64 = 4.7692;

/// Hand score → number of combinations producing it.
///
/// Impossible scores are absent. Sorted by score.
pub const DISTRIBUTION: &[(u8, u64)] = &[
    (0, 1_009_008),
    (1, 99_792),
    (2, 2_813_796),
    (3, 505_008),
    (4, 2_855_676),
    (5, 697_508),
    (6, 1_800_268),
    (7, 751_324),
    (8, 1_137_236),
    (9, 361_224),
    (10, 388_740),
    (11, 51_680),
    (12, 317_340),
    (13, 19_656),
    (14, 90_100),
    (15, 9_168),
    (16, 58_248),
    (17, 11_196),
    (18, 2_708),
    (20, 8_068),
    (21, 2_496),
    (22, 444),
    (23, 356),
    (24, 3_680),
    (28, 76),
    (29, 4),
];

/// A scoring component and its mean contribution per hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    /// Display name.
    pub name: &'static str,
    /// Average points per hand.
    pub average: f64,
    /// One-line explanation of what scores.
    pub description: &'static str,
}

/// Average contribution of each scoring component.
pub const COMPONENT_AVERAGES: &[Component] = &[
    Component {
        name: "Fifteens",
        average: 2.6061,
        description: "Card combos summing to 15 (2pts each)",
    },
    Component {
        name: "Pairs",
        average: 1.1765,
        description: "Matching ranks (2pts per pair)",
    },
    Component {
        name: "Runs",
        average: 0.8700,
        description: "3+ consecutive ranks",
    },
    Component {
        name: "Flush",
        average: 0.0442,
        description: "4-5 cards of same suit",
    },
    Component {
        name: "Nobs",
        average: 0.0724,
        description: "Jack in hand matching starter suit",
    },
];

/// A contiguous band of hand scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// Display label.
    pub label: &'static str,
    /// Lowest score in the tier (inclusive).
    pub low: u8,
    /// Highest score in the tier (inclusive).
    pub high: u8,
    /// Plain-language frequency shown on hover.
    pub comparison: &'static str,
}

/// Hand quality tiers, lowest first. Together they cover every possible score.
pub const TIERS: &[Tier] = &[
    Tier {
        label: "Zero ('19')",
        low: 0,
        high: 0,
        comparison: "About 1 in 13 hands",
    },
    Tier {
        label: "Low (1-4)",
        low: 1,
        high: 4,
        comparison: "Nearly half of all hands (48%)",
    },
    Tier {
        label: "Medium (5-8)",
        low: 5,
        high: 8,
        comparison: "About 1 in 3 hands",
    },
    Tier {
        label: "Good (9-12)",
        low: 9,
        high: 12,
        comparison: "About 1 in 11 hands",
    },
    Tier {
        label: "Great (13-16)",
        low: 13,
        high: 16,
        comparison: "About 1 in 73 hands",
    },
    Tier {
        label: "Exceptional (17-24)",
        low: 17,
        high: 24,
        comparison: "About 1 in 480 hands",
    },
    Tier {
        label: "Legendary (28-29)",
        low: 28,
        high: 29,
        comparison: "Only 80 hands out of 13 million",
    },
];

/// A real-world event with published "1 in N" odds, for scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceOdds {
    /// Display label.
    pub label: &'static str,
    /// N in "1 in N".
    pub one_in: f64,
}

pub const REFERENCE_ODDS: &[ReferenceOdds] = &[
    ReferenceOdds {
        label: "Poker: Royal Flush",
        one_in: 649_740.0,
    },
    ReferenceOdds {
        label: "Struck by lightning (per year)",
        one_in: 1_222_000.0,
    },
    ReferenceOdds {
        label: "Hole in one (amateur)",
        one_in: 12_500.0,
    },
    ReferenceOdds {
        label: "Four-leaf clover (per clover)",
        one_in: 5_000.0,
    },
];
