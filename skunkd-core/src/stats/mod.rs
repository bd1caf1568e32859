//! Cribbage hand scoring statistics.
//!
//! Lookup helpers over the frozen tables in [`tables`]. Everything here is
//! a pure function of constant data.

pub mod tables;

use std::ops::RangeInclusive;

pub use tables::{
    AVG_SCORE, COMPONENT_AVERAGES, Component, DISTRIBUTION, IMPOSSIBLE_SCORES, MAX_SCORE,
    REFERENCE_ODDS, ReferenceOdds, TIERS, TOTAL_HANDS, Tier,
};

/// Every score on the chart axis, possible or not.
#[must_use]
pub const fn scores() -> RangeInclusive<u8> {
    0..=MAX_SCORE
}

/// Number of combinations producing exactly `score` (zero if impossible).
#[must_use]
pub fn count(score: u8) -> u64 {
    DISTRIBUTION
        .iter()
        .find(|(s, _)| *s == score)
        .map_or(0, |(_, c)| *c)
}

/// Whether any hand can produce `score`.
#[must_use]
pub fn is_possible(score: u8) -> bool {
    count(score) > 0
}

/// Sum of all frequencies in the distribution.
#[must_use]
pub fn distribution_total() -> u64 {
    DISTRIBUTION.iter().map(|(_, c)| c).sum()
}

/// Number of combinations whose score satisfies `pred`.
#[must_use]
pub fn count_where(pred: impl Fn(u8) -> bool) -> u64 {
    DISTRIBUTION
        .iter()
        .filter(|(s, _)| pred(*s))
        .map(|(_, c)| c)
        .sum()
}

/// Number of combinations scoring at least `threshold`.
#[must_use]
pub fn count_at_least(threshold: u8) -> u64 {
    count_where(|s| s >= threshold)
}

/// Number of combinations scoring within `low..=high`.
#[must_use]
pub fn count_in_range(low: u8, high: u8) -> u64 {
    count_where(|s| (low..=high).contains(&s))
}

/// Share of all combinations, as a percentage.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(count: u64) -> f64 {
    count as f64 / TOTAL_HANDS as f64 * 100.0
}

/// Odds expressed as "1 in N". `None` for impossible outcomes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn one_in(count: u64) -> Option<f64> {
    (count > 0).then(|| TOTAL_HANDS as f64 / count as f64)
}

/// `P(score >= threshold)` as a percentage, for every threshold on the axis.
#[must_use]
pub fn cumulative_at_least() -> Vec<(u8, f64)> {
    scores()
        .map(|t| (t, percentage(count_at_least(t))))
        .collect()
}

/// Mean hand score computed from the distribution.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean() -> f64 {
    let weighted: u64 = DISTRIBUTION.iter().map(|(s, c)| u64::from(*s) * c).sum();
    weighted as f64 / TOTAL_HANDS as f64
}

/// Combinations with an even score and with an odd score.
#[must_use]
pub fn parity_totals() -> (u64, u64) {
    (count_where(|s| s % 2 == 0), count_where(|s| s % 2 != 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distribution_sums_to_grand_total() {
        assert_eq!(distribution_total(), TOTAL_HANDS);
    }

    #[test]
    fn impossible_scores_are_absent() {
        for score in IMPOSSIBLE_SCORES {
            assert!(!is_possible(score), "score {score} should be impossible");
        }
        let possible = scores().filter(|s| is_possible(*s)).count();
        assert_eq!(possible, DISTRIBUTION.len());
        assert_eq!(possible + IMPOSSIBLE_SCORES.len(), usize::from(MAX_SCORE) + 1);
    }

    #[test]
    fn distribution_is_sorted_by_score() {
        assert!(DISTRIBUTION.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn mean_matches_published_average() {
        assert!((mean() - AVG_SCORE).abs() < 1e-4, "mean = {}", mean());
    }

    #[test]
    fn percentages_sum_to_100() {
        let sum: f64 = scores().map(|s| percentage(count(s))).sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum = {sum}");
    }

    #[test]
    fn cumulative_starts_at_100_and_ends_at_perfect_hand() {
        let cumulative = cumulative_at_least();
        assert_eq!(cumulative.len(), 30);
        assert!((cumulative[0].1 - 100.0).abs() < 1e-9);
        assert!((cumulative[29].1 - percentage(4)).abs() < 1e-12);
    }

    #[test]
    fn cumulative_is_non_increasing() {
        let cumulative = cumulative_at_least();
        assert!(cumulative.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn tiers_cover_every_combination() {
        let covered: u64 = TIERS.iter().map(|t| count_in_range(t.low, t.high)).sum();
        assert_eq!(covered, TOTAL_HANDS);
        assert!(TIERS.windows(2).all(|w| w[0].high < w[1].low));
    }

    #[test]
    fn parity_split() {
        let (even, odd) = parity_totals();
        assert_eq!(even + odd, TOTAL_HANDS);
        assert_eq!(even, 10_485_388);
        assert_eq!(odd, 2_509_412);
    }

    #[test]
    fn perfect_hand_odds() {
        assert_eq!(one_in(count(29)), Some(3_248_700.0));
        assert_eq!(one_in(count(19)), None);
    }

    #[test]
    fn seventeen_plus() {
        assert_eq!(count_at_least(17), 29_028);
    }

    #[test]
    fn component_averages_sum_to_mean() {
        let sum: f64 = COMPONENT_AVERAGES.iter().map(|c| c.average).sum();
        assert!((sum - AVG_SCORE).abs() < 1e-3, "sum = {sum}");
    }

    proptest! {
        #[test]
        fn count_at_least_is_monotone(a in 0u8..=40, b in 0u8..=40) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(count_at_least(lo) >= count_at_least(hi));
        }

        #[test]
        fn range_counts_partition(split in 0u8..MAX_SCORE) {
            let below = count_in_range(0, split);
            let above = count_at_least(split + 1);
            prop_assert_eq!(below + above, TOTAL_HANDS);
        }
    }
}
