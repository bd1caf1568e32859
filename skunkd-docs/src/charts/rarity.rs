//! Rare cribbage hands against real-world odds, on a log scale.

use skunkd_core::stats::{self, REFERENCE_ODDS};

use super::figure::{Axis, Bar, Color, Datum, Figure, Font, Layout, Margin, Marker};
use super::theme::{TEXT_COLOR, axis, base_layout, chart_title, titled_axis};
use crate::escape::group_thousands;

/// Colors for `REFERENCE_ODDS`, in the same order.
const REFERENCE_COLORS: [&str; 4] = ["#2ecc71", "#3498db", "#2ecc71", "#27ae60"];

/// Individual rare scores. An aggregate "17 and up" bar is added alongside.
const RARE_SCORES: [(u8, &str, &str); 7] = [
    (29, "Score 29 (perfect)", "#9b59b6"),
    (28, "Score 28", "#9b59b6"),
    (24, "Score 24", "#e74c3c"),
    (23, "Score 23", "#e74c3c"),
    (22, "Score 22", "#e74c3c"),
    (21, "Score 21", "#e67e22"),
    (20, "Score 20", "#e67e22"),
];

const HIGH_HAND_THRESHOLD: u8 = 17;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    label: String,
    one_in: f64,
    color: &'static str,
}

/// Every bar, rarest first.
fn entries() -> Vec<Entry> {
    let high_hands = stats::count_at_least(HIGH_HAND_THRESHOLD);
    let cribbage = RARE_SCORES
        .iter()
        .map(|&(score, label, color)| (label.to_string(), stats::count(score), color))
        .chain(std::iter::once((
            format!("Score {HIGH_HAND_THRESHOLD}+"),
            high_hands,
            "#f39c12",
        )))
        .filter_map(|(label, count, color)| {
            stats::one_in(count).map(|one_in| Entry {
                label,
                one_in,
                color,
            })
        });

    let reference = REFERENCE_ODDS
        .iter()
        .zip(REFERENCE_COLORS)
        .map(|(odds, color)| Entry {
            label: odds.label.to_string(),
            one_in: odds.one_in,
            color,
        });

    let mut entries: Vec<Entry> = cribbage.chain(reference).collect();
    entries.sort_by(|a, b| b.one_in.total_cmp(&a.one_in));
    entries
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn odds_label(one_in: f64) -> String {
    format!("1 in {}", group_thousands(one_in as u64))
}

pub fn figure() -> Figure {
    let entries = entries();

    let bar = Bar {
        x: entries.iter().map(|e| Datum::from(e.one_in)).collect(),
        y: entries.iter().map(|e| Datum::from(e.label.as_str())).collect(),
        orientation: Some("h".into()),
        marker: Some(Marker {
            color: Some(Color::PerPoint(
                entries.iter().map(|e| e.color.to_string()).collect(),
            )),
            ..Marker::default()
        }),
        text: Some(entries.iter().map(|e| odds_label(e.one_in)).collect()),
        textposition: Some("outside".into()),
        textfont: Some(Font::sized(10.0, TEXT_COLOR)),
        hovertemplate: Some("%{y}: 1 in %{x:,.0f}<extra></extra>".into()),
        ..Bar::default()
    };

    Figure::new(Layout {
        title: Some(chart_title(
            "How Rare Is That Hand? \u{2014} Cribbage vs Real Life",
            "Logarithmic scale | Cribbage hands in purple/red, real-world events in green/blue",
        )),
        xaxis: Some(Axis {
            axis_type: Some("log".into()),
            ..titled_axis("Odds (1 in X)")
        }),
        yaxis: Some(Axis {
            autorange: Some("reversed".into()),
            ..axis()
        }),
        margin: Some(Margin {
            l: 160,
            r: 100,
            t: 80,
            b: 60,
        }),
        height: Some(500),
        showlegend: Some(false),
        ..base_layout()
    })
    .with_trace(bar)
}
