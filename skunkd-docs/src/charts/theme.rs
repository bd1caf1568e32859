//! Dark chart theme shared by every statistics chart.

use super::figure::{Annotation, Axis, Font, Layout, Margin, Title};

pub const BG_COLOR: &str = "#0d1117";
pub const CARD_BG: &str = "#161b22";
pub const TEXT_COLOR: &str = "#c9d1d9";
pub const GRID_COLOR: &str = "#21262d";
pub const FONT_FAMILY: &str = "'JetBrains Mono', 'Fira Code', monospace";

pub const GOLD: &str = "#f5a623";
pub const PURPLE: &str = "#6c3fc5";
pub const PURPLE_FILL: &str = "rgba(108, 63, 197, 0.15)";

/// Bar color for scores that cannot occur.
pub const IMPOSSIBLE_BAR: &str = "#2d333b";

/// One color per entry of `skunkd_core::stats::TIERS`, in the same order.
pub const TIER_COLORS: [&str; 7] = [
    "#6c757d", // zero
    "#3498db", // low
    "#2ecc71", // medium
    "#f39c12", // good
    "#e67e22", // great
    "#e74c3c", // exceptional
    "#9b59b6", // legendary
];

/// Tier color for a hand score.
#[must_use]
pub const fn score_color(score: u8) -> &'static str {
    let tier = match score {
        0 => 0,
        1..=4 => 1,
        5..=8 => 2,
        9..=12 => 3,
        13..=16 => 4,
        17..=24 => 5,
        _ => 6,
    };
    TIER_COLORS[tier]
}

/// Axis with themed grid and zero lines.
#[must_use]
pub fn axis() -> Axis {
    Axis {
        gridcolor: Some(GRID_COLOR.into()),
        zerolinecolor: Some(GRID_COLOR.into()),
        ..Axis::default()
    }
}

/// Themed axis with a title.
#[must_use]
pub fn titled_axis(title: &str) -> Axis {
    Axis {
        title: Some(Title::from(title)),
        ..axis()
    }
}

/// Two-line chart title: headline plus a smaller subtitle.
#[must_use]
pub fn chart_title(headline: &str, subtitle: &str) -> Title {
    Title {
        text: format!("{headline}<br><sub>{subtitle}</sub>"),
        font: Some(Font {
            size: Some(18.0),
            ..Font::default()
        }),
    }
}

/// Font for panel titles in two-panel figures.
#[must_use]
pub fn panel_title_font() -> Font {
    Font::sized(13.0, TEXT_COLOR)
}

/// Gap between the two panels of a side-by-side figure, as a paper fraction.
pub const PANEL_SPACING: f64 = 0.1;

/// Paper x-domains for two side-by-side panels.
///
/// `left_share` is the left panel's fraction of the width left over after
/// the gap.
#[must_use]
pub fn two_columns(left_share: f64) -> ([f64; 2], [f64; 2]) {
    let split = (1.0 - PANEL_SPACING) * left_share;
    ([0.0, split], [split + PANEL_SPACING, 1.0])
}

/// Panel title centered above a panel's x-domain.
#[must_use]
pub fn panel_title(domain: [f64; 2], text: &str) -> Annotation {
    Annotation {
        xanchor: Some("center".into()),
        yanchor: Some("bottom".into()),
        ..Annotation::paper(f64::midpoint(domain[0], domain[1]), 1.0, text)
    }
    .font(panel_title_font())
}

/// Base layout; chart builders override fields with struct update syntax.
#[must_use]
pub fn base_layout() -> Layout {
    Layout {
        font: Some(Font {
            family: Some(FONT_FAMILY.into()),
            size: None,
            color: Some(TEXT_COLOR.into()),
        }),
        paper_bgcolor: Some(BG_COLOR.into()),
        plot_bgcolor: Some(CARD_BG.into()),
        xaxis: Some(axis()),
        yaxis: Some(axis()),
        margin: Some(Margin {
            l: 70,
            r: 40,
            t: 80,
            b: 70,
        }),
        ..Layout::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skunkd_core::stats::TIERS;

    #[test]
    fn test_score_color_follows_tiers() {
        for (tier, color) in TIERS.iter().zip(TIER_COLORS) {
            for score in tier.low..=tier.high {
                assert_eq!(score_color(score), color, "score {score}");
            }
        }
    }

    #[test]
    fn test_score_color_boundaries() {
        assert_eq!(score_color(0), "#6c757d");
        assert_eq!(score_color(4), "#3498db");
        assert_eq!(score_color(5), "#2ecc71");
        assert_eq!(score_color(24), "#e74c3c");
        assert_eq!(score_color(29), "#9b59b6");
    }

    #[test]
    fn test_base_layout_json() {
        let v = serde_json::to_value(base_layout()).unwrap();
        assert_eq!(v["paper_bgcolor"], BG_COLOR);
        assert_eq!(v["plot_bgcolor"], CARD_BG);
        assert_eq!(v["xaxis"]["gridcolor"], GRID_COLOR);
        assert_eq!(v["margin"]["l"], 70);
        assert_eq!(v["font"]["family"], FONT_FAMILY);
    }

    #[test]
    fn test_two_columns() {
        let (left, right) = two_columns(0.55);
        assert!((left[1] - 0.495).abs() < 1e-9);
        assert!((right[0] - 0.595).abs() < 1e-9);
        assert!((right[1] - 1.0).abs() < f64::EPSILON);
        assert!((right[0] - left[1] - PANEL_SPACING).abs() < 1e-9);
    }

    #[test]
    fn test_panel_title_centered() {
        let ann = panel_title([0.0, 0.5], "Left");
        assert_eq!(ann.x, Some(0.25));
        assert_eq!(ann.y, Some(1.0));
        assert_eq!(ann.xref.as_deref(), Some("paper"));
    }

    #[test]
    fn test_chart_title_markup() {
        let t = chart_title("Head", "sub");
        assert_eq!(t.text, "Head<br><sub>sub</sub>");
    }
}
