//! Hand quality tiers donut.

use skunkd_core::stats::{self, AVG_SCORE, TIERS};

use super::figure::{Annotation, Figure, Font, Layout, Line, Marker, Pie};
use super::theme::{BG_COLOR, TEXT_COLOR, TIER_COLORS, base_layout, chart_title};
use crate::escape::group_thousands;

#[allow(clippy::cast_precision_loss)]
pub fn figure() -> Figure {
    let counts: Vec<u64> = TIERS
        .iter()
        .map(|t| stats::count_in_range(t.low, t.high))
        .collect();

    let hover = TIERS
        .iter()
        .zip(&counts)
        .map(|(tier, &count)| {
            format!(
                "<b>{}</b><br>{} hands ({:.2}%)<br>{}",
                tier.label,
                group_thousands(count),
                stats::percentage(count),
                tier.comparison
            )
        })
        .collect();

    let pie = Pie {
        labels: TIERS.iter().map(|t| t.label.to_string()).collect(),
        values: counts.iter().map(|&c| c as f64).collect(),
        hole: Some(0.45),
        marker: Some(Marker {
            colors: Some(TIER_COLORS.iter().map(ToString::to_string).collect()),
            line: Some(Line {
                color: Some(BG_COLOR.into()),
                width: Some(2.0),
                dash: None,
            }),
            ..Marker::default()
        }),
        textinfo: Some("label+percent".into()),
        textposition: Some("outside".into()),
        textfont: Some(Font {
            size: Some(11.0),
            ..Font::default()
        }),
        hovertext: Some(hover),
        hoverinfo: Some("text".into()),
        sort: Some(false),
        ..Pie::default()
    };

    Figure::new(Layout {
        title: Some(chart_title(
            "Hand Quality Tiers",
            "How often does each caliber of hand show up?",
        )),
        annotations: vec![
            Annotation::paper(0.5, 0.5, format!("<b>Avg<br>{AVG_SCORE:.1}</b>"))
                .font(Font::sized(20.0, TEXT_COLOR)),
        ],
        height: Some(550),
        showlegend: Some(false),
        ..base_layout()
    })
    .with_trace(pie)
}
