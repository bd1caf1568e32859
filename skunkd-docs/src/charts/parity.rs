//! Even versus odd scores: split donut plus per-score overlay bars.

use skunkd_core::stats;

use super::figure::{
    Axis, Bar, Datum, Domain, Figure, Font, Layout, Legend, Line, Marker, Pie,
};
use super::theme::{BG_COLOR, base_layout, chart_title, panel_title, titled_axis, two_columns};

const EVEN_COLOR: &str = "#3498db";
const ODD_COLOR: &str = "#e74c3c";

const PIE_PANEL_SHARE: f64 = 0.35;

/// Per-score percentages with every score of the other parity zeroed.
fn parity_series(even: bool) -> Vec<Datum> {
    stats::scores()
        .map(|s| {
            if (s % 2 == 0) == even {
                stats::percentage(stats::count(s))
            } else {
                0.0
            }
        })
        .map(Datum::from)
        .collect()
}

fn parity_bar(even: bool) -> Bar {
    let (name, color) = if even { ("Even", EVEN_COLOR) } else { ("Odd", ODD_COLOR) };
    Bar {
        x: stats::scores().map(Datum::from).collect(),
        y: parity_series(even),
        name: Some(name.into()),
        marker: Some(Marker {
            color: Some(color.into()),
            ..Marker::default()
        }),
        opacity: Some(0.85),
        hovertemplate: Some(format!("Score %{{x}}: %{{y:.2f}}%<extra>{name}</extra>")),
        xaxis: Some("x2".into()),
        yaxis: Some("y2".into()),
        ..Bar::default()
    }
}

#[allow(clippy::cast_precision_loss)]
pub fn figure() -> Figure {
    let (left, right) = two_columns(PIE_PANEL_SHARE);
    let (even, odd) = stats::parity_totals();

    let pie = Pie {
        labels: vec!["Even Scores".into(), "Odd Scores".into()],
        values: vec![even as f64, odd as f64],
        hole: Some(0.4),
        marker: Some(Marker {
            colors: Some(vec![EVEN_COLOR.into(), ODD_COLOR.into()]),
            line: Some(Line {
                color: Some(BG_COLOR.into()),
                width: Some(2.0),
                dash: None,
            }),
            ..Marker::default()
        }),
        textinfo: Some("label+percent".into()),
        textfont: Some(Font {
            size: Some(12.0),
            ..Font::default()
        }),
        hovertemplate: Some("%{label}: %{value:,} hands (%{percent})<extra></extra>".into()),
        domain: Some(Domain {
            x: left,
            y: [0.0, 1.0],
        }),
        ..Pie::default()
    };

    // The bars live on the second axis pair so the pie panel has no axes.
    Figure::new(Layout {
        title: Some(chart_title(
            "The Even-Score Advantage",
            "Cribbage heavily favors even scores \u{2014} fifteens (2pts) and pairs (2pts) are the dominant scoring mechanisms",
        )),
        xaxis: None,
        yaxis: None,
        xaxis2: Some(Axis {
            dtick: Some(2.0),
            domain: Some(right),
            anchor: Some("y2".into()),
            ..titled_axis("Score")
        }),
        yaxis2: Some(Axis {
            anchor: Some("x2".into()),
            ..titled_axis("% of Hands")
        }),
        annotations: vec![
            panel_title(left, "Even vs Odd Split"),
            panel_title(right, "Score-by-Score Comparison"),
        ],
        height: Some(450),
        barmode: Some("overlay".into()),
        legend: Some(Legend {
            x: Some(0.85),
            y: Some(0.95),
            bgcolor: Some("rgba(0,0,0,0.5)".into()),
        }),
        ..base_layout()
    })
    .with_trace(pie)
    .with_trace(parity_bar(true))
    .with_trace(parity_bar(false))
}
