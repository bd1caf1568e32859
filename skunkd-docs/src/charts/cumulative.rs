//! "Score X or better" cumulative probability curve.

use skunkd_core::stats::{self, MAX_SCORE};

use super::figure::{Annotation, Axis, Datum, Figure, Font, Layout, Line, Marker, Scatter};
use super::theme::{PURPLE, PURPLE_FILL, TEXT_COLOR, base_layout, chart_title, titled_axis};

/// Thresholds called out on the curve.
const MILESTONES: [u8; 8] = [0, 2, 6, 8, 12, 16, 20, 24];

/// Milestones past this threshold point their label left so it stays on the plot.
const FLIP_LABEL_AT: u8 = 15;

pub fn figure() -> Figure {
    let curve = stats::cumulative_at_least();

    let trace = Scatter {
        x: curve.iter().map(|&(t, _)| Datum::from(t)).collect(),
        y: curve.iter().map(|&(_, p)| Datum::from(p)).collect(),
        mode: Some("lines+markers".into()),
        line: Some(Line {
            color: Some(PURPLE.into()),
            width: Some(3.0),
            dash: None,
        }),
        marker: Some(Marker {
            color: Some(PURPLE.into()),
            size: Some(6.0),
            ..Marker::default()
        }),
        fill: Some("tozeroy".into()),
        fillcolor: Some(PURPLE_FILL.into()),
        hovertemplate: Some("Score %{x} or better: %{y:.1f}%<extra></extra>".into()),
    };

    let annotations = MILESTONES
        .iter()
        .map(|&score| {
            let pct = stats::percentage(stats::count_at_least(score));
            let ax = if score < FLIP_LABEL_AT { 30.0 } else { -40.0 };
            Annotation::arrow(
                f64::from(score),
                pct,
                format!("<b>{pct:.1}%</b><br>{}", caption(score)),
                ax,
                -30.0,
            )
            .font(Font::sized(9.0, TEXT_COLOR))
            .boxed("rgba(0,0,0,0.5)", 3.0)
        })
        .collect();

    Figure::new(Layout {
        title: Some(chart_title(
            "'What Are My Odds?' \u{2014} Cumulative Score Probability",
            "Chance of scoring at least X points in any given hand",
        )),
        xaxis: Some(Axis {
            dtick: Some(2.0),
            range: Some([-0.5, f64::from(MAX_SCORE) + 0.5]),
            ..titled_axis("Minimum Score Threshold")
        }),
        yaxis: Some(Axis {
            range: Some([0.0, 105.0]),
            ..titled_axis("Probability (%)")
        }),
        annotations,
        height: Some(500),
        showlegend: Some(false),
        ..base_layout()
    })
    .with_trace(trace)
}

fn caption(score: u8) -> String {
    if score == 0 {
        "Every hand scores<br>at least 0".to_string()
    } else {
        format!("score {score}+")
    }
}
