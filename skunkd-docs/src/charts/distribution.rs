//! Score distribution bar chart: share of hands at every score 0 to 29.

use skunkd_core::stats::{self, AVG_SCORE, IMPOSSIBLE_SCORES, MAX_SCORE, TOTAL_HANDS};

use super::figure::{Annotation, Axis, Bar, Color, Datum, Figure, Font, Layout, Line, Marker, Shape};
use super::theme::{
    GOLD, IMPOSSIBLE_BAR, TEXT_COLOR, base_layout, chart_title, score_color, titled_axis,
};
use crate::escape::group_thousands;

/// Counts below this get an explicit "1 in N" line in their hover text.
const ODDS_HOVER_BELOW: u64 = 100;

/// Bars at or above this percentage carry a value label.
const LABEL_MIN_PCT: f64 = 1.0;

pub fn figure() -> Figure {
    let scores: Vec<u8> = stats::scores().collect();
    let counts: Vec<u64> = scores.iter().map(|&s| stats::count(s)).collect();
    let pcts: Vec<f64> = counts.iter().map(|&c| stats::percentage(c)).collect();

    let colors = scores
        .iter()
        .zip(&counts)
        .map(|(&s, &c)| (if c > 0 { score_color(s) } else { IMPOSSIBLE_BAR }).to_string())
        .collect();

    let hover = scores
        .iter()
        .zip(&counts)
        .zip(&pcts)
        .map(|((&s, &c), &p)| hover_text(s, c, p))
        .collect();

    let labels = pcts
        .iter()
        .map(|&p| {
            if p >= LABEL_MIN_PCT {
                format!("{p:.1}%")
            } else {
                String::new()
            }
        })
        .collect();

    let bar = Bar {
        x: scores.iter().map(|&s| Datum::from(s)).collect(),
        y: pcts.iter().map(|&p| Datum::from(p)).collect(),
        marker: Some(Marker {
            color: Some(Color::PerPoint(colors)),
            ..Marker::default()
        }),
        text: Some(labels),
        textposition: Some("outside".into()),
        textfont: Some(Font::sized(10.0, TEXT_COLOR)),
        hovertext: Some(hover),
        hoverinfo: Some("text".into()),
        ..Bar::default()
    };

    let peak = pcts.iter().copied().fold(0.0, f64::max);

    Figure::new(Layout {
        title: Some(chart_title(
            "Cribbage Hand Score Distribution",
            &format!(
                "All {} possible hand+starter combinations | Validated against rubl.com",
                group_thousands(TOTAL_HANDS)
            ),
        )),
        xaxis: Some(Axis {
            dtick: Some(1.0),
            range: Some([-0.7, f64::from(MAX_SCORE) + 0.7]),
            ..titled_axis("Hand Score")
        }),
        yaxis: Some(titled_axis("Percentage of All Hands (%)")),
        annotations: annotations(&pcts, peak),
        shapes: vec![Shape::vline(
            AVG_SCORE,
            Line {
                color: Some(GOLD.into()),
                width: Some(2.0),
                dash: Some("dash".into()),
            },
        )],
        height: Some(550),
        showlegend: Some(false),
        ..base_layout()
    })
    .with_trace(bar)
}

fn hover_text(score: u8, count: u64, pct: f64) -> String {
    if count == 0 {
        format!("Score {score}: IMPOSSIBLE<br>Cannot be achieved in cribbage")
    } else if count < ODDS_HOVER_BELOW {
        format!(
            "Score {score}<br>{} hands ({pct:.4}%)<br>Odds: 1 in {}",
            group_thousands(count),
            group_thousands(TOTAL_HANDS / count)
        )
    } else {
        format!("Score {score}<br>{} hands ({pct:.2}%)", group_thousands(count))
    }
}

fn annotations(pcts: &[f64], peak: f64) -> Vec<Annotation> {
    let zero = pcts[0];
    let four = pcts[4];
    let perfect = stats::count(MAX_SCORE);

    let mut annotations = vec![
        Annotation::arrow(
            0.0,
            zero + 1.5,
            format!("<b>'19' Hand</b><br>{zero:.1}% score zero"),
            40.0,
            -40.0,
        )
        .font(Font::sized(10.0, score_color(0))),
        Annotation::arrow(
            4.0,
            four + 1.5,
            format!("<b>Most Common</b><br>{four:.0}% of all hands"),
            0.0,
            -45.0,
        )
        .font(Font::sized(10.0, score_color(4))),
        Annotation::arrow(
            f64::from(MAX_SCORE),
            0.8,
            format!(
                "<b>Perfect {MAX_SCORE}</b><br>Only {perfect} possible<br>1 in {}",
                group_thousands(TOTAL_HANDS / perfect.max(1))
            ),
            -50.0,
            -40.0,
        )
        .font(Font::sized(10.0, score_color(MAX_SCORE))),
    ];

    for score in IMPOSSIBLE_SCORES {
        annotations.push(Annotation::label(f64::from(score), 0.3, "X").font(Font {
            family: Some("Arial Black".into()),
            size: Some(14.0),
            color: Some("#e74c3c".into()),
        }));
    }

    annotations.push(
        Annotation::label(AVG_SCORE, peak * 0.85, format!("<b>Average: {AVG_SCORE:.2}</b>"))
            .font(Font::sized(11.0, GOLD))
            .boxed("rgba(0,0,0,0.6)", 4.0),
    );

    annotations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn fig() -> Value {
        serde_json::to_value(figure()).unwrap()
    }

    #[test]
    fn test_one_bar_per_score() {
        let v = fig();
        let bar = &v["data"][0];
        assert_eq!(bar["type"], "bar");
        assert_eq!(bar["x"].as_array().unwrap().len(), 30);
        assert_eq!(bar["y"].as_array().unwrap().len(), 30);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let v = fig();
        let sum: f64 = v["data"][0]["y"]
            .as_array()
            .unwrap()
            .iter()
            .map(|y| y.as_f64().unwrap())
            .sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_impossible_scores_are_marked() {
        let v = fig();
        let bar = &v["data"][0];
        for score in IMPOSSIBLE_SCORES {
            let i = usize::from(score);
            assert_eq!(bar["marker"]["color"][i], IMPOSSIBLE_BAR);
            assert!(bar["hovertext"][i].as_str().unwrap().contains("IMPOSSIBLE"));
        }
        let xs = v["layout"]["annotations"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|a| a["text"] == "X")
            .count();
        assert_eq!(xs, IMPOSSIBLE_SCORES.len());
    }

    #[test]
    fn test_hover_text_variants() {
        assert_eq!(
            hover_text(29, 4, stats::percentage(4)),
            "Score 29<br>4 hands (0.0000%)<br>Odds: 1 in 3,248,700"
        );
        assert_eq!(
            hover_text(4, 2_855_676, stats::percentage(2_855_676)),
            "Score 4<br>2,855,676 hands (21.98%)"
        );
        assert!(hover_text(19, 0, 0.0).starts_with("Score 19: IMPOSSIBLE"));
    }

    #[test]
    fn test_bar_labels_only_above_one_percent() {
        let v = fig();
        let text = v["data"][0]["text"].as_array().unwrap();
        assert_eq!(text[4], "22.0%");
        assert_eq!(text[29], "");
        assert_eq!(text[11], "");
    }

    #[test]
    fn test_key_score_annotations() {
        let v = fig();
        let texts: Vec<&str> = v["layout"]["annotations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["text"].as_str().unwrap())
            .collect();
        assert!(texts.contains(&"<b>'19' Hand</b><br>7.8% score zero"));
        assert!(texts.contains(&"<b>Most Common</b><br>22% of all hands"));
        assert!(texts.contains(&"<b>Perfect 29</b><br>Only 4 possible<br>1 in 3,248,700"));
        assert!(texts.contains(&"<b>Average: 4.77</b>"));
    }

    #[test]
    fn test_average_line() {
        let v = fig();
        let shape = &v["layout"]["shapes"][0];
        assert_eq!(shape["x0"], AVG_SCORE);
        assert_eq!(shape["line"]["dash"], "dash");
        assert_eq!(shape["line"]["color"], GOLD);
    }
}
