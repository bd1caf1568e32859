//! Where the average hand's points come from: bar panel plus share donut.

use skunkd_core::stats::{AVG_SCORE, COMPONENT_AVERAGES, Component};

use super::figure::{Axis, Bar, Color, Datum, Domain, Figure, Font, Layout, Line, Marker, Pie};
use super::theme::{
    BG_COLOR, TEXT_COLOR, axis, base_layout, chart_title, panel_title, two_columns,
};

/// One color per entry of `COMPONENT_AVERAGES`, in the same order.
const COMPONENT_COLORS: [&str; 5] = ["#e74c3c", "#3498db", "#2ecc71", "#f39c12", "#9b59b6"];

const BAR_PANEL_SHARE: f64 = 0.55;

fn hover_text(component: &Component) -> String {
    let share = component.average / AVG_SCORE * 100.0;
    format!(
        "<b>{}</b><br>Average: {:.4} pts/hand ({share:.1}%)<br>{}",
        component.name, component.average, component.description
    )
}

pub fn figure() -> Figure {
    let (left, right) = two_columns(BAR_PANEL_SHARE);
    let names: Vec<String> = COMPONENT_AVERAGES.iter().map(|c| c.name.to_string()).collect();
    let averages: Vec<f64> = COMPONENT_AVERAGES.iter().map(|c| c.average).collect();
    let colors: Vec<String> = COMPONENT_COLORS.iter().map(ToString::to_string).collect();
    let hover: Vec<String> = COMPONENT_AVERAGES.iter().map(hover_text).collect();

    let bar = Bar {
        x: names.iter().map(|n| Datum::from(n.as_str())).collect(),
        y: averages.iter().map(|&v| Datum::from(v)).collect(),
        marker: Some(Marker {
            color: Some(Color::PerPoint(colors.clone())),
            ..Marker::default()
        }),
        text: Some(averages.iter().map(|v| format!("{v:.2}")).collect()),
        textposition: Some("outside".into()),
        textfont: Some(Font::sized(12.0, TEXT_COLOR)),
        hovertext: Some(hover.clone()),
        hoverinfo: Some("text".into()),
        showlegend: Some(false),
        ..Bar::default()
    };

    let pie = Pie {
        labels: names,
        values: averages,
        hole: Some(0.3),
        marker: Some(Marker {
            colors: Some(colors),
            line: Some(Line {
                color: Some(BG_COLOR.into()),
                width: Some(2.0),
                dash: None,
            }),
            ..Marker::default()
        }),
        textinfo: Some("label+percent".into()),
        textfont: Some(Font {
            size: Some(10.0),
            ..Font::default()
        }),
        hovertext: Some(hover),
        hoverinfo: Some("text".into()),
        domain: Some(Domain {
            x: right,
            y: [0.0, 1.0],
        }),
        ..Pie::default()
    };

    Figure::new(Layout {
        title: Some(chart_title(
            "Where Do Cribbage Points Come From?",
            &format!(
                "Breakdown of the average {AVG_SCORE:.2}-point hand across all 12.99M combinations"
            ),
        )),
        xaxis: Some(Axis {
            domain: Some(left),
            anchor: Some("y".into()),
            ..axis()
        }),
        yaxis: Some(Axis {
            anchor: Some("x".into()),
            ..axis()
        }),
        annotations: vec![
            panel_title(left, "Average Points per Hand"),
            panel_title(right, "Share of Total Score"),
        ],
        height: Some(450),
        showlegend: Some(false),
        ..base_layout()
    })
    .with_trace(bar)
    .with_trace(pie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn fig() -> Value {
        serde_json::to_value(figure()).unwrap()
    }

    #[test]
    fn test_two_panels_do_not_overlap() {
        let v = fig();
        let bar_end = v["layout"]["xaxis"]["domain"][1].as_f64().unwrap();
        let pie_start = v["data"][1]["domain"]["x"][0].as_f64().unwrap();
        assert!(bar_end < pie_start);
        assert_eq!(v["data"][0]["type"], "bar");
        assert_eq!(v["data"][1]["type"], "pie");
        assert_eq!(v["data"][1]["hole"], 0.3);
    }

    #[test]
    fn test_bar_values_and_labels() {
        let v = fig();
        let bar = &v["data"][0];
        assert_eq!(bar["x"][0], "Fifteens");
        assert_eq!(bar["y"][0], 2.6061);
        assert_eq!(bar["text"][2], "0.87");
    }

    #[test]
    fn test_hover_includes_description() {
        assert_eq!(
            hover_text(&COMPONENT_AVERAGES[0]),
            format!(
                "<b>Fifteens</b><br>Average: 2.6061 pts/hand (54.6%)<br>{}",
                COMPONENT_AVERAGES[0].description
            )
        );
    }

    #[test]
    fn test_panel_titles() {
        let v = fig();
        let anns = v["layout"]["annotations"].as_array().unwrap();
        assert_eq!(anns.len(), 2);
        assert_eq!(anns[0]["text"], "Average Points per Hand");
        assert_eq!(anns[1]["text"], "Share of Total Score");
        assert_eq!(anns[0]["font"]["size"], 13.0);
    }
}
