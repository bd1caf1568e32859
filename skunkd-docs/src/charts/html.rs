//! Standalone chart documents.

use super::figure::Figure;
use super::theme::BG_COLOR;
use crate::error::DocsError;
use crate::escape::{escape_html, escape_script_json};

/// Plotly.js bundle loaded by every chart page.
pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render a figure as a complete HTML document.
///
/// The Plotly library is referenced from `plotly_src`, not inlined; the
/// figure JSON is embedded and drawn with `Plotly.newPlot` on load.
///
/// # Errors
///
/// Returns `DocsError::Json` if the figure cannot be serialized.
pub fn render_chart_html(
    title: &str,
    figure: &Figure,
    plotly_src: &str,
) -> Result<String, DocsError> {
    let figure_json = escape_script_json(&figure.to_json()?);
    let title = escape_html(title);
    let plotly_src = escape_html(plotly_src);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script src="{plotly_src}" charset="utf-8"></script>
    <style>
        html, body {{ margin: 0; background: {BG_COLOR}; }}
        #chart {{ width: 100%; }}
    </style>
</head>
<body>
    <div id="chart"></div>
    <script>
    const FIGURE = {figure_json};
    Plotly.newPlot("chart", FIGURE.data, FIGURE.layout, {{"responsive": true}});
    </script>
</body>
</html>
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::figure::{Annotation, Layout};

    /// Pull the embedded figure JSON back out of a rendered page.
    fn embedded_figure(html: &str) -> serde_json::Value {
        let marker = "const FIGURE = ";
        let start = html.find(marker).unwrap() + marker.len();
        let end = start + html[start..].find(";\n").unwrap();
        serde_json::from_str(&html[start..end]).unwrap()
    }

    #[test]
    fn test_document_shape() {
        let html = render_chart_html("Test", &Figure::default(), DEFAULT_PLOTLY_SRC).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Test</title>"));
        assert!(html.contains(r#"<script src="https://cdn.plot.ly/plotly-2.35.2.min.js""#));
        assert!(html.contains(r#"Plotly.newPlot("chart", FIGURE.data, FIGURE.layout, {"responsive": true});"#));
    }

    #[test]
    fn test_custom_plotly_src() {
        let html = render_chart_html("T", &Figure::default(), "plotly.min.js").unwrap();
        assert!(html.contains(r#"<script src="plotly.min.js""#));
        assert!(!html.contains("cdn.plot.ly"));
    }

    #[test]
    fn test_markup_in_figure_text_is_escaped() {
        let fig = Figure::new(Layout {
            annotations: vec![Annotation::paper(0.5, 0.5, "<b>Avg</b></script>")],
            ..Layout::default()
        });
        let html = render_chart_html("T", &fig, DEFAULT_PLOTLY_SRC).unwrap();
        assert_eq!(html.matches("</script>").count(), 2);
        let v = embedded_figure(&html);
        assert_eq!(v["layout"]["annotations"][0]["text"], "<b>Avg</b></script>");
    }
}
