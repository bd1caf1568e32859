//! Cribbage scoring statistics charts.
//!
//! Each chart is a pure function from the frozen tables in
//! `skunkd_core::stats` to a Plotly [`Figure`](figure::Figure), written
//! out as its own standalone HTML page.

pub mod components;
pub mod cumulative;
pub mod distribution;
pub mod figure;
pub mod html;
pub mod parity;
pub mod rarity;
pub mod theme;
pub mod tiers;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::DocsError;
use figure::Figure;
pub use html::{DEFAULT_PLOTLY_SRC, render_chart_html};

/// A registered chart.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartSpec {
    /// Name accepted by `--only`.
    pub name: &'static str,
    /// Output file name.
    pub file: &'static str,
    /// Page title.
    pub title: &'static str,
    #[serde(skip)]
    build: fn() -> Figure,
}

impl ChartSpec {
    /// Build this chart's figure.
    #[must_use]
    pub fn figure(&self) -> Figure {
        (self.build)()
    }

    /// Render this chart as a standalone HTML page.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::Json` if the figure cannot be serialized.
    pub fn render(&self, plotly_src: &str) -> Result<String, DocsError> {
        render_chart_html(self.title, &self.figure(), plotly_src)
    }

    /// Render and write this chart into `out_dir`. Returns bytes written.
    ///
    /// # Errors
    ///
    /// Returns `DocsError` if rendering or the write fails.
    pub fn write(&self, out_dir: &Path, plotly_src: &str) -> Result<u64, DocsError> {
        let html = self.render(plotly_src)?;
        let path = out_dir.join(self.file);
        fs::write(&path, &html).map_err(|source| DocsError::Write { path, source })?;
        Ok(html.len() as u64)
    }
}

/// Every chart, in generation order.
pub static CHARTS: [ChartSpec; 6] = [
    ChartSpec {
        name: "score_distribution",
        file: "score_distribution.html",
        title: "Cribbage Hand Score Distribution",
        build: distribution::figure,
    },
    ChartSpec {
        name: "cumulative_probability",
        file: "cumulative_probability.html",
        title: "Cumulative Score Probability",
        build: cumulative::figure,
    },
    ChartSpec {
        name: "score_tiers",
        file: "score_tiers.html",
        title: "Hand Quality Tiers",
        build: tiers::figure,
    },
    ChartSpec {
        name: "rarity_scale",
        file: "rarity_scale.html",
        title: "How Rare Is That Hand?",
        build: rarity::figure,
    },
    ChartSpec {
        name: "score_components",
        file: "score_components.html",
        title: "Where Do Cribbage Points Come From?",
        build: components::figure,
    },
    ChartSpec {
        name: "even_odd",
        file: "even_odd.html",
        title: "The Even-Score Advantage",
        build: parity::figure,
    },
];

/// Look up a chart by name.
///
/// # Errors
///
/// Returns `DocsError::UnknownChart`, with the closest name as a
/// suggestion when one is near enough.
pub fn find_chart(name: &str) -> Result<&'static ChartSpec, DocsError> {
    CHARTS
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| DocsError::UnknownChart {
            name: name.to_string(),
            suggestion: suggest_chart(name).map(str::to_string),
        })
}

/// Closest chart name by Damerau-Levenshtein distance, if within 3 edits.
#[must_use]
pub fn suggest_chart(name: &str) -> Option<&'static str> {
    CHARTS
        .iter()
        .map(|c| (c.name, strsim::damerau_levenshtein(name, c.name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(n, _)| n)
}

/// Resolve `--only` names to charts. An empty list selects every chart.
///
/// # Errors
///
/// Returns `DocsError::UnknownChart` for the first unrecognized name.
pub fn select_charts(only: &[String]) -> Result<Vec<&'static ChartSpec>, DocsError> {
    if only.is_empty() {
        return Ok(CHARTS.iter().collect());
    }
    // Keep registry order regardless of the order names were given in.
    let wanted = only
        .iter()
        .map(|n| find_chart(n))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CHARTS
        .iter()
        .filter(|c| wanted.iter().any(|w| w.name == c.name))
        .collect())
}

/// Result of writing one chart.
#[derive(Debug)]
pub struct ChartOutcome {
    pub spec: &'static ChartSpec,
    pub path: PathBuf,
    /// Bytes written, or why the chart failed.
    pub result: Result<u64, DocsError>,
}

/// Write the selected charts into `out_dir`.
///
/// Every chart is attempted even if an earlier one fails; callers inspect
/// each outcome. `on_written` runs after every attempt, in order.
///
/// # Errors
///
/// Returns `DocsError::CreateDir` if `out_dir` cannot be created. Per-chart
/// failures are reported in the outcomes, not here.
pub fn generate(
    charts: &[&'static ChartSpec],
    out_dir: &Path,
    plotly_src: &str,
    mut on_written: impl FnMut(usize, &ChartOutcome),
) -> Result<Vec<ChartOutcome>, DocsError> {
    fs::create_dir_all(out_dir).map_err(|source| DocsError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut outcomes = Vec::with_capacity(charts.len());
    for (i, &spec) in charts.iter().enumerate() {
        let outcome = ChartOutcome {
            spec,
            path: out_dir.join(spec.file),
            result: spec.write(out_dir, plotly_src),
        };
        match &outcome.result {
            Ok(bytes) => {
                tracing::debug!(chart = spec.name, bytes, "chart written");
            }
            Err(e) => {
                tracing::error!(chart = spec.name, error = %e, "chart failed");
            }
        }
        on_written(i, &outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
