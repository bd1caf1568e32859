//! Standalone catalog HTML page.
//!
//! The document is self-contained: styles and script are inlined and the
//! capability records are embedded as a JSON array literal. Nothing is
//! fetched after load.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use skunkd_core::catalog::{Catalog, Category};

use crate::error::DocsError;
use crate::escape::{escape_html, escape_script_json};

const BASE_CSS: &str = include_str!("../../templates/catalog.css");
const PAGE_JS: &str = include_str!("../../templates/catalog.js");

const BODY: &str = r#"<div id="header">
  <div id="status-bar">
    <span class="title">capabilities catalog</span>
    <span><span id="filtered-count">0</span> / <span id="total-count">0</span> <span id="sel-info" class="sel-count"></span></span>
  </div>
  <input id="search" type="text" placeholder="search name, description, server, namespace..." autocomplete="off" spellcheck="false">
  <div id="cat-pills" class="pill-row"></div>
  <div id="server-pills" class="pill-row"></div>
  <div id="ns-pills" class="pill-row"></div>
</div>
<div id="grid-wrap"><div id="grid"></div></div>
<div id="tray">
  <div id="tray-badges"></div>
  <div id="tray-actions">
    <button id="tray-copy" class="copy-all">copy 0 to clipboard</button>
    <button id="tray-clear">clear</button>
  </div>
</div>"#;

/// Render the catalog as a complete HTML document.
///
/// # Errors
///
/// Returns `DocsError::Json` if the records cannot be serialized.
pub fn render_page(catalog: &Catalog) -> Result<String, DocsError> {
    let records = serde_json::to_string(&catalog.capabilities)?;
    let title = format!("Capabilities Catalog ({})", catalog.session_summary.total);

    let mut sections = Vec::new();

    sections.push("<!DOCTYPE html>".to_string());
    sections.push("<html lang=\"en\">".to_string());
    sections.push("<head>".to_string());
    sections.push("<!-- Generated by skunkd catalog build. Do not edit. -->".to_string());
    sections.push("<meta charset=\"utf-8\">".to_string());
    sections.push(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
    );
    sections.push(format!("<title>{}</title>", escape_html(&title)));
    sections.push("<style>".to_string());
    sections.push(BASE_CSS.trim_end().to_string());
    sections.push(category_css());
    sections.push("</style>".to_string());
    sections.push("</head>".to_string());

    sections.push("<body>".to_string());
    sections.push(BODY.to_string());

    sections.push("<script>".to_string());
    sections.push(format!("const RAW_CAPS={};", escape_script_json(&records)));
    sections.push(category_constants()?);
    sections.push(PAGE_JS.trim_end().to_string());
    sections.push("</script>".to_string());
    sections.push("</body>".to_string());
    sections.push("</html>".to_string());
    sections.push(String::new());

    Ok(sections.join("\n"))
}

/// Render the catalog and write it to `path`, creating parent directories.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns `DocsError::CreateDir` or `DocsError::Write` on I/O failure.
pub fn write_page(catalog: &Catalog, path: &Path) -> Result<u64, DocsError> {
    let html = render_page(catalog)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| DocsError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, &html).map_err(|source| DocsError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = html.len(), "catalog page written");
    Ok(html.len() as u64)
}

/// `CATEGORIES`, `CAT_LABELS` and `COLORS` for the page script.
fn category_constants() -> Result<String, DocsError> {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let mut labels = Map::new();
    let mut colors = Map::new();
    for category in Category::ALL {
        labels.insert(category.as_str().into(), Value::from(category.label()));
        colors.insert(category.as_str().into(), Value::from(category.color()));
    }

    Ok(format!(
        "const CATEGORIES={};\nconst CAT_LABELS={};\nconst COLORS={};",
        serde_json::to_string(&names)?,
        serde_json::to_string(&labels)?,
        serde_json::to_string(&colors)?,
    ))
}

/// Per-category pill, badge and selected-card rules.
fn category_css() -> String {
    let mut css = String::new();
    for category in Category::ALL {
        let name = category.as_str();
        let color = category.color();
        let tint = rgba(color, 0.15);
        let _ = writeln!(
            css,
            ".cat-{name}.active{{background:{tint};border-color:{color};color:{color}}}"
        );
        let _ = writeln!(css, ".badge-{name}{{background:{tint};color:{color}}}");
        let _ = writeln!(css, ".card.selected-{name}{{border-color:{color}}}");
    }
    css.truncate(css.trim_end().len());
    css
}

/// `#rrggbb` to `rgba(r,g,b,a)`.
fn rgba(hex: &str, alpha: f64) -> String {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .unwrap_or(0)
    };
    format!(
        "rgba({},{},{},{alpha})",
        channel(1..3),
        channel(3..5),
        channel(5..7)
    )
}
