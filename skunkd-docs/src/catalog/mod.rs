//! Capabilities catalog page.
//!
//! - `copy`: copy strings, selection keys, card hints
//! - `view`: search/filter/selection model shared with the page script
//! - `page`: standalone HTML document assembly
//! - `validate`: non-fatal consistency findings on raw catalog JSON

pub mod copy;
pub mod page;
pub mod validate;
pub mod view;

pub use copy::{AGENT_PATH_PREFIX, copy_string, hint, record_key};
pub use page::{render_page, write_page};
pub use validate::{Severity, ValidationIssue, validate_catalog};
pub use view::{CatalogView, TRAY_SEPARATOR, all_namespaces, all_servers, matches_search};
