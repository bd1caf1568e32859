//! Filter and selection state for a catalog.
//!
//! `CatalogView` holds the same transient state as the generated page
//! (search text, three filter dimensions, tray selection) and applies the
//! same rules. The page script is the browser rendition of this type.

use std::collections::BTreeSet;

use indexmap::IndexSet;
use skunkd_core::catalog::{Capability, Category};

use super::copy::{copy_string, record_key};

/// Separator placed between copy strings when the tray is copied.
pub const TRAY_SEPARATOR: &str = " ";

/// Case-insensitive substring match over name, description, server, and
/// namespace. An empty query matches every record.
#[must_use]
pub fn matches_search(cap: &Capability, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    [
        Some(cap.name.as_str()),
        Some(cap.description.as_str()),
        cap.server.as_deref(),
        cap.namespace.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&q))
}

/// Distinct non-empty server names, sorted ascending.
#[must_use]
pub fn all_servers(records: &[Capability]) -> Vec<&str> {
    records
        .iter()
        .filter_map(Capability::server_name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct non-empty namespaces, sorted ascending.
#[must_use]
pub fn all_namespaces(records: &[Capability]) -> Vec<&str> {
    records
        .iter()
        .filter_map(Capability::namespace_name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Transient filter and selection state over a slice of records.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    records: &'a [Capability],
    search: String,
    categories: BTreeSet<Category>,
    servers: BTreeSet<String>,
    namespaces: BTreeSet<String>,
    selected: IndexSet<String>,
}

impl<'a> CatalogView<'a> {
    /// A view with no search, no filters, and nothing selected.
    #[must_use]
    pub fn new(records: &'a [Capability]) -> Self {
        Self {
            records,
            search: String::new(),
            categories: BTreeSet::new(),
            servers: BTreeSet::new(),
            namespaces: BTreeSet::new(),
            selected: IndexSet::new(),
        }
    }

    /// Every record, filtered or not.
    #[must_use]
    pub const fn records(&self) -> &'a [Capability] {
        self.records
    }

    /// Set the search query. Surrounding whitespace is ignored.
    pub fn set_search(&mut self, query: &str) {
        query.trim().clone_into(&mut self.search);
    }

    /// The active (trimmed) search query.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Toggle a category filter. Returns whether it is now active.
    pub fn toggle_category(&mut self, category: Category) -> bool {
        toggle(&mut self.categories, category)
    }

    /// Toggle a server filter. Returns whether it is now active.
    pub fn toggle_server(&mut self, server: &str) -> bool {
        toggle(&mut self.servers, server.to_string())
    }

    /// Toggle a namespace filter. Returns whether it is now active.
    pub fn toggle_namespace(&mut self, namespace: &str) -> bool {
        toggle(&mut self.namespaces, namespace.to_string())
    }

    /// Active category filters.
    #[must_use]
    pub const fn active_categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    /// Reset all three filter dimensions and the search query.
    ///
    /// The selection is left untouched.
    pub fn clear_filters(&mut self) {
        self.categories.clear();
        self.servers.clear();
        self.namespaces.clear();
        self.search.clear();
    }

    /// Whether any filter or search is active.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.categories.is_empty()
            || !self.servers.is_empty()
            || !self.namespaces.is_empty()
            || !self.search.is_empty()
    }

    /// Whether `cap` passes every active filter and the search.
    ///
    /// Dimensions are ANDed; values within a dimension are ORed; an empty
    /// dimension imposes no constraint.
    #[must_use]
    pub fn is_visible(&self, cap: &Capability) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&cap.category) {
            return false;
        }
        if !self.servers.is_empty()
            && !cap
                .server
                .as_deref()
                .is_some_and(|s| self.servers.contains(s))
        {
            return false;
        }
        if !self.namespaces.is_empty()
            && !cap
                .namespace
                .as_deref()
                .is_some_and(|n| self.namespaces.contains(n))
        {
            return false;
        }
        matches_search(cap, &self.search)
    }

    /// Records passing the current filters, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&'a Capability> {
        self.records.iter().filter(|c| self.is_visible(c)).collect()
    }

    /// Per-category counts within the filtered set, in presentation order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let filtered = self.filtered();
        Category::ALL
            .into_iter()
            .map(|cat| (cat, filtered.iter().filter(|c| c.category == cat).count()))
            .collect()
    }

    /// Toggle a record's membership in the tray. Returns whether it is now selected.
    pub fn toggle_selected(&mut self, cap: &Capability) -> bool {
        let key = record_key(cap);
        if self.selected.shift_remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Remove a key from the tray.
    pub fn deselect(&mut self, key: &str) {
        self.selected.shift_remove(key);
    }

    /// Empty the tray.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Whether a record is in the tray.
    #[must_use]
    pub fn is_selected(&self, cap: &Capability) -> bool {
        self.selected.contains(&record_key(cap))
    }

    /// Number of keys in the tray.
    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    /// Selected records, in the order they were selected.
    ///
    /// Each key resolves to the first record carrying it.
    #[must_use]
    pub fn selected(&self) -> Vec<&'a Capability> {
        self.selected
            .iter()
            .filter_map(|key| self.records.iter().find(|c| record_key(c) == *key))
            .collect()
    }

    /// Copy strings of every selected record, joined for a single paste.
    #[must_use]
    pub fn tray_copy_text(&self) -> String {
        self.selected()
            .into_iter()
            .map(copy_string)
            .collect::<Vec<_>>()
            .join(TRAY_SEPARATOR)
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}
