//! The colour catalog and its query operations.
//!
//! The catalog is process-wide immutable static data: built at compile
//! time, read-only thereafter. Concurrent readers need no coordination.
//!
//! # Example
//!
//! ```
//! use ochre::catalog::catalog;
//!
//! let matches = catalog().lookup("ochre");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].name, "Ochre");
//! ```

mod data;

use crate::types::{ColourRecord, Group, PaletteFilter, Scope};

/// The complete set of colour records.
///
/// Query methods return records in declaration order (official palettes
/// first, then extended). An empty result is a successful outcome, not an
/// error.
#[derive(Debug)]
pub struct Catalog {
    records: &'static [ColourRecord],
}

static CATALOG: Catalog = Catalog {
    records: data::RECORDS,
};

/// Get the process-wide catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    /// Free-text lookup by name or hex code.
    ///
    /// Queries shaped like a hex code (optional `#` followed by 1-6 hex
    /// digits) substring-match stored hex values; anything else
    /// substring-matches names. Both matches are case-insensitive.
    pub fn lookup(&self, query: &str) -> Vec<&ColourRecord> {
        self.lookup_scoped(query, Scope::All)
    }

    /// Lookup restricted to a scope.
    pub fn lookup_scoped(&self, query: &str, scope: Scope) -> Vec<&ColourRecord> {
        let records = self.records.iter().filter(|r| scope.includes(r.group()));

        if let Some(digits) = hex_query(query) {
            records.filter(|r| r.hex().contains(&digits)).collect()
        } else {
            let needle = query.trim().to_lowercase();
            records
                .filter(|r| r.name.to_lowercase().contains(&needle))
                .collect()
        }
    }

    /// All records in a group, declaration order.
    pub fn in_group(&self, group: Group) -> Vec<&ColourRecord> {
        self.records.iter().filter(|r| r.group() == group).collect()
    }

    /// Records filtered by palette category, or the full catalog for
    /// `PaletteFilter::All`.
    pub fn in_palette(&self, filter: PaletteFilter) -> Vec<&ColourRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(r.category))
            .collect()
    }

    /// Records visible in a scope, declaration order.
    pub fn in_scope(&self, scope: Scope) -> Vec<&ColourRecord> {
        self.records
            .iter()
            .filter(|r| scope.includes(r.group()))
            .collect()
    }

    /// Iterate over the full catalog in declaration order.
    pub fn records(&self) -> impl Iterator<Item = &ColourRecord> {
        self.records.iter()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalize a hex-shaped query to uppercase digits.
///
/// Returns `None` when the query is not hex-shaped and should be treated
/// as a name search.
fn hex_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.is_empty() || digits.len() > 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    Some(digits.to_ascii_uppercase())
}
