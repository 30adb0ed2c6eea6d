//! Catalog record type.

use super::{Category, Colour, Group};

/// One named colour in the catalog.
///
/// The colour is stored once as RGB; the hex form is derived from it, so
/// the two views can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourRecord {
    /// Display name, e.g. "Heritage Rose". Unique across the catalog
    /// (case-insensitive).
    pub name: &'static str,

    /// The colour value.
    pub colour: Colour,

    /// Palette category this record belongs to.
    pub category: Category,
}

impl ColourRecord {
    /// Create a new record.
    pub const fn new(name: &'static str, colour: Colour, category: Category) -> Self {
        Self {
            name,
            colour,
            category,
        }
    }

    /// Top-level classification, derived from the category.
    pub fn group(&self) -> Group {
        self.category.group()
    }

    /// Canonical hex form of the colour.
    pub fn hex(&self) -> String {
        self.colour.hex()
    }
}
