//! The static colour table.
//!
//! Records are declared in catalog order: official palettes first
//! (primary, secondary, tertiary), then the extended palettes (neutral,
//! warm, cool, vibrant). Channel values are written as hex literals so
//! each entry reads as its colour code.

use crate::types::{Category, Colour, ColourRecord};

pub(super) const RECORDS: &[ColourRecord] = &[
    // Official primary (masterbrand)
    ColourRecord::new("Ochre", Colour::new(0xE7, 0x47, 0x26), Category::Primary),
    ColourRecord::new("White", Colour::new(0xFF, 0xFF, 0xFF), Category::Primary),
    ColourRecord::new("Black", Colour::new(0x00, 0x00, 0x00), Category::Primary),
    ColourRecord::new("Light Grey", Colour::new(0xE6, 0xE7, 0xE9), Category::Primary),
    ColourRecord::new("Charcoal", Colour::new(0x42, 0x41, 0x43), Category::Primary),
    // Official secondary
    ColourRecord::new("Sandstone", Colour::new(0xFB, 0xEE, 0xE2), Category::Secondary),
    // Official tertiary (heritage)
    ColourRecord::new("Heritage Rose", Colour::new(0xDA, 0xA8, 0xA2), Category::Tertiary),
    ColourRecord::new("Jacaranda", Colour::new(0x8F, 0x9E, 0xC8), Category::Tertiary),
    ColourRecord::new("Navy", Colour::new(0x1B, 0x35, 0x5E), Category::Tertiary),
    ColourRecord::new("Eucalypt", Colour::new(0x71, 0xA4, 0x99), Category::Tertiary),
    // Extended neutrals
    ColourRecord::new("Accent Grey", Colour::new(0xF1, 0xF1, 0xF1), Category::Neutral),
    ColourRecord::new("Neutral Grey", Colour::new(0xE0, 0xE0, 0xE0), Category::Neutral),
    ColourRecord::new(
        "Masterbrand Charcoal",
        Colour::new(0x42, 0x42, 0x42),
        Category::Neutral,
    ),
    // Extended warm
    ColourRecord::new("Beige", Colour::new(0xFD, 0xCA, 0x90), Category::Warm),
    ColourRecord::new("Ivory", Colour::new(0xF8, 0xEF, 0xDD), Category::Warm),
    ColourRecord::new("Peach", Colour::new(0xF7, 0x9C, 0x72), Category::Warm),
    ColourRecord::new("Orange", Colour::new(0xF9, 0xA1, 0x34), Category::Warm),
    ColourRecord::new("Maroon", Colour::new(0x7A, 0x20, 0x00), Category::Warm),
    // Extended cool
    ColourRecord::new("Accent Blue", Colour::new(0x01, 0x48, 0xA4), Category::Cool),
    ColourRecord::new("Light Blue", Colour::new(0x91, 0xBD, 0xE5), Category::Cool),
    ColourRecord::new("Secondary Blue", Colour::new(0x4E, 0x98, 0xD3), Category::Cool),
    ColourRecord::new("Dark Eucalypt", Colour::new(0x25, 0x58, 0x4D), Category::Cool),
    ColourRecord::new("Light Seafoam", Colour::new(0x68, 0xC6, 0xB6), Category::Cool),
    ColourRecord::new("Dark Seafoam", Colour::new(0x00, 0xA4, 0x85), Category::Cool),
    // Extended vibrant
    ColourRecord::new("Accent Yellow", Colour::new(0xFF, 0xB8, 0x00), Category::Vibrant),
    ColourRecord::new("Lemon", Colour::new(0xFB, 0xF3, 0x8D), Category::Vibrant),
    ColourRecord::new("Light Green", Colour::new(0xBD, 0xDC, 0x96), Category::Vibrant),
    ColourRecord::new("Dark Green", Colour::new(0x00, 0x7E, 0x3B), Category::Vibrant),
    ColourRecord::new("Lilac", Colour::new(0xB8, 0x96, 0xC6), Category::Vibrant),
    ColourRecord::new("Purple", Colour::new(0x7F, 0x3F, 0x98), Category::Vibrant),
    ColourRecord::new("Light Pink", Colour::new(0xF8, 0xB9, 0xCC), Category::Vibrant),
    ColourRecord::new("Pink", Colour::new(0xD6, 0x51, 0x9D), Category::Vibrant),
];
