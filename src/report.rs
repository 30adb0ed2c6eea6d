//! Payload formatting for catalog records.
//!
//! The service boundary and the CLI emit either human-readable lines
//! (`Name: #HEX (rgb(r, g, b))`) or a JSON document matching the shape
//! the original colour server exposed to its clients.

use serde::Serialize;

use crate::error::Result;
use crate::types::{Category, ColourRecord, Group};

/// Serializable view of a catalog record.
#[derive(Debug, Serialize)]
pub struct RecordInfo {
    pub name: &'static str,
    pub category: Category,
    pub group: Group,
    pub hex: String,
    pub rgb: RgbInfo,
}

/// Serializable RGB components, with CSS functional notation.
#[derive(Debug, Serialize)]
pub struct RgbInfo {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub string: String,
}

impl From<&ColourRecord> for RecordInfo {
    fn from(record: &ColourRecord) -> Self {
        Self {
            name: record.name,
            category: record.category,
            group: record.group(),
            hex: record.hex(),
            rgb: RgbInfo {
                r: record.colour.r,
                g: record.colour.g,
                b: record.colour.b,
                string: record.colour.css_rgb(),
            },
        }
    }
}

/// Format one record as a payload line.
pub fn line(record: &ColourRecord) -> String {
    format!(
        "{}: {} ({})",
        record.name,
        record.hex(),
        record.colour.css_rgb()
    )
}

/// Format records as a payload block, one line per record.
pub fn lines(records: &[&ColourRecord]) -> String {
    records
        .iter()
        .map(|r| line(r))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize records as pretty-printed JSON.
pub fn to_json(records: &[&ColourRecord]) -> Result<String> {
    let infos: Vec<RecordInfo> = records.iter().map(|r| RecordInfo::from(*r)).collect();
    Ok(serde_json::to_string_pretty(&infos)?)
}
