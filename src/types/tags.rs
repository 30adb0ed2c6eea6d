//! Classification tags for catalog records.
//!
//! Category and group values arrive as free text at the CLI and service
//! boundaries. Parsing them here into closed enums keeps the rest of the
//! crate free of string comparisons; an unrecognized value fails with the
//! list of valid values.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{OchreError, Result};

/// Palette category of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    Warm,
    Cool,
    Vibrant,
}

impl Category {
    /// All categories in catalog declaration order.
    pub const ALL: [Category; 7] = [
        Category::Primary,
        Category::Secondary,
        Category::Tertiary,
        Category::Neutral,
        Category::Warm,
        Category::Cool,
        Category::Vibrant,
    ];

    /// Get the short name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Primary => "primary",
            Category::Secondary => "secondary",
            Category::Tertiary => "tertiary",
            Category::Neutral => "neutral",
            Category::Warm => "warm",
            Category::Cool => "cool",
            Category::Vibrant => "vibrant",
        }
    }

    /// The group this category belongs to.
    pub fn group(&self) -> Group {
        match self {
            Category::Primary | Category::Secondary | Category::Tertiary => Group::Official,
            Category::Neutral | Category::Warm | Category::Cool | Category::Vibrant => {
                Group::Extended
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = OchreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Category::Primary),
            "secondary" => Ok(Category::Secondary),
            "tertiary" => Ok(Category::Tertiary),
            "neutral" => Ok(Category::Neutral),
            "warm" => Ok(Category::Warm),
            "cool" => Ok(Category::Cool),
            "vibrant" => Ok(Category::Vibrant),
            _ => Err(OchreError::InvalidArgument {
                message: format!("unknown palette category \"{}\"", s),
                help: Some(format!("valid categories: {}", category_names())),
            }),
        }
    }
}

/// Top-level classification: brand-mandated vs supplementary colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Official,
    Extended,
}

impl Group {
    /// Get the short name for this group.
    pub fn name(&self) -> &'static str {
        match self {
            Group::Official => "official",
            Group::Extended => "extended",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Group {
    type Err = OchreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "official" => Ok(Group::Official),
            "extended" => Ok(Group::Extended),
            _ => Err(OchreError::InvalidArgument {
                message: format!("unknown group \"{}\"", s),
                help: Some("valid groups: official, extended".to_string()),
            }),
        }
    }
}

/// Record selection for search and CSS generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Official,
    Extended,
    All,
}

impl Scope {
    /// Get the short name for this scope.
    pub fn name(&self) -> &'static str {
        match self {
            Scope::Official => "official",
            Scope::Extended => "extended",
            Scope::All => "all",
        }
    }

    /// Check whether records in `group` are visible in this scope.
    pub fn includes(&self, group: Group) -> bool {
        match self {
            Scope::Official => group == Group::Official,
            Scope::Extended => group == Group::Extended,
            Scope::All => true,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scope {
    type Err = OchreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "official" => Ok(Scope::Official),
            "extended" => Ok(Scope::Extended),
            "all" => Ok(Scope::All),
            _ => Err(OchreError::InvalidArgument {
                message: format!("unknown scope \"{}\"", s),
                help: Some("valid scopes: official, extended, all".to_string()),
            }),
        }
    }
}

/// Palette selection: one category, or the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFilter {
    All,
    Category(Category),
}

impl PaletteFilter {
    /// Check whether records in `category` pass this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            PaletteFilter::All => true,
            PaletteFilter::Category(c) => *c == category,
        }
    }
}

impl FromStr for PaletteFilter {
    type Err = OchreError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(PaletteFilter::All);
        }

        s.parse::<Category>()
            .map(PaletteFilter::Category)
            .map_err(|_| OchreError::InvalidArgument {
                message: format!("unknown palette category \"{}\"", s),
                help: Some(format!("valid categories: {}, all", category_names())),
            })
    }
}

fn category_names() -> String {
    Category::ALL
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}
