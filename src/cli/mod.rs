pub mod completions;
pub mod css;
pub mod group;
pub mod list;
pub mod lookup;
pub mod palette;

use clap::{Parser, Subcommand};

/// ochre - University of Sydney brand colour catalog
#[derive(Parser, Debug)]
#[command(name = "ochre")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up colours by name or hex code
    Lookup(lookup::LookupArgs),

    /// List colours in the official or extended group
    Group(group::GroupArgs),

    /// List colours in a palette category
    Palette(palette::PaletteArgs),

    /// List the full catalog
    List(list::ListArgs),

    /// Generate CSS custom properties
    Css(css::CssArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
