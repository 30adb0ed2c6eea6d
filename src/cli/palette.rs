//! Palette command implementation.

use clap::Args;

use crate::catalog::catalog;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::report;
use crate::types::PaletteFilter;

/// List colours in a palette category
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Palette category, or "all" for the full catalog
    #[arg(default_value = "all")]
    pub category: String,

    /// Output records as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let filter: PaletteFilter = args.category.parse()?;
    let records = catalog().in_palette(filter);

    printer.status(
        "Listed",
        &format!(
            "{} in \"{}\"",
            plural(records.len(), "colour", "colours"),
            args.category
        ),
    );

    if args.json {
        println!("{}", report::to_json(&records)?);
    } else {
        println!("{}", report::lines(&records));
    }

    Ok(())
}
