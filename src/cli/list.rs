//! List command implementation.
//!
//! Prints the full catalog, official palettes before extended.

use clap::Args;

use crate::catalog::catalog;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::report;
use crate::types::ColourRecord;

/// List the full catalog
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output records as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let records: Vec<&ColourRecord> = catalog().records().collect();

    printer.status("Listed", &plural(records.len(), "colour", "colours"));

    if args.json {
        println!("{}", report::to_json(&records)?);
    } else {
        println!("{}", report::lines(&records));
    }

    Ok(())
}
