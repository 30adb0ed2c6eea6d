//! Lookup command implementation.

use clap::Args;

use crate::catalog::catalog;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::report;
use crate::types::Scope;

/// Look up colours by name or hex code
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Colour name (e.g. "ochre") or hex code (e.g. "#E74726")
    pub query: String,

    /// Search official brand colours only
    #[arg(long)]
    pub official: bool,

    /// Output records as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LookupArgs, printer: &Printer) -> Result<()> {
    let scope = if args.official {
        Scope::Official
    } else {
        Scope::All
    };
    let results = catalog().lookup_scoped(&args.query, scope);

    printer.status(
        "Matched",
        &format!(
            "{} for \"{}\"",
            plural(results.len(), "colour", "colours"),
            args.query
        ),
    );

    if results.is_empty() {
        return Ok(());
    }

    if args.json {
        println!("{}", report::to_json(&results)?);
    } else {
        println!("{}", report::lines(&results));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_no_match_is_ok() {
        let args = LookupArgs {
            query: "zzzzzz".to_string(),
            official: false,
            json: false,
        };

        run(args, &Printer::new()).unwrap();
    }

    #[test]
    fn test_run_json_ok() {
        let args = LookupArgs {
            query: "navy".to_string(),
            official: true,
            json: true,
        };

        run(args, &Printer::new()).unwrap();
    }
}
