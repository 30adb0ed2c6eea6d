//! Group command implementation.

use clap::Args;

use crate::catalog::catalog;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::report;
use crate::types::Group;

/// List colours in the official or extended group
#[derive(Args, Debug)]
pub struct GroupArgs {
    /// Group to list: official or extended
    pub group: String,

    /// Output records as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GroupArgs, printer: &Printer) -> Result<()> {
    let group: Group = args.group.parse()?;
    let records = catalog().in_group(group);

    printer.status(
        "Listed",
        &format!(
            "{} in the {} group",
            plural(records.len(), "colour", "colours"),
            group
        ),
    );

    if args.json {
        println!("{}", report::to_json(&records)?);
    } else {
        println!("{}", report::lines(&records));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_rejects_unknown_group() {
        let args = GroupArgs {
            group: "tertiary".to_string(),
            json: false,
        };

        assert!(run(args, &Printer::new()).is_err());
    }
}
