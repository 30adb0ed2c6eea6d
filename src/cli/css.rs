//! Css command implementation.
//!
//! Writes the generated block to stdout, or to a file with --out.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::catalog::catalog;
use crate::css::{stylesheet, DEFAULT_PREFIX};
use crate::error::{OchreError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Scope;

/// Generate CSS custom properties
#[derive(Args, Debug)]
pub struct CssArgs {
    /// Records to include: official, extended, or all
    #[arg(long, default_value = "official")]
    pub scope: String,

    /// Variable name prefix
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Write to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: CssArgs, printer: &Printer) -> Result<()> {
    let scope: Scope = args.scope.parse()?;
    let count = catalog().in_scope(scope).len();
    let css = stylesheet(catalog(), scope, &args.prefix);

    match &args.out {
        Some(path) => {
            fs::write(path, &css).map_err(|e| OchreError::Io {
                path: path.clone(),
                message: format!("Failed to write stylesheet: {}", e),
            })?;

            printer.success(
                "Wrote",
                &format!(
                    "{} ({})",
                    display_path(path),
                    plural(count, "variable", "variables")
                ),
            );
        }
        None => {
            print!("{}", css);
            printer.status("Generated", &plural(count, "variable", "variables"));
        }
    }

    Ok(())
}
