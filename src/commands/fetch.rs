//! Fetch command implementation

use console::Style;
use umc_template::error::Result;

use super::helpers::{GlobalOptions, resolve_target};
use crate::cli::FetchArgs;

pub fn run(options: &GlobalOptions, args: &FetchArgs) -> Result<()> {
    let resolution = resolve_target(options, &args.target)?;
    let bytes = resolution.artifact.copy_to(&args.output)?;

    println!(
        "{} UniversalModCore {} ({bytes} bytes) to {}",
        Style::new().green().bold().apply_to("Copied"),
        resolution.version,
        args.output.display()
    );
    Ok(())
}
