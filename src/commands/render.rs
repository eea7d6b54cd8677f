//! Render command implementation

use console::Style;
use tracing::info;
use umc_template::error::Result;
use umc_template::template;

use super::helpers::{GlobalOptions, resolve_target};
use crate::cli::RenderArgs;

pub fn run(options: &GlobalOptions, args: &RenderArgs) -> Result<()> {
    let resolution = resolve_target(options, &args.target)?;
    let delimited = !args.bare;

    let written = if args.template.is_dir() {
        template::render_tree(&args.template, &args.output, &resolution.variables, delimited)?
    } else {
        template::render_file(&args.template, &args.output, &resolution.variables, delimited)?;
        vec![args.output.clone()]
    };

    for path in &written {
        info!(path = %path.display(), "rendered");
    }
    println!(
        "{} {} file(s) for {}",
        Style::new().green().bold().apply_to("Rendered"),
        written.len(),
        Style::new().cyan().apply_to(&resolution.variant)
    );
    Ok(())
}
