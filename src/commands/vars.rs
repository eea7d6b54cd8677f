//! Vars command implementation

use console::Style;
use umc_template::error::Result;
use umc_template::ResolvedVariables;

use super::helpers::{GlobalOptions, resolve_target};
use crate::cli::{OutputFormat, VarsArgs};

pub fn run(options: &GlobalOptions, args: &VarsArgs) -> Result<()> {
    let resolution = resolve_target(options, &args.target)?;

    match args.format {
        OutputFormat::Json => println!("{}", to_json(&resolution.variables)?),
        OutputFormat::Text => print_table(&resolution.variables),
    }
    Ok(())
}

/// Table as a JSON object, keys in table order
pub fn to_json(variables: &ResolvedVariables) -> Result<String> {
    let object: serde_json::Map<String, serde_json::Value> = variables
        .iter()
        .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
        .collect();
    Ok(serde_json::to_string_pretty(&object)?)
}

fn print_table(variables: &ResolvedVariables) {
    let name_style = Style::new().bold().cyan();
    for (name, value) in variables.iter() {
        if value.contains('\n') {
            println!("{} =", name_style.apply_to(name));
            for line in value.lines() {
                println!("    {line}");
            }
        } else if value.is_empty() {
            println!("{} = {}", name_style.apply_to(name), Style::new().dim().apply_to("(empty)"));
        } else {
            println!("{} = {value}", name_style.apply_to(name));
        }
    }
}
