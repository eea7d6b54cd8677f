use clap::{Parser, ValueEnum};

use super::TargetArgs;

/// Output format for the variable table
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the vars command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the variables for Forge 1.12.2:\n    umc-template vars -c umc.json -m 1.12.2 -l forge\n\n\
                  Machine readable output:\n    umc-template vars -c umc.json -m 1.20 -l fabric --format json")]
pub struct VarsArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
