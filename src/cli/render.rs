use clap::Parser;
use std::path::PathBuf;

use super::TargetArgs;

/// Arguments for the render command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Render one file:\n    umc-template render -c umc.json -m 1.12.2 -l forge build.gradle.template -o build.gradle\n\n\
                  Render a template tree, expanding PACKAGEPATH directories:\n    umc-template render -c umc.json -m 1.20 -l forge template -o .")]
pub struct RenderArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Template file or directory
    pub template: PathBuf,

    /// Output file, or output directory when the template is a directory
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Match bare variable names instead of #NAME# tokens in file contents
    #[arg(long)]
    pub bare: bool,
}
