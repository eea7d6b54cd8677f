use clap::Parser;
use std::path::PathBuf;

use super::TargetArgs;

/// Arguments for the fetch command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Download the core library jar:\n    umc-template fetch -c umc.json -m 1.12.2 -l forge -o libs/UniversalModCore.jar")]
pub struct FetchArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Destination file for the jar
    #[arg(long, short = 'o')]
    pub output: PathBuf,
}
