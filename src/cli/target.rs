use clap::Args;
use std::path::PathBuf;

use umc_template::Loader;

/// Descriptor and variant every command resolves
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Mod descriptor (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, short = 'c', value_name = "DESCRIPTOR")]
    pub config: PathBuf,

    /// Minecraft version, e.g. 1.12.2
    #[arg(long, short = 'm', value_name = "VERSION")]
    pub minecraft: String,

    /// Mod loader: forge, neoforge, fabric or quilt
    #[arg(long, short = 'l')]
    pub loader: Loader,

    /// Publish library lists as MOD_DEPENDENCIES/RELOCATION instead of SHADOW/RELOCATE
    #[arg(long)]
    pub legacy_names: bool,
}
