//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - target: Descriptor and variant selection shared by every command
//! - vars: Vars command arguments
//! - render: Render command arguments
//! - fetch: Fetch command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use umc_template::config::{MAVEN_URL_ENV, UPSTREAM_REPOSITORY_ENV};

pub mod fetch;
pub mod render;
pub mod target;
pub mod vars;

pub use fetch::FetchArgs;
pub use render::RenderArgs;
pub use target::TargetArgs;
pub use vars::{OutputFormat, VarsArgs};

/// umc-template - UniversalModCore build descriptor resolver
///
/// Resolve a mod descriptor for one Minecraft version and loader, then print
/// the build variables or substitute them into templates.
#[derive(Parser, Debug)]
#[command(
    name = "umc-template",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve UniversalModCore mod descriptors into build variables",
    long_about = "Resolves a UniversalModCore mod descriptor for a Minecraft version and loader \
                  (forge, neoforge, fabric, quilt) into build variables, and renders build \
                  templates with them.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  umc-template vars -c umc.json -m 1.12.2 -l forge                 \x1b[90m# Print variables\x1b[0m\n   \
                  umc-template render -c umc.json -m 1.20 -l forge template -o .  \x1b[90m# Render a template tree\x1b[0m\n   \
                  umc-template fetch -c umc.json -m 1.20 -l forge -o libs/umc.jar \x1b[90m# Copy the core library jar\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Working directory relative core library paths resolve from (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "UMC_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Git remote cloned to resolve "latest" core library versions
    #[arg(long, global = true, env = UPSTREAM_REPOSITORY_ENV)]
    pub upstream: Option<String>,

    /// Maven repository the core library is downloaded from
    #[arg(long, global = true, env = MAVEN_URL_ENV)]
    pub maven_url: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved variable table
    Vars(VarsArgs),

    /// Substitute variables into a template file or directory
    Render(RenderArgs),

    /// Copy the core library jar
    Fetch(FetchArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}
