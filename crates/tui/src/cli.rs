//! Command-line argument parsing for grpc-tour.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Terminal state management (see `runtime::terminal`).
//! - Content or theme expansion (see `grpc_tour_content`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;

use crate::app::Section;
use grpc_tour_content::ColorTheme;

/// Command-line arguments for grpc-tour.
#[derive(Debug, Parser)]
#[command(
    name = "grpc-tour",
    about = "A terminal tour of gRPC for newcomers",
    version,
    after_help = "Examples:\n  grpc-tour\n  grpc-tour --theme dark\n  grpc-tour --section quickstart\n  grpc-tour --log-dir /var/log/grpc-tour --no-mouse\n"
)]
pub struct Cli {
    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support (hover cards remain reachable via keyboard focus)
    #[arg(long)]
    pub no_mouse: bool,

    /// Color theme: default, light, dark, high-contrast
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ColorTheme>,

    /// Section to open at startup: hero, features, quickstart, practices
    #[arg(long, value_parser = parse_section)]
    pub section: Option<Section>,
}

fn parse_theme(s: &str) -> Result<ColorTheme, String> {
    ColorTheme::from_name(s)
        .ok_or_else(|| format!("unknown theme '{s}' (expected default, light, dark, or high-contrast)"))
}

fn parse_section(s: &str) -> Result<Section, String> {
    Section::from_name(s).ok_or_else(|| {
        format!("unknown section '{s}' (expected hero, features, quickstart, or practices)")
    })
}
