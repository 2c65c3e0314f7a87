//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `ghlink`.
#[derive(Debug, Parser)]
#[command(name = "ghlink", version, about = "Generate GitHub links for files and line ranges")]
pub struct Cli {
    /// Path to the file (relative or absolute).
    pub file_path: PathBuf,

    /// Line number(s) to link to. Use a comma for a range (e.g. 12,16).
    #[arg(short = 'l', long)]
    pub lines: Option<String>,
}
