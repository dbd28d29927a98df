use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rename-files",
    version,
    about = "Moves HRTHIS_ files to their BrowoKo_ names",
    long_about = "Moves every file of the rename table to its new name and replaces the \
                  HRTHIS_ and HRthis tokens inside it. Missing files are skipped."
)]
pub struct RenameFilesCli {
    /// Directory the rename table is relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// TOML file replacing the built-in rename table and token replacements
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report what would be renamed without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenameFilesCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
