use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "migrate-imports",
    version,
    about = "Rewrites relative imports into @ alias imports",
    long_about = "Rewrites imports like '../../components/Foo' into '@components/Foo' in every \
                  .ts and .tsx file of the project. Run it once from the project root."
)]
pub struct MigrateImportsCli {
    /// Project root to migrate
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// TOML file replacing the built-in alias table
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl MigrateImportsCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
