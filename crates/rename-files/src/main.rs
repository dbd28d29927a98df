mod cli;

use crate::cli::RenameFilesCli;
use anyhow::{Context, Result};
use migration::MigrationConfig;
use migration::runner::run_batch_rename;
use migration::summary::RenameSummary;
use std::process;

fn print_summary(summary: &RenameSummary, dry_run: bool) {
    println!();
    println!("================================================");
    if dry_run {
        println!("✅ DRY RUN COMPLETE! No files were touched.");
    } else {
        println!("✅ RENAME COMPLETE!");
    }
    println!("================================================");
    println!();
    println!("📊 Summary:");
    println!("  - Files renamed: {}", summary.renamed);
    println!("  - Files skipped: {}", summary.skipped);
    println!("  - Files failed:  {}", summary.failed);
    println!();
    println!("⚠️  Next Steps:");
    println!("  1. Review changes: git status");
    println!("  2. Test the application: npm run dev");
    println!("  3. Commit changes: git add . && git commit -m \"Rename: HRTHIS → BrowoKo\"");
    println!();
}

fn main() -> Result<()> {
    let cli = RenameFilesCli::parse_args();
    logging::init(cli.verbose)?;

    tracing::debug!("Project root: {}", cli.root.display());

    let config = MigrationConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load migration config")?;

    println!("🚀 Starting Browo Koordinator Rename Process...");
    println!("================================================");
    println!();
    println!("📝 Renaming {} files...", config.renames.len());
    println!("-------------------------------------------");

    let summary = run_batch_rename(&cli.root, &config, cli.dry_run, |msg| println!("{msg}"));

    print_summary(&summary, cli.dry_run);

    if summary.has_failures() {
        process::exit(1);
    }
    Ok(())
}
