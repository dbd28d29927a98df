mod cli;

use crate::cli::MigrateImportsCli;
use anyhow::{Context, Result};
use migration::MigrationConfig;
use migration::runner::{is_project_root, run_import_migration};
use migration::summary::ImportSummary;
use std::process;

fn rule() -> String {
    "=".repeat(60)
}

fn print_summary(summary: &ImportSummary, dry_run: bool) {
    println!();
    println!("{}", rule());
    if dry_run {
        println!("✅ DRY RUN COMPLETE! No files were written.");
    } else {
        println!("✅ MIGRATION COMPLETE!");
    }
    println!("{}", rule());
    println!();
    println!("📊 Statistics:");
    println!("   Total files scanned: {}", summary.scanned);
    println!("   Files migrated:      {}", summary.migrated);
    println!("   Unchanged:           {}", summary.unchanged());
    println!("   Failed:              {}", summary.failed);
    println!("   Imports rewritten:   {}", summary.changes);
    if summary.skipped_entries > 0 {
        println!("   Unreadable entries:  {}", summary.skipped_entries);
    }
    println!();
    println!("📝 Next steps:");
    println!("   1. Review changes: git diff");
    println!("   2. Test build:     npm run build");
    println!(
        "   3. If OK, commit:  git add -A && git commit -m 'refactor: migrate imports to @ aliases'"
    );
    println!("   4. If errors, rollback: git checkout -- .");
    println!();
}

fn main() -> Result<()> {
    let cli = MigrateImportsCli::parse_args();
    logging::init(cli.verbose)?;

    tracing::debug!("Project root: {}", cli.root.display());

    let config = MigrationConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load migration config")?;

    println!("🚀 Import Migration: relative paths → @ aliases");
    println!("{}", rule());
    println!();

    if !is_project_root(&cli.root, &config.marker_file) {
        println!(
            "❌ ERROR: {} not found. Run this script from project root!",
            config.marker_file
        );
        process::exit(1);
    }

    let summary = run_import_migration(&cli.root, &config, cli.dry_run, |msg| println!("{msg}"))
        .context("Failed to prepare import patterns")?;

    print_summary(&summary, cli.dry_run);
    Ok(())
}
