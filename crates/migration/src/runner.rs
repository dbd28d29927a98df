use crate::config::MigrationConfig;
use crate::errors::Result;
use crate::renamer::{BatchRenamer, RenameOutcome};
use crate::rewriter::ImportRewriter;
use crate::scanner::scan_source_files;
use crate::summary::{ImportSummary, RenameSummary};
use std::path::Path;
use tracing::{Level, debug};

// The progress callback owns the user-facing report; the tracing copy is
// debug-only so a default run never prints a second stream.
fn progress_with_tracing<F>(message: &str, progress: &mut F, level: Level)
where
    F: FnMut(&str),
{
    progress(message);
    debug!(%level, "{message}");
}

/// True when the marker file sits directly in `root`.
pub fn is_project_root(root: &Path, marker_file: &str) -> bool {
    root.join(marker_file).is_file()
}

/// Scans `root` and rewrites relative imports into alias imports file by file.
///
/// A file that cannot be read or written is reported through `progress`,
/// counted as failed and skipped; the run always goes on.
pub fn run_import_migration<F>(
    root: &Path,
    config: &MigrationConfig,
    dry_run: bool,
    mut progress: F,
) -> Result<ImportSummary>
where
    F: FnMut(&str),
{
    let rewriter = ImportRewriter::new(&config.aliases)?;

    progress_with_tracing(
        "📋 Scanning for TypeScript files...",
        &mut progress,
        Level::INFO,
    );
    let scan = scan_source_files(root, &config.exclude_dirs, &config.extensions);
    for err in &scan.errors {
        progress_with_tracing(
            &format!("⚠️  Skipped unreadable entry: {err}"),
            &mut progress,
            Level::WARN,
        );
    }

    let mut summary = ImportSummary {
        scanned: scan.files.len(),
        skipped_entries: scan.errors.len(),
        ..ImportSummary::default()
    };
    progress_with_tracing(
        &format!("Found {} files to scan", summary.scanned),
        &mut progress,
        Level::INFO,
    );

    for path in &scan.files {
        match rewriter.migrate_file(path, dry_run) {
            Ok(0) => {}
            Ok(changes) => {
                summary.migrated += 1;
                summary.changes += changes;
                let verb = if dry_run { "Would migrate" } else { "Migrated" };
                progress_with_tracing(
                    &format!("✅ {verb}: {} ({changes} changes)", path.display()),
                    &mut progress,
                    Level::INFO,
                );
            }
            Err(e) => {
                summary.failed += 1;
                progress_with_tracing(
                    &format!("❌ Error processing {}: {e}", path.display()),
                    &mut progress,
                    Level::ERROR,
                );
            }
        }
    }

    Ok(summary)
}

/// Applies the rename table of `config` below `root`.
pub fn run_batch_rename<F>(
    root: &Path,
    config: &MigrationConfig,
    dry_run: bool,
    mut progress: F,
) -> RenameSummary
where
    F: FnMut(&str),
{
    let renamer = BatchRenamer::new(root, &config.replacements).dry_run(dry_run);

    renamer.run(&config.renames, |entry, outcome| {
        let from = entry.from.display();
        let to = entry.to.display();
        match outcome {
            RenameOutcome::Renamed if dry_run => progress_with_tracing(
                &format!("  ✓ Would rename {from} → {to}"),
                &mut progress,
                Level::INFO,
            ),
            RenameOutcome::Renamed => progress_with_tracing(
                &format!("  ✓ {from} → {to}"),
                &mut progress,
                Level::INFO,
            ),
            RenameOutcome::Skipped => progress_with_tracing(
                &format!("  ⚠ Skipped {from} (not found)"),
                &mut progress,
                Level::DEBUG,
            ),
            RenameOutcome::Failed(e) => progress_with_tracing(
                &format!("  ✗ Failed {from}: {e}"),
                &mut progress,
                Level::ERROR,
            ),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_is_project_root() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_project_root(temp_dir.path(), "App.tsx"));

        fs::create_dir(temp_dir.path().join("App.tsx")).unwrap();
        assert!(!is_project_root(temp_dir.path(), "App.tsx"));

        write(temp_dir.path(), "index.tsx", "");
        assert!(is_project_root(temp_dir.path(), "index.tsx"));
    }

    #[test]
    fn test_run_import_migration_counts_and_reports() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "App.tsx", "import Layout from './layouts/Main';\n");
        write(
            root,
            "screens/Admin/Page.tsx",
            "import Foo from '../../components/Foo';\nconst S = import(\"../../stores/s\");\n",
        );
        write(root, "hooks/useThing.ts", "import { x } from '../utils/x';\n");
        write(root, "node_modules/lib/index.ts", "import y from '../components/y';\n");
        fs::write(root.join("broken.ts"), [0xc3, 0x28]).unwrap();

        let mut lines = Vec::new();
        let summary = run_import_migration(root, &MigrationConfig::default(), false, |line| {
            lines.push(line.to_string())
        })
        .unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                scanned: 4,
                migrated: 2,
                failed: 1,
                skipped_entries: 0,
                changes: 3,
            }
        );
        assert_eq!(summary.unchanged(), 1);
        assert!(lines.contains(&"Found 4 files to scan".to_string()));
        assert!(
            lines
                .iter()
                .any(|l| l.starts_with("✅ Migrated: ") && l.ends_with("Page.tsx (2 changes)"))
        );
        assert!(
            lines
                .iter()
                .any(|l| l.starts_with("❌ Error processing ") && l.contains("broken.ts"))
        );
        assert_eq!(
            fs::read_to_string(root.join("node_modules/lib/index.ts")).unwrap(),
            "import y from '../components/y';\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("hooks/useThing.ts")).unwrap(),
            "import { x } from '@utils/x';\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_run_import_migration_counts_write_failure_and_continues() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "components/Locked.tsx", "import A from '../components/A';\n");
        write(root, "hooks/useOpen.ts", "import B from '../hooks/B';\n");
        let locked = root.join("components/Locked.tsx");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o444)).unwrap();
        if fs::OpenOptions::new().write(true).open(&locked).is_ok() {
            // Permission bits are not enforced for this user (e.g. root).
            return;
        }

        let mut lines = Vec::new();
        let summary = run_import_migration(root, &MigrationConfig::default(), false, |line| {
            lines.push(line.to_string())
        })
        .unwrap();

        assert_eq!(summary.scanned, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.migrated, 1);
        assert!(
            lines
                .iter()
                .any(|l| l.starts_with("❌ Error processing ") && l.contains("Locked.tsx"))
        );
        assert_eq!(
            fs::read_to_string(&locked).unwrap(),
            "import A from '../components/A';\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("hooks/useOpen.ts")).unwrap(),
            "import B from '@hooks/B';\n"
        );
    }

    #[test]
    fn test_run_import_migration_twice_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "components/A.tsx", "import B from '../components/B';\n");
        let config = MigrationConfig::default();

        let first = run_import_migration(root, &config, false, |_| {}).unwrap();
        let second = run_import_migration(root, &config, false, |_| {}).unwrap();

        assert_eq!(first.migrated, 1);
        assert_eq!(second.migrated, 0);
        assert_eq!(second.changes, 0);
    }

    #[test]
    fn test_run_batch_rename_reports_each_entry() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "utils/resilience/HRTHIS_retry.ts", "HRTHIS_retry HRthis\n");
        let config = MigrationConfig::default();

        let mut lines = Vec::new();
        let summary = run_batch_rename(root, &config, false, |line| lines.push(line.to_string()));

        assert_eq!(summary.renamed, 1);
        assert_eq!(summary.skipped, 11);
        assert_eq!(summary.failed, 0);
        assert_eq!(lines.len(), 12);
        assert!(lines.contains(
            &"  ✓ utils/resilience/HRTHIS_retry.ts → utils/resilience/BrowoKo_retry.ts".to_string()
        ));
        assert_eq!(
            fs::read_to_string(root.join("utils/resilience/BrowoKo_retry.ts")).unwrap(),
            "BrowoKo_retry Browo Koordinator\n"
        );
    }
}
