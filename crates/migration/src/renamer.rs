use crate::config::{RenameEntry, TokenReplacement};
use crate::errors::{MigrationError, Result};
use crate::summary::RenameSummary;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug)]
pub enum RenameOutcome {
    /// Moved to the destination (or would have been, in a dry run).
    Renamed,
    /// The source path does not exist; nothing was created.
    Skipped,
    Failed(MigrationError),
}

/// Moves the files of a rename table, rewriting literal tokens on the way.
///
/// Every entry is handled independently: a failure is reported for that entry
/// and the batch goes on with the next one. Entries already moved stay moved.
pub struct BatchRenamer<'a> {
    root: &'a Path,
    replacements: &'a [TokenReplacement],
    dry_run: bool,
}

impl<'a> BatchRenamer<'a> {
    pub fn new(root: &'a Path, replacements: &'a [TokenReplacement]) -> Self {
        Self {
            root,
            replacements,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn apply_replacements(&self, content: &str) -> String {
        self.replacements
            .iter()
            .fold(content.to_string(), |current, replacement| {
                replacement.apply(&current)
            })
    }

    pub fn rename(&self, entry: &RenameEntry) -> RenameOutcome {
        let source = self.root.join(&entry.from);
        if !source.exists() {
            debug!("{} does not exist, skipping", source.display());
            return RenameOutcome::Skipped;
        }

        match self.move_file(entry) {
            Ok(()) => RenameOutcome::Renamed,
            Err(e) => RenameOutcome::Failed(e),
        }
    }

    /// Renames every entry in table order, calling `on_outcome` after each one.
    pub fn run<F>(&self, entries: &[RenameEntry], mut on_outcome: F) -> RenameSummary
    where
        F: FnMut(&RenameEntry, &RenameOutcome),
    {
        let mut summary = RenameSummary::default();
        for entry in entries {
            let outcome = self.rename(entry);
            summary.record(&outcome);
            on_outcome(entry, &outcome);
        }
        summary
    }

    // read -> transform -> write destination -> delete source
    fn move_file(&self, entry: &RenameEntry) -> Result<()> {
        let source = self.root.join(&entry.from);
        let destination = self.root.join(&entry.to);

        let content = fs::read_to_string(&source).map_err(|e| MigrationError::Read {
            path: source.clone(),
            source: e,
        })?;
        let content = self.apply_replacements(&content);

        if self.dry_run {
            return Ok(());
        }

        let parent = destination.parent().unwrap_or(self.root);
        fs::create_dir_all(parent).map_err(|e| MigrationError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;

        // Written next to the destination so the final rename stays on one filesystem.
        let write_err = |e: std::io::Error| MigrationError::Write {
            path: destination.clone(),
            source: e,
        };
        let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
        temp.write_all(content.as_bytes()).map_err(write_err)?;
        if let Ok(metadata) = fs::metadata(&source) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_err)?;
        }
        temp.persist(&destination)
            .map_err(|e| MigrationError::Persist {
                path: destination.clone(),
                source: e.error,
            })?;

        if entry.from != entry.to {
            fs::remove_file(&source).map_err(|e| MigrationError::Remove {
                path: source.clone(),
                source: e,
            })?;
        }

        debug!("Moved {} -> {}", source.display(), destination.display());
        Ok(())
    }
}
