use crate::renamer::RenameOutcome;

/// Counters for one import migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub scanned: usize,
    pub migrated: usize,
    pub failed: usize,
    /// Directory entries the walker could not read.
    pub skipped_entries: usize,
    pub changes: usize,
}

impl ImportSummary {
    pub fn unchanged(&self) -> usize {
        self.scanned - self.migrated - self.failed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RenameSummary {
    pub fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed => self.renamed += 1,
            RenameOutcome::Skipped => self.skipped += 1,
            RenameOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.renamed + self.skipped + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
