use crate::errors::MigrationError;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files found under a root plus the walk errors that were skipped on the way.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub errors: Vec<MigrationError>,
}

/// Collects every file below `root` whose name ends with one of `extensions`,
/// never descending into a directory named in `exclude_dirs`.
///
/// Ignore files are not consulted: a `.gitignore`d source file is still a
/// source file that needs migrating. Entries are visited in file-name order
/// within each directory. Walk errors do not stop the scan; they are logged
/// and returned alongside the files.
pub fn scan_source_files(
    root: &Path,
    exclude_dirs: &[String],
    extensions: &[String],
) -> ScanResult {
    let excluded: HashSet<String> = exclude_dirs.iter().cloned().collect();
    let mut result = ScanResult::default();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !(is_dir
                && entry.depth() > 0
                && excluded.contains(&*entry.file_name().to_string_lossy()))
        })
        .build();

    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                // Symlinks are not followed into directories, but a link to a
                // file is scanned like the file itself.
                let is_file = match entry.file_type() {
                    Some(ft) if ft.is_symlink() => entry.path().is_file(),
                    Some(ft) => ft.is_file(),
                    None => false,
                };
                if !is_file {
                    continue;
                }
                let file_name = entry.file_name().to_string_lossy().into_owned();
                if extensions.iter().any(|ext| file_name.ends_with(ext.as_str())) {
                    debug!("Found {}", entry.path().display());
                    result.files.push(entry.into_path());
                }
            }
            Err(err) => {
                debug!("Skipping unreadable entry: {err}");
                result.errors.push(MigrationError::Walk(err));
            }
        }
    }

    result
}
