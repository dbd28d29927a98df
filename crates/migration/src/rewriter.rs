//! Relative import to alias import rewriting.
//!
//! Matching is textual. For every configured folder four shapes are
//! recognised, each with its own quote character:
//!
//! ```text
//! from '../../components/Foo'     ->  from '@components/Foo'
//! from "../components/Foo"        ->  from "@components/Foo"
//! import('../../../screens/Page') ->  import('@screens/Page')
//! import("../screens/Page")       ->  import("@screens/Page")
//! ```
//!
//! Only the `../` run and the folder name change. The keyword, the whitespace
//! after `from`, the quote and everything after the folder separator are kept.

use crate::config::AliasEntry;
use crate::errors::{MigrationError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportShape {
    StaticSingle,
    StaticDouble,
    DynamicSingle,
    DynamicDouble,
}

impl ImportShape {
    const ALL: [ImportShape; 4] = [
        ImportShape::StaticSingle,
        ImportShape::StaticDouble,
        ImportShape::DynamicSingle,
        ImportShape::DynamicDouble,
    ];

    fn quote(self) -> char {
        match self {
            ImportShape::StaticSingle | ImportShape::DynamicSingle => '\'',
            ImportShape::StaticDouble | ImportShape::DynamicDouble => '"',
        }
    }

    /// Regex fragment for everything up to the opening quote, captured as `head`.
    fn head_pattern(self) -> &'static str {
        match self {
            ImportShape::StaticSingle | ImportShape::StaticDouble => r"\bfrom\s+",
            ImportShape::DynamicSingle | ImportShape::DynamicDouble => r"\bimport\(",
        }
    }
}

#[derive(Debug)]
struct ImportPattern {
    regex: Regex,
    replacement: String,
}

impl ImportPattern {
    fn new(shape: ImportShape, entry: &AliasEntry) -> Result<Self> {
        let quote = shape.quote();
        let pattern = format!(
            r"(?P<head>{}){quote}(?:\.\./)+{}/",
            shape.head_pattern(),
            regex::escape(&entry.folder),
        );
        // `$` in an alias must not be read as a group reference.
        let replacement = format!("${{head}}{quote}{}/", entry.alias.replace('$', "$$"));
        Ok(Self {
            regex: Regex::new(&pattern)?,
            replacement,
        })
    }
}

/// Content after rewriting plus the number of substitutions made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub changes: usize,
}

/// Holds the compiled patterns for an alias table so they are built once per run.
#[derive(Debug)]
pub struct ImportRewriter {
    patterns: Vec<ImportPattern>,
}

impl ImportRewriter {
    pub fn new(aliases: &[AliasEntry]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(aliases.len() * ImportShape::ALL.len());
        for entry in aliases {
            for shape in ImportShape::ALL {
                patterns.push(ImportPattern::new(shape, entry)?);
            }
        }
        Ok(Self { patterns })
    }

    pub fn rewrite(&self, content: &str) -> Rewrite {
        let mut current = content.to_string();
        let mut changes = 0;

        for pattern in &self.patterns {
            let count = pattern.regex.find_iter(&current).count();
            if count > 0 {
                current = pattern
                    .regex
                    .replace_all(&current, pattern.replacement.as_str())
                    .into_owned();
                changes += count;
            }
        }

        Rewrite {
            content: current,
            changes,
        }
    }

    /// Rewrites `path` in place and returns the number of substitutions.
    ///
    /// A file with no matching import is never written. With `dry_run` the
    /// count is computed but nothing is written either way.
    pub fn migrate_file(&self, path: &Path, dry_run: bool) -> Result<usize> {
        let original = fs::read_to_string(path).map_err(|source| MigrationError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let rewrite = self.rewrite(&original);
        debug!("{}: {} import(s) to rewrite", path.display(), rewrite.changes);

        if rewrite.changes > 0 && !dry_run {
            fs::write(path, rewrite.content).map_err(|source| MigrationError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(rewrite.changes)
    }
}

/// Convenience wrapper compiling the patterns for a single call.
pub fn rewrite_imports(content: &str, aliases: &[AliasEntry]) -> Result<Rewrite> {
    Ok(ImportRewriter::new(aliases)?.rewrite(content))
}
