//! Configuration tables for the migration tools
//!
//! Both tools run from built-in tables. An optional TOML file can replace
//! any of them; fields left out of the file keep their built-in value:
//!
//! ```toml
//! marker_file = "App.tsx"
//! exclude_dirs = ["node_modules", "dist", "build", ".git"]
//! extensions = [".ts", ".tsx"]
//!
//! [[aliases]]
//! folder = "components"
//! alias = "@components"
//!
//! [[renames]]
//! from = "utils/HRTHIS_retry.ts"
//! to = "utils/BrowoKo_retry.ts"
//!
//! [[replacements]]
//! from = "HRTHIS_"
//! to = "BrowoKo_"
//! ```

use crate::errors::{MigrationError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File that must exist in the project root before imports are rewritten.
pub const DEFAULT_MARKER_FILE: &str = "App.tsx";

pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["node_modules", "dist", "build", ".git"];

pub const DEFAULT_EXTENSIONS: &[&str] = &[".ts", ".tsx"];

pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("components", "@components"),
    ("screens", "@screens"),
    ("stores", "@stores"),
    ("hooks", "@hooks"),
    ("utils", "@utils"),
    ("types", "@types"),
    ("layouts", "@layouts"),
    ("styles", "@styles"),
    ("config", "@config"),
];

pub const DEFAULT_RENAMES: &[(&str, &str)] = &[
    ("utils/HRTHIS_storageHelper.ts", "utils/BrowoKo_storageHelper.ts"),
    ("utils/HRTHIS_xpSystem.ts", "utils/BrowoKo_xpSystem.ts"),
    (
        "utils/notifications/HRTHIS_notificationTriggers.ts",
        "utils/notifications/BrowoKo_notificationTriggers.ts",
    ),
    (
        "utils/resilience/HRTHIS_circuitBreaker.ts",
        "utils/resilience/BrowoKo_circuitBreaker.ts",
    ),
    (
        "utils/resilience/HRTHIS_retry.ts",
        "utils/resilience/BrowoKo_retry.ts",
    ),
    (
        "utils/resilience/HRTHIS_timeout.ts",
        "utils/resilience/BrowoKo_timeout.ts",
    ),
    (
        "utils/security/HRTHIS_bruteForceProtection.ts",
        "utils/security/BrowoKo_bruteForceProtection.ts",
    ),
    (
        "utils/security/HRTHIS_passwordPolicies.ts",
        "utils/security/BrowoKo_passwordPolicies.ts",
    ),
    (
        "utils/security/HRTHIS_sanitization.ts",
        "utils/security/BrowoKo_sanitization.ts",
    ),
    (
        "utils/security/HRTHIS_securityTest.ts",
        "utils/security/BrowoKo_securityTest.ts",
    ),
    (
        "utils/security/HRTHIS_sessionManager.ts",
        "utils/security/BrowoKo_sessionManager.ts",
    ),
    (
        "utils/security/HRTHIS_validation.ts",
        "utils/security/BrowoKo_validation.ts",
    ),
];

/// Applied in order, so `HRTHIS_` is rewritten before `HRthis` is looked at.
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("HRTHIS_", "BrowoKo_"),
    ("HRthis", "Browo Koordinator"),
];

/// One `folder -> alias` pair, e.g. `components -> @components`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AliasEntry {
    pub folder: String,
    pub alias: String,
}

/// One entry of the rename table, both paths relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenameEntry {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// A literal, case-sensitive, global substitution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenReplacement {
    pub from: String,
    pub to: String,
}

impl TokenReplacement {
    pub fn apply(&self, content: &str) -> String {
        content.replace(&self.from, &self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrationConfig {
    pub marker_file: String,
    pub exclude_dirs: Vec<String>,
    pub extensions: Vec<String>,
    pub aliases: Vec<AliasEntry>,
    pub renames: Vec<RenameEntry>,
    pub replacements: Vec<TokenReplacement>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            marker_file: DEFAULT_MARKER_FILE.to_string(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|d| d.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(folder, alias)| AliasEntry {
                    folder: folder.to_string(),
                    alias: alias.to_string(),
                })
                .collect(),
            renames: DEFAULT_RENAMES
                .iter()
                .map(|(from, to)| RenameEntry {
                    from: PathBuf::from(from),
                    to: PathBuf::from(to),
                })
                .collect(),
            replacements: DEFAULT_REPLACEMENTS
                .iter()
                .map(|(from, to)| TokenReplacement {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        }
    }
}

impl MigrationConfig {
    /// Returns the built-in tables when `path` is `None`.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| MigrationError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            toml::from_str(&content).map_err(|source| MigrationError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        tracing::debug!(
            "Loaded config from {}: {} aliases, {} renames",
            path.display(),
            config.aliases.len(),
            config.renames.len()
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.aliases {
            if !seen.insert(entry.folder.as_str()) {
                return Err(MigrationError::DuplicateAlias(entry.folder.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("migration.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_tables() {
        let config = MigrationConfig::default();

        assert_eq!(config.marker_file, "App.tsx");
        assert_eq!(config.aliases.len(), 9);
        assert_eq!(config.renames.len(), 12);
        assert!(
            config
                .aliases
                .iter()
                .all(|entry| entry.alias == format!("@{}", entry.folder))
        );
        assert!(config.renames.iter().all(|entry| {
            let from = entry.from.to_string_lossy().replace("HRTHIS_", "BrowoKo_");
            PathBuf::from(from) == entry.to
        }));
        config.validate().unwrap();
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
marker_file = "index.tsx"

[[aliases]]
folder = "lib"
alias = "~lib"
"#,
        );

        let config = MigrationConfig::load(&path).unwrap();

        assert_eq!(config.marker_file, "index.tsx");
        assert_eq!(
            config.aliases,
            vec![AliasEntry {
                folder: "lib".to_string(),
                alias: "~lib".to_string(),
            }]
        );
        assert_eq!(config.renames, MigrationConfig::default().renames);
        assert_eq!(config.exclude_dirs, MigrationConfig::default().exclude_dirs);
    }

    #[test]
    fn test_load_rejects_duplicate_alias() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[[aliases]]
folder = "hooks"
alias = "@hooks"

[[aliases]]
folder = "hooks"
alias = "@other"
"#,
        );

        match MigrationConfig::load(&path) {
            Err(MigrationError::DuplicateAlias(folder)) => assert_eq!(folder, "hooks"),
            other => panic!("expected duplicate alias error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_reports_parse_and_read_errors() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "unknown_key = 1\n");
        assert!(matches!(
            MigrationConfig::load(&path),
            Err(MigrationError::ConfigParse { .. })
        ));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            MigrationConfig::load(&missing),
            Err(MigrationError::ConfigRead { .. })
        ));
    }

    #[test]
    fn test_token_replacement_is_literal() {
        let replacement = TokenReplacement {
            from: "a.b".to_string(),
            to: "x".to_string(),
        };
        assert_eq!(replacement.apply("a.b aXb a.b"), "x aXb x");
    }
}
