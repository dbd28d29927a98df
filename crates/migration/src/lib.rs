//! One-shot migrations for the Browo Koordinator frontend tree.
//!
//! - [`runner::run_import_migration`] rewrites relative imports such as
//!   `'../../components/Foo'` into alias imports (`'@components/Foo'`).
//! - [`runner::run_batch_rename`] moves the `HRTHIS_*` files of the rename
//!   table to their `BrowoKo_*` names and rewrites the old tokens inside them.

pub mod config;
pub mod errors;
pub mod renamer;
pub mod rewriter;
pub mod runner;
pub mod scanner;
pub mod summary;

pub use config::MigrationConfig;
pub use errors::{MigrationError, Result};
