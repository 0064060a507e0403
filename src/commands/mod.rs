//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the library described by the
//! configuration.

pub mod browse;
pub mod config;
pub mod search;
pub mod tag;
pub mod tags;

// Re-export execute functions for convenience
pub use self::browse::execute as browse;
pub use self::config::execute as config;
pub use self::search::execute as search;
pub use self::tag::execute as tag;
pub use self::tags::execute as tags;

use crate::config::ShelfrConfig;
use crate::index::{IndexBuilder, TagIndex};
use crate::scan::ScanError;
use crate::tags::TagStore;

/// Index builder for the library the configuration points at
pub fn builder_for<'a, S: TagStore + ?Sized>(
    config: &ShelfrConfig,
    store: &'a S,
) -> IndexBuilder<'a, S> {
    IndexBuilder::new(config.resolved_ebook_dir(), config.extension.clone(), store)
}

/// Scan the configured library and build its index
///
/// # Errors
///
/// Returns `ScanError` if the library directory is missing or unreadable.
pub fn load_index<S: TagStore + ?Sized>(
    config: &ShelfrConfig,
    store: &S,
) -> Result<TagIndex, ScanError> {
    builder_for(config, store).build()
}
