//! Catalog and configuration
//!
//! 1. Built-in catalog (seeded in `catalog.rs`)
//! 2. User config: extra catalog entries and per-option overrides

mod catalog;
mod definition;
mod loader;
mod user_config;

pub use catalog::Catalog;
pub use definition::{DependencyDefinition, ExampleSource, PackageIdentifier};
pub use loader::{apply_overrides, ConfigFile, ConfigLoader};
pub use user_config::{DependencyOverride, ExtraDependency, Settings, UserConfig};
