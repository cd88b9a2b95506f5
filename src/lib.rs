//! depopts - dependency option trees
//!
//! Turns a static catalog of dependencies into one configurable option per
//! entry, then resolves the enabled options into an ordered list of package
//! identifiers for an install step to consume.

pub mod config;
pub mod options;
pub mod types;

pub use config::{Catalog, ConfigLoader, DependencyDefinition, ExampleSource, PackageIdentifier};
pub use options::{normalize, resolve, synthesize, CanonicalExample, DependencyOption, OptionTree};
pub use types::{DepError, Result, ShapeError};
