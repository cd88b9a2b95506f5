//! Option tree synthesis and resolution
//!
//! Catalog -> [`synthesize`] -> [`OptionTree`] -> overrides -> [`resolve`]

pub mod literal;
pub mod resolve;
pub mod synthesize;

pub use literal::{normalize, CanonicalExample, PACKAGE_NAMESPACE};
pub use resolve::resolve;
pub use synthesize::{synthesize, DependencyOption, OptionTree};
