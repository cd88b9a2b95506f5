//! Built-in dependency catalog
//!
//! Tools that editor plugins commonly shell out to, keyed by the name users
//! enable them under.

use crate::config::definition::{DependencyDefinition, PackageIdentifier};
use crate::options::CanonicalExample;
use crate::types::{DepError, Result};
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    definitions: BTreeMap<String, DependencyDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and malformed identifiers.
    pub fn from_definitions<I>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = DependencyDefinition>,
    {
        let mut catalog = Self::default();
        catalog.extend(definitions)?;
        Ok(catalog)
    }

    /// The seeded catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_definitions(builtin_definitions())?;
        info!("Loaded {} built-in dependency definitions", catalog.len());
        Ok(catalog)
    }

    /// Add definitions. Names already in the catalog are rejected.
    pub fn extend<I>(&mut self, definitions: I) -> Result<()>
    where
        I: IntoIterator<Item = DependencyDefinition>,
    {
        for def in definitions {
            if self.definitions.contains_key(&def.name) {
                return Err(DepError::CatalogIntegrity(format!(
                    "duplicate dependency '{}'",
                    def.name
                )));
            }
            if def.name.is_empty() {
                return Err(DepError::CatalogIntegrity(
                    "dependency with empty name".to_string(),
                ));
            }
            def.default.check_shape().map_err(|e| {
                DepError::CatalogIntegrity(format!("'{}': {}", def.name, e))
            })?;

            debug!("Catalog entry: {} -> {}", def.name, def.default);
            self.definitions.insert(def.name.clone(), def);
        }
        Ok(())
    }

    pub fn definitions(&self) -> &BTreeMap<String, DependencyDefinition> {
        &self.definitions
    }

    pub fn get(&self, name: &str) -> Option<&DependencyDefinition> {
        self.definitions.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn dep(name: &str, default: &str) -> DependencyDefinition {
    DependencyDefinition::new(name, PackageIdentifier::name(default))
}

fn builtin_definitions() -> Vec<DependencyDefinition> {
    vec![
        dep("bat", "bat"),
        dep("cargo", "cargo"),
        dep("chafa", "chafa"),
        dep("coreutils", "coreutils").with_example(PackageIdentifier::name("uutils-coreutils")),
        dep("ctags", "universal-ctags"),
        dep("curl", "curl"),
        dep("direnv", "direnv"),
        dep("fd", "fd"),
        dep("fzf", "fzf").with_example(CanonicalExample::expression("pkgs.skim")),
        dep("gcc", "gcc"),
        dep("gh", "gh"),
        dep("git", "git").with_example(PackageIdentifier::name("gitMinimal")),
        dep("glow", "glow"),
        dep("go", "go"),
        dep("lazygit", "lazygit"),
        dep("lean", "lean4"),
        dep("llm-ls", "llm-ls"),
        dep("manix", "manix"),
        dep("nodejs", "nodejs").with_example(PackageIdentifier::name("nodejs_22")),
        dep("ripgrep", "ripgrep"),
        dep("rust-analyzer", "rust-analyzer"),
        dep("sed", "gnused"),
        dep("texpresso", "texpresso"),
        dep("tinymist", "tinymist"),
        dep("tree-sitter", "tree-sitter"),
        dep("typst", "typst"),
        dep("ueberzug", "ueberzugpp"),
        dep("which", "which"),
        DependencyDefinition::new("xxd", PackageIdentifier::path(["unixtools", "xxd"]))
            .with_example(PackageIdentifier::name("xxd")),
        dep("yazi", "yazi"),
        dep("yq", "yq-go"),
        dep("zk", "zk"),
    ]
}
