//! Option synthesis: one configurable entry per catalog definition

use crate::config::{Catalog, DependencyDefinition, PackageIdentifier};
use crate::options::literal::{self, CanonicalExample};
use crate::options::resolve;
use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyOption {
    pub enable: bool,
    pub package: PackageIdentifier,
    pub default: PackageIdentifier,
    pub documentation: String,
    pub package_documentation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<CanonicalExample>,
}

impl DependencyOption {
    /// Build the option for a single definition, with everything at its default.
    pub fn from_definition(def: &DependencyDefinition) -> Result<Self> {
        let example = def
            .example
            .as_ref()
            .map(|source| literal::normalize(source).map_err(|e| e.for_option(&def.name)))
            .transpose()?;

        Ok(Self {
            enable: false,
            package: def.default.clone(),
            default: def.default.clone(),
            documentation: format!("Add {} to dependencies.", def.name),
            package_documentation: format!("The {} package to use.", def.name),
            example,
        })
    }
}

/// Synthesized options keyed by dependency name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionTree {
    options: BTreeMap<String, DependencyOption>,
}

impl OptionTree {
    pub fn get(&self, name: &str) -> Option<&DependencyOption> {
        self.options.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DependencyOption> {
        self.options.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DependencyOption)> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Names of enabled options, in resolution order.
    pub fn enabled_names(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|(_, opt)| opt.enable)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn resolve(&self) -> Vec<PackageIdentifier> {
        resolve::resolve(self.iter())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the option tree for every definition in the catalog.
pub fn synthesize(catalog: &Catalog) -> Result<OptionTree> {
    let mut options = BTreeMap::new();

    for (name, def) in catalog.definitions() {
        let option = DependencyOption::from_definition(def)?;
        debug!(
            "Synthesized option '{}' (default: {}, example: {})",
            name,
            option.default,
            option
                .example
                .as_ref()
                .map(|e| e.display_text.as_str())
                .unwrap_or("-")
        );
        options.insert(name.clone(), option);
    }

    info!("Synthesized {} dependency options", options.len());
    Ok(OptionTree { options })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExampleSource;
    use crate::types::{DepError, ShapeError};

    fn catalog() -> Catalog {
        Catalog::from_definitions([
            DependencyDefinition::new("curl", PackageIdentifier::name("curl")),
            DependencyDefinition::new("git", PackageIdentifier::name("git"))
                .with_example(PackageIdentifier::name("gitMinimal")),
            DependencyDefinition::new("xxd", PackageIdentifier::path(["unixtools", "xxd"]))
                .with_example(PackageIdentifier::path(["unixtools", "xxd"])),
        ])
        .unwrap()
    }

    #[test]
    fn test_one_option_per_definition() {
        let catalog = catalog();
        let tree = synthesize(&catalog).unwrap();
        assert_eq!(tree.len(), catalog.len());
        for name in catalog.names() {
            assert!(tree.get(name).is_some(), "missing option for {}", name);
        }
    }

    #[test]
    fn test_option_defaults() {
        let tree = synthesize(&catalog()).unwrap();
        let curl = tree.get("curl").unwrap();
        assert!(!curl.enable);
        assert_eq!(curl.package, PackageIdentifier::name("curl"));
        assert_eq!(curl.documentation, "Add curl to dependencies.");
        assert_eq!(curl.package_documentation, "The curl package to use.");
        assert!(curl.example.is_none());
    }

    #[test]
    fn test_example_is_normalized() {
        let tree = synthesize(&catalog()).unwrap();
        let git = tree.get("git").unwrap();
        assert_eq!(git.example.as_ref().unwrap().display_text, "pkgs.gitMinimal");

        let xxd = tree.get("xxd").unwrap();
        let example = xxd.example.as_ref().unwrap();
        assert_eq!(example.display_text, "pkgs.unixtools.xxd");
        assert_eq!(example.path_segments, vec!["unixtools", "xxd"]);
    }

    #[test]
    fn test_malformed_example_names_the_option() {
        let catalog = Catalog::from_definitions([DependencyDefinition::new(
            "broken",
            PackageIdentifier::name("broken"),
        )
        .with_example(ExampleSource::Raw(PackageIdentifier::Path(vec![])))])
        .unwrap();

        match synthesize(&catalog) {
            Err(DepError::AdapterShape { name, source }) => {
                assert_eq!(name, "broken");
                assert_eq!(source, ShapeError::EmptyPath);
            }
            other => panic!("expected AdapterShape, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_defaults_are_independent() {
        let catalog = Catalog::from_definitions([
            DependencyDefinition::new("rg", PackageIdentifier::name("ripgrep")),
            DependencyDefinition::new("ripgrep", PackageIdentifier::name("ripgrep")),
        ])
        .unwrap();
        let mut tree = synthesize(&catalog).unwrap();

        tree.get_mut("rg").unwrap().package = PackageIdentifier::name("ripgrep-all");
        assert_eq!(
            tree.get("ripgrep").unwrap().package,
            PackageIdentifier::name("ripgrep")
        );
    }

    #[test]
    fn test_builtin_catalog_synthesizes() {
        let catalog = Catalog::builtin().unwrap();
        let tree = synthesize(&catalog).unwrap();
        assert_eq!(
            tree.get("fzf").unwrap().example.as_ref().unwrap().display_text,
            "pkgs.skim"
        );
        assert!(tree.enabled_names().is_empty());
    }
}
