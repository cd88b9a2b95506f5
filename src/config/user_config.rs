//! User configuration file parsing

use crate::config::definition::{DependencyDefinition, ExampleSource, PackageIdentifier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub settings: Option<Settings>,
    /// Overrides for options, keyed by dependency name.
    pub dependencies: BTreeMap<String, DependencyOverride>,
    /// Dependencies declared by the user on top of the built-in catalog.
    pub extra: BTreeMap<String, ExtraDependency>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyOverride {
    pub enable: Option<bool>,
    pub package: Option<PackageIdentifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraDependency {
    pub default: PackageIdentifier,
    pub example: Option<ExampleSource>,
}

impl UserConfig {
    pub fn log_level(&self) -> Option<&str> {
        self.settings.as_ref()?.log_level.as_deref()
    }

    /// Extra entries as catalog definitions.
    pub fn extra_definitions(&self) -> Vec<DependencyDefinition> {
        self.extra
            .iter()
            .map(|(name, extra)| DependencyDefinition {
                name: name.clone(),
                default: extra.default.clone(),
                example: extra.example.clone(),
            })
            .collect()
    }
}
