//! Configuration loader
//!
//! User config is looked up in priority order:
//! 1. Explicit path (`--config`)
//! 2. ./.depopts.toml (project-specific)
//! 3. $DEPOPTS_CONFIG
//! 4. ~/.config/depopts/config.toml (user-global)
//!
//! The first file found wins. Its `[extra]` entries are added to the
//! built-in catalog and its `[dependencies]` entries override the
//! synthesized options.

use crate::config::user_config::DependencyOverride;
use crate::config::{Catalog, PackageIdentifier, UserConfig};
use crate::options::{synthesize, OptionTree};
use crate::types::{DepError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A parsed user config file and where it was found.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub config: UserConfig,
}

pub struct ConfigLoader {
    catalog: Catalog,
    user_config: Option<UserConfig>,
    source: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(explicit: Option<&Path>) -> Result<Self> {
        Self::from_config_file(Self::locate_user_config(explicit)?)
    }

    /// Build a loader on the built-in catalog from an already-located config file.
    pub fn from_config_file(file: Option<ConfigFile>) -> Result<Self> {
        let (user_config, source) = match file {
            Some(ConfigFile { path, config }) => (Some(config), Some(path)),
            None => (None, None),
        };

        let loader = Self::from_parts(Catalog::builtin()?, user_config)?;
        Ok(Self { source, ..loader })
    }

    /// Build a loader from an already-loaded catalog and user config.
    pub fn from_parts(mut catalog: Catalog, user_config: Option<UserConfig>) -> Result<Self> {
        if let Some(config) = &user_config {
            let extras = config.extra_definitions();
            if !extras.is_empty() {
                info!("Adding {} user-defined dependencies", extras.len());
                catalog.extend(extras)?;
            }
        }

        Ok(Self {
            catalog,
            user_config,
            source: None,
        })
    }

    /// Find and parse the user config file, without touching the catalog.
    pub fn locate_user_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(DepError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            let config = Self::read_config(path)?;
            return Ok(Some(ConfigFile {
                path: path.to_path_buf(),
                config,
            }));
        }

        let mut candidates = Vec::new();

        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(".depopts.toml"));
        }

        if let Ok(config_path) = std::env::var("DEPOPTS_CONFIG") {
            candidates.push(PathBuf::from(config_path));
        }

        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("depopts").join("config.toml"));
        }

        for path in candidates {
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok(Some(ConfigFile { path, config }));
            }
        }

        debug!("No user config file found");
        Ok(None)
    }

    fn read_config(path: &Path) -> Result<UserConfig> {
        debug!("Loading user config from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| DepError::ConfigError(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| DepError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn user_config(&self) -> Option<&UserConfig> {
        self.user_config.as_ref()
    }

    /// Path of the config file in use, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Synthesize the option tree and apply user overrides to it.
    pub fn option_tree(&self) -> Result<OptionTree> {
        let mut tree = synthesize(&self.catalog)?;
        if let Some(config) = &self.user_config {
            apply_overrides(&mut tree, &config.dependencies)?;
        }
        Ok(tree)
    }

    pub fn resolve(&self) -> Result<Vec<PackageIdentifier>> {
        Ok(self.option_tree()?.resolve())
    }
}

/// Apply `enable`/`package` overrides. Values are taken as given; only the
/// option name is checked.
pub fn apply_overrides(
    tree: &mut OptionTree,
    overrides: &BTreeMap<String, DependencyOverride>,
) -> Result<()> {
    for (name, ov) in overrides {
        let option = tree
            .get_mut(name)
            .ok_or_else(|| DepError::UnknownOption(name.clone()))?;

        if let Some(enable) = ov.enable {
            debug!("Override: {}.enable = {}", name, enable);
            option.enable = enable;
        }
        if let Some(package) = &ov.package {
            debug!("Override: {}.package = {}", name, package);
            option.package = package.clone();
        }
    }
    Ok(())
}
