//! Configuration for assetrender

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::helper::MissingAsset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// URL prefix all built assets are served under
    #[serde(default = "default_static_url_root")]
    pub static_url_root: String,

    /// What to render for asset keys missing from the manifest
    #[serde(default)]
    pub missing_asset: MissingAsset,

    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Where the manifest and templates live, and where rendered files go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directory rendered files are written to
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Asset manifest produced by the revisioning step
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,

    #[serde(default = "default_scripts_template")]
    pub scripts_template: PathBuf,

    #[serde(default = "default_styles_template")]
    pub styles_template: PathBuf,
}

fn default_static_url_root() -> String {
    crate::DEFAULT_STATIC_URL_ROOT.to_string()
}

fn default_destination() -> PathBuf {
    PathBuf::from("wem/templates/")
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("static/_build/manifest.json")
}

fn default_scripts_template() -> PathBuf {
    PathBuf::from("static/src/hbs/_scripts.hbs")
}

fn default_styles_template() -> PathBuf {
    PathBuf::from("static/src/hbs/_styles.hbs")
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            manifest_path: default_manifest_path(),
            scripts_template: default_scripts_template(),
            styles_template: default_styles_template(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            static_url_root: default_static_url_root(),
            missing_asset: MissingAsset::default(),
            templates: TemplatesConfig::default(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::from_file(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("assetrender").join("config.yml")),
            Some(PathBuf::from("assetrender.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Config::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context(format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            serde_yaml::from_str(&content).context(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Both configured templates, scripts first
    pub fn template_paths(&self) -> [&Path; 2] {
        [
            self.templates.scripts_template.as_path(),
            self.templates.styles_template.as_path(),
        ]
    }
}
