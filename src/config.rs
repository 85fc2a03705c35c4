use crate::constants::output;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_generated_dir")]
    pub generated_dir: PathBuf,
    #[serde(default = "default_resized_dir")]
    pub resized_dir: PathBuf,
}

fn default_generated_dir() -> PathBuf {
    PathBuf::from(output::GENERATED_DIR)
}

fn default_resized_dir() -> PathBuf {
    PathBuf::from(output::RESIZED_DIR)
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            generated_dir: default_generated_dir(),
            resized_dir: default_resized_dir(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Extensions without the leading dot; matched case-insensitively
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    output::SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            extensions: default_extensions(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".softlight-icons"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("settings.yaml"))
    }

    /// Load the user's settings file, or defaults when there is none
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::debug!("No config at {}, using defaults", config_path.display());
            Ok(Config::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = serde_yaml::from_str(&contents)
            .context("Failed to parse config file")?;

        config.normalize();
        config.validate()?;

        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Strip leading dots from extensions and lowercase them
    pub fn normalize(&mut self) {
        for ext in &mut self.discovery.extensions {
            *ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output.generated_dir.as_os_str().is_empty() {
            bail!("generated_dir cannot be empty");
        }
        if self.output.resized_dir.as_os_str().is_empty() {
            bail!("resized_dir cannot be empty");
        }

        if self.discovery.extensions.is_empty() {
            bail!("at least one image extension is required");
        }
        if self.discovery.extensions.iter().any(|e| e.trim().trim_start_matches('.').is_empty()) {
            bail!("image extensions cannot be empty");
        }

        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let yaml = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs::write(path, yaml)
            .context("Failed to write config file")?;

        Ok(())
    }
}
