use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::collections::BTreeMap;
use crate::layout_engine::LayoutMode;
use crate::manager::ManagerCommand;

const DEFAULT_CONFIG: &str = include_str!("../../termtile.default.toml");

pub fn config_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("termtile").join("config.toml"))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    /// Host key names mapped to the command they trigger. The key syntax is
    /// up to the host.
    #[serde(default)]
    pub keys: BTreeMap<String, ManagerCommand>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub tiling: TilingSettings,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct TilingSettings {
    /// Layout the manager starts in.
    #[serde(default)]
    pub default_layout: LayoutMode,
    /// Layout `toggle_tiling` switches to from floating.
    #[serde(default = "default_toggle_layout")]
    pub toggle_layout: LayoutMode,
    /// Vertical gap in cells; the horizontal gap is always twice this.
    #[serde(default)]
    pub gap: i32,
    #[serde(default = "default_gap_step")]
    pub gap_step: i32,
}

impl Default for TilingSettings {
    fn default() -> Self {
        TilingSettings {
            default_layout: LayoutMode::default(),
            toggle_layout: default_toggle_layout(),
            gap: 0,
            gap_step: default_gap_step(),
        }
    }
}

fn default_toggle_layout() -> LayoutMode { LayoutMode::HorizontalSplit }

fn default_gap_step() -> i32 { 1 }

impl TilingSettings {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.gap < 0 {
            issues.push(format!("tiling.gap must be non-negative, got {}", self.gap));
        }

        if self.gap_step <= 0 {
            issues.push(format!("tiling.gap_step must be positive, got {}", self.gap_step));
        }

        if !self.toggle_layout.is_tiling() {
            issues.push("tiling.toggle_layout must be a tiling layout, not floating".to_string());
        }

        issues
    }
}

impl Settings {
    pub fn validate(&self) -> Vec<String> { self.tiling.validate() }
}

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Config> {
        let buf = std::fs::read_to_string(path)?;
        Self::parse(&buf)
    }

    pub fn parse(buf: &str) -> anyhow::Result<Config> { Ok(toml::from_str(buf)?) }

    pub fn default() -> Config {
        Self::parse(DEFAULT_CONFIG).expect("built-in default config is valid")
    }

    /// Reads `path` if given, otherwise the user's config file if one exists,
    /// otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
        if let Some(path) = path {
            return Self::read(path);
        }
        match config_file() {
            Some(path) if path.exists() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Save the current config to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml_string.as_bytes())?;
        Ok(())
    }

    /// Validates the entire configuration and returns a list of issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = self.settings.validate();

        for (key, command) in &self.keys {
            if key.trim().is_empty() {
                issues.push("keys: key names must not be empty".to_string());
            }
            match command {
                ManagerCommand::SetGap(gap) if *gap < 0 => {
                    issues.push(format!("keys.{key}: set_gap must be non-negative, got {gap}"));
                }
                ManagerCommand::EnableTiling(mode) if !mode.is_tiling() => {
                    issues.push(format!("keys.{key}: enable_tiling needs a tiling layout"));
                }
                _ => {}
            }
        }

        issues
    }
}
