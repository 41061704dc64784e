use crate::application::{MAX_STEPS_PER_SECOND, MIN_STEPS_PER_SECOND};
use crate::domain::{Language, presets};
use crate::error::{LifeError, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Settings of the embedding application. Every field is optional in the
/// TOML file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// World width in pixels
    pub world_width: u32,
    /// World height in pixels
    pub world_height: u32,
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    pub steps_per_second: f32,
    /// Preset placed at startup; 0 starts with an empty grid
    pub start_preset: u8,
    /// `None` follows the OS locale
    pub language: Option<Language>,
    /// Live-cell probability used by the random fill
    pub random_density: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: 800,
            world_height: 600,
            cell_size: 8,
            steps_per_second: 8.0,
            start_preset: 6,
            language: None,
            random_density: 0.2,
        }
    }
}

impl Config {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(LifeError::Config(format!("{}: {}", path.display(), err))),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|err| LifeError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(LifeError::Config("cell_size must be positive".into()));
        }
        if self.world_width < self.cell_size || self.world_height < self.cell_size {
            return Err(LifeError::Config(format!(
                "world {}x{} is smaller than one {}px cell",
                self.world_width, self.world_height, self.cell_size
            )));
        }
        if !(MIN_STEPS_PER_SECOND..=MAX_STEPS_PER_SECOND).contains(&self.steps_per_second) {
            return Err(LifeError::Config(format!(
                "steps_per_second must be within {}..={}",
                MIN_STEPS_PER_SECOND, MAX_STEPS_PER_SECOND
            )));
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return Err(LifeError::Config("random_density must be within 0..=1".into()));
        }
        if self.start_preset != 0 {
            presets::by_id(self.start_preset)?;
        }
        Ok(())
    }

    /// Grid size as (rows, cols)
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (
            (self.world_height / self.cell_size) as usize,
            (self.world_width / self.cell_size) as usize,
        )
    }

    /// Configured language, or the OS one when unset
    pub fn resolve_language(&self) -> Language {
        self.language.unwrap_or_else(detect_language)
    }
}

/// Language from `LC_ALL`, `LANG` or `LC_MESSAGES`, first non-empty wins
pub fn detect_language() -> Language {
    language_from_env(|key| std::env::var(key).ok())
}

fn language_from_env(lookup: impl Fn(&str) -> Option<String>) -> Language {
    ["LC_ALL", "LANG", "LC_MESSAGES"]
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
        .map_or(Language::English, |tag| Language::from_locale(&tag))
}
