use crate::error::{Result, TodoError};
use crate::model::Filter;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 80;
const MIN_LINE_WIDTH: usize = 20;

/// Overrides the config directory (mainly for tests and sandboxes).
pub const CONFIG_DIR_ENV: &str = "TODOMVC_CONFIG_DIR";

/// Keys accepted by `todomvc config`.
pub const KEYS: [&str; 4] = ["line-width", "color", "demo", "filter"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        };
        f.write_str(name)
    }
}

impl FromStr for ColorChoice {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(TodoError::Config(format!(
                "color must be auto, always or never (got {})",
                s
            ))),
        }
    }
}

/// Configuration for the terminal client, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Width the task list is laid out to; long titles are truncated
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    #[serde(default)]
    pub color: ColorChoice,

    /// Start sessions from the demo seed instead of an empty list
    #[serde(default)]
    pub demo: bool,

    /// Filter applied when a session starts
    #[serde(default)]
    pub filter: Filter,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            color: ColorChoice::Auto,
            demo: false,
            filter: Filter::All,
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: TodoConfig = serde_json::from_str(&content)?;
        if config.line_width < MIN_LINE_WIDTH {
            warn!(
                line_width = config.line_width,
                min = MIN_LINE_WIDTH,
                "line-width below minimum, clamping"
            );
            config.line_width = MIN_LINE_WIDTH;
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "line-width" => Ok(self.line_width.to_string()),
            "color" => Ok(self.color.to_string()),
            "demo" => Ok(self.demo.to_string()),
            "filter" => Ok(self.filter.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "line-width" => {
                let width: usize = value.parse().map_err(|_| {
                    TodoError::Config(format!("line-width must be a number (got {})", value))
                })?;
                if width < MIN_LINE_WIDTH {
                    return Err(TodoError::Config(format!(
                        "line-width must be at least {}",
                        MIN_LINE_WIDTH
                    )));
                }
                self.line_width = width;
            }
            "color" => self.color = value.parse()?,
            "demo" => {
                self.demo = value.parse().map_err(|_| {
                    TodoError::Config(format!("demo must be true or false (got {})", value))
                })?;
            }
            "filter" => {
                self.filter = value
                    .parse::<Filter>()
                    .map_err(|e| TodoError::Config(e.to_string()))?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn unknown_key(key: &str) -> TodoError {
    TodoError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}

/// Resolves the directory holding `config.json`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    ProjectDirs::from("com", "todomvc", "todomvc")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TodoError::Config("Could not determine config directory".to_string()))
}
