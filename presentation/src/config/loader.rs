//! Configuration loader with multi-source merging

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Evaluation-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Also require the third face diagonal to be an integer
    pub strict: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self { strict: false }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "full", "verdict", or "json"
    pub format: Option<String>,
    /// Enable colored output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// REPL-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show the welcome banner
    pub show_banner: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            history_file: None,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Evaluation settings
    pub evaluation: EvaluationConfig,
    /// Output settings
    pub output: OutputConfig,
    /// REPL settings
    pub repl: ReplConfig,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./eulerbrick.toml` or `./.eulerbrick.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/euler-brick/config.toml`
    /// 4. Fallback: `~/.config/euler-brick/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<AppConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config files (check both names)
        for filename in &["eulerbrick.toml", ".eulerbrick.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Add explicit config path (highest priority for files).
        // Discovered files may be absent, but a path the user named
        // must exist — a typo should not silently yield defaults.
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> AppConfig {
        AppConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/euler-brick/config.toml if set,
    /// otherwise falls back to ~/.config/euler-brick/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("euler-brick").join("config.toml"))
    }

    /// The project-level config file names searched in the working directory
    pub fn project_config_names() -> [&'static str; 2] {
        ["eulerbrick.toml", ".eulerbrick.toml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(!config.evaluation.strict);
        assert!(config.output.color);
        assert!(config.output.format.is_none());
        assert!(config.repl.show_banner);
    }

    #[test]
    fn test_extract_from_toml_string() {
        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::string(
                r#"
                [evaluation]
                strict = true

                [output]
                format = "json"
                color = false
                "#,
            ))
            .extract()
            .unwrap();
        assert!(config.evaluation.strict);
        assert_eq!(config.output.format.as_deref(), Some("json"));
        assert!(!config.output.color);
        // Untouched section keeps its defaults
        assert!(config.repl.show_banner);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/eulerbrick.toml");
        let error = ConfigLoader::load(Some(&path)).unwrap_err();
        assert!(error.to_string().contains("/definitely/not/here/eulerbrick.toml"));
    }

    #[test]
    fn test_partial_section_merges_over_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::string("[repl]\nshow_banner = false\n"))
            .extract()
            .unwrap();
        assert!(!config.repl.show_banner);
        assert!(config.repl.history_file.is_none());
        assert!(!config.evaluation.strict);
    }
}
