//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));
static DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".srcspan/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: Output,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    placeholder: Option<String>,
}

impl Output {
    fn default_format() -> &'static str {
        "text"
    }

    fn default_placeholder() -> &'static str {
        "(source not available)"
    }

    /// Configured output format identifier; parsed by the CLI layer.
    pub fn format(&self) -> String {
        self.format
            .clone()
            .unwrap_or_else(|| Self::default_format().to_owned())
    }

    /// Text rendered in place of source that could not be reconstructed.
    pub fn placeholder(&self) -> String {
        self.placeholder
            .clone()
            .unwrap_or_else(|| Self::default_placeholder().to_owned())
    }
}

impl Default for Output {
    fn default() -> Self {
        Self {
            format: Some(Self::default_format().to_owned()),
            placeholder: Some(Self::default_placeholder().to_owned()),
        }
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    format: Option<String>,
    placeholder: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            format: env::var("SRCSPAN_FORMAT").ok(),
            placeholder: env::var("SRCSPAN_PLACEHOLDER").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(format: &str, placeholder: &str) -> Self {
        Self {
            format: Some(format.to_owned()),
            placeholder: Some(placeholder.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace config, and env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = workspace_config_path()?;
        Self::load_with_layers(global, workspace, env)
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(&DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        Ok(apply_env_overrides(merged, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            output: merge_output(self.output, other.output),
        }
    }
}

fn merge_output(mut base: Output, overlay: Output) -> Output {
    if let Some(value) = overlay.format {
        base.format = Some(value);
    }
    if let Some(value) = overlay.placeholder {
        base.placeholder = Some(value);
    }
    base
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("srcspan/config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir()?;
    let root = find_repo_root(&cwd).unwrap_or(cwd);
    Ok(Some(root.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(format) = env.format {
        config.output.format = Some(format);
    }
    if let Some(placeholder) = env.placeholder {
        config.output.placeholder = Some(placeholder);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_uses_defaults_when_no_files() {
        let config = Config::load_with_layers(None, None, EnvOverrides::default())
            .expect("load default config");
        assert_eq!(config.output.format(), "text");
        assert_eq!(config.output.placeholder(), "(source not available)");
    }

    #[test]
    fn merge_global_and_workspace() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let global = temp.path().join("config.toml");
        fs::write(
            &global,
            r#"
[output]
format = "json"
"#,
        )?;

        let workspace_dir = temp.path().join("repo");
        fs::create_dir_all(workspace_dir.join(".srcspan"))?;
        fs::create_dir_all(workspace_dir.join(".git"))?;
        fs::write(
            workspace_dir.join(".srcspan/config.toml"),
            r#"
[output]
placeholder = "<<missing>>"
"#,
        )?;

        let global_path = Some(global);
        let workspace_path = Some(workspace_dir.join(".srcspan/config.toml"));

        let config =
            Config::load_with_layers(global_path, workspace_path, EnvOverrides::default())?;

        assert_eq!(config.output.format(), "json");
        assert_eq!(config.output.placeholder(), "<<missing>>");

        Ok(())
    }

    #[test]
    fn env_overrides_take_precedence() -> Result<()> {
        let overrides = EnvOverrides::for_tests("json", "n/a");
        let config = Config::load_with_layers(None, None, overrides)?;
        assert_eq!(config.output.format(), "json");
        assert_eq!(config.output.placeholder(), "n/a");
        Ok(())
    }

    #[test]
    fn invalid_config_returns_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let file = temp.path().join("broken.toml");
        fs::write(&file, "this is not toml")?;
        let result = Config::from_file(&file);
        assert!(result.is_err());
        Ok(())
    }
}
