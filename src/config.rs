use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".modscanrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Paths or glob patterns excluded from graph discovery.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Directories (literal or glob) searched for graph files. Empty means
    /// the whole graphs root.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_graphs_root")]
    pub graphs_root: String,
    /// Annotation name marking a module declaration.
    #[serde(default = "default_module_annotation")]
    pub module_annotation: String,
    /// Scope-marker annotation names recognized in addition to the built-in
    /// keyword set.
    #[serde(default = "default_extra_scope_annotations")]
    pub extra_scope_annotations: Vec<String>,
}

fn default_graphs_root() -> String {
    "./".to_string()
}

fn default_module_annotation() -> String {
    "Module".to_string()
}

fn default_extra_scope_annotations() -> Vec<String> {
    vec!["Scoped".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: Vec::new(),
            graphs_root: default_graphs_root(),
            module_annotation: default_module_annotation(),
            extra_scope_annotations: default_extra_scope_annotations(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are
    /// invalid, or if the module annotation name is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Validate include patterns that contain glob wildcards (* or ?).
        // Patterns without wildcards are treated as literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.module_annotation.is_empty() {
            anyhow::bail!("'moduleAnnotation' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
