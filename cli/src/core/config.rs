//! # Envmap Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads named mapping rules from TOML files. Commands that
//! resolve environments by rule name (`envmap rule resolve --name ...`) and
//! list rules (`envmap rule list`) read their rules from here.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (no other source is read)
//! 2. Project-specific `.envmap.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Built-in defaults: a single rule `env = "{*}->{0}"`
//!
//! Rules are merged by name, project entries overriding user entries. Every
//! rule is parsed during validation, so a typo in any rule is reported at
//! load time rather than when that rule is first used.
//!
//! ## Examples
//!
//! ```toml
//! default_rule = "region"
//!
//! [rules]
//! env = "{*}->{0}"
//! region = "dev*,test*->cn; *->us"
//! ```
//!
use crate::core::error::{EnvmapError, Result};
use crate::rules::{Rule, DEFAULT_RULE};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Name of the built-in rule.
pub const DEFAULT_RULE_NAME: &str = "env";
const PROJECT_CONFIG_FILENAME: &str = ".envmap.toml";

/// Represents the configuration file structure.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rule used when a command is not given one explicitly.
    pub default_rule: Option<String>,
    /// Mapping rules by name, in their textual form.
    #[serde(default)]
    pub rules: BTreeMap<String, String>,
}

impl Config {
    /// Name of the rule to use when none is requested.
    pub fn default_rule_name(&self) -> &str {
        self.default_rule.as_deref().unwrap_or(DEFAULT_RULE_NAME)
    }

    /// Looks up and parses the rule called `name`.
    pub fn rule(&self, name: &str) -> Result<Rule> {
        let text = self.rules.get(name).ok_or_else(|| EnvmapError::UnknownRule {
            name: name.to_string(),
        })?;
        Rule::parse(text).with_context(|| format!("Failed to parse rule '{}'", name))
    }

    /// The rule named by `default_rule`.
    pub fn default_rule(&self) -> Result<Rule> {
        self.rule(self.default_rule_name())
    }

    fn with_builtin_rules(mut self) -> Self {
        self.rules
            .entry(DEFAULT_RULE_NAME.to_string())
            .or_insert_with(|| DEFAULT_RULE.to_string());
        self
    }
}

/// Loads, merges and validates configuration.
///
/// With `explicit` set, only that file is read.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    let config = loaded.with_builtin_rules();
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "Envmap", "envmap") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!(
                "No project configuration file ({}) found in current directory or ancestors.",
                PROJECT_CONFIG_FILENAME
            );
            Ok(None)
        }
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let mut rules = user.rules;
    rules.extend(project.rules);
    Config {
        default_rule: project.default_rule.or(user.default_rule),
        rules,
    }
}

fn validate_config(config: &Config) -> Result<()> {
    for (name, text) in &config.rules {
        if name.trim().is_empty() {
            return Err(anyhow!(EnvmapError::Config(
                "Rule names cannot be empty.".to_string()
            )));
        }
        Rule::parse(text).map_err(|e| {
            anyhow!(EnvmapError::Config(format!(
                "Rule '{}' is invalid: {}",
                name, e
            )))
        })?;
    }
    let default_name = config.default_rule_name();
    if !config.rules.contains_key(default_name) {
        return Err(anyhow!(EnvmapError::Config(format!(
            "default_rule '{}' does not name a configured rule.",
            default_name
        ))));
    }
    debug!("Validated {} rule(s).", config.rules.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Target;
    use tempfile::tempdir;

    fn config(default_rule: Option<&str>, rules: &[(&str, &str)]) -> Config {
        Config {
            default_rule: default_rule.map(str::to_string),
            rules: rules
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            default_rule = "region"

            [rules]
            region = "dev*,test*->cn; *->us"
            passthrough = "{*}->{0}"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");
        assert_eq!(config.default_rule.as_deref(), Some("region"));
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules["region"], "dev*,test*->cn; *->us");
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: std::result::Result<Config, _> = toml::from_str("colour = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_gets_builtin_rule() {
        let config = Config::default().with_builtin_rules();
        assert_eq!(config.default_rule_name(), DEFAULT_RULE_NAME);
        assert_eq!(config.rules[DEFAULT_RULE_NAME], DEFAULT_RULE);
        let rule = config.default_rule().unwrap();
        assert_eq!(rule, Rule::default());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_builtin_rule_can_be_overridden() {
        let config = config(None, &[("env", "*->shared")]).with_builtin_rules();
        assert_eq!(config.rules["env"], "*->shared");
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = config(Some("a"), &[("a", "*->user"), ("b", "*->b")]);
        let project = config(None, &[("a", "*->project"), ("c", "*->c")]);
        let merged = merge_configs(user.clone(), Some(project));
        assert_eq!(merged.default_rule.as_deref(), Some("a"));
        assert_eq!(merged.rules["a"], "*->project");
        assert_eq!(merged.rules["b"], "*->b");
        assert_eq!(merged.rules["c"], "*->c");

        assert_eq!(merge_configs(user.clone(), None), user);

        let project = config(Some("c"), &[("c", "*->c")]);
        assert_eq!(
            merge_configs(user, Some(project)).default_rule.as_deref(),
            Some("c")
        );
    }

    #[test]
    fn test_validate_rejects_bad_rule() {
        let config = config(None, &[("env", "{*}->{0}"), ("broken", "{dev->x")]);
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Rule 'broken' is invalid"));
    }

    #[test]
    fn test_validate_rejects_missing_default() {
        let config = config(Some("nope"), &[("env", "{*}->{0}")]);
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("default_rule 'nope'"));
    }

    #[test]
    fn test_unknown_rule_lookup() {
        let config = Config::default().with_builtin_rules();
        let err = config.rule("missing").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EnvmapError>(),
            Some(EnvmapError::UnknownRule { name }) if name == "missing"
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("envmap.toml");
        fs::write(
            &path,
            "default_rule = \"region\"\n[rules]\nregion = \"dev*->cn; *->us\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.default_rule_name(), "region");
        assert!(config.rules.contains_key(DEFAULT_RULE_NAME));
        let rule = config.default_rule().unwrap();
        assert_eq!(
            rule.resolve("devbox").unwrap().target,
            Target::Named("cn".into())
        );
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration file"));
    }

    #[test]
    fn test_find_project_config_walks_up() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(
            find_project_config_path(&nested),
            Some(dir.path().join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_find_project_config_stops_at_git_root() {
        let dir = tempdir().unwrap();
        let repo = dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::create_dir_all(repo.join("src")).unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(find_project_config_path(&repo.join("src")), None);
    }
}
