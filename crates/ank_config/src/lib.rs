//! Layered configuration for the ank calculators.
//!
//! This crate provides:
//! - [`AnkConfig`], read from TOML with every field optional
//! - Config file discovery (`--config`, `$ANK_CONFIG`, `./ank.toml`)
//! - Environment overrides (`ANK_NAME_SYSTEM`, `ANK_Y_RULE`, `ANK_LUCKY_MIN_SCORE`)
//! - Resolution into the core [`NameConfig`] and [`LuckyConfig`]

pub mod error;

use std::path::{Path, PathBuf};

use ank_core::{LetterSystem, NameConfig, YRule};
use ank_search::LuckyConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use error::{ConfigError, Result};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "ANK_CONFIG";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ank.toml";

pub const ENV_NAME_SYSTEM: &str = "ANK_NAME_SYSTEM";
pub const ENV_Y_RULE: &str = "ANK_Y_RULE";
pub const ENV_LUCKY_MIN_SCORE: &str = "ANK_LUCKY_MIN_SCORE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NameSection {
    pub system: LetterSystem,
    pub y_rule: YRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuckySection {
    pub min_score: u32,
    pub best_count: usize,
    pub search_days: u32,
}

impl Default for LuckySection {
    fn default() -> Self {
        let d = LuckyConfig::default();
        Self {
            min_score: d.min_score,
            best_count: d.best_count,
            search_days: d.search_days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
}

/// Full configuration. Missing sections and keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkConfig {
    pub name: NameSection,
    pub lucky: LuckySection,
    pub output: OutputSection,
}

impl AnkConfig {
    /// Parse TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        parse(text, Path::new("<string>"))
    }

    /// Load from `path`, or from the discovered default location.
    ///
    /// A missing file yields the defaults. Environment overrides are
    /// applied afterwards.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = resolve_path(path, |k| std::env::var(k).ok());
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "loaded config");
            parse(&text, &path)?
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };
        config.apply_env(|k| std::env::var(k).ok());
        Ok(config)
    }

    /// Apply overrides from an environment lookup. Unparseable values are
    /// logged and ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup(ENV_NAME_SYSTEM) {
            match parse_system(&v) {
                Some(system) => self.name.system = system,
                None => warn!(var = ENV_NAME_SYSTEM, value = %v, "unknown letter system, ignored"),
            }
        }
        if let Some(v) = lookup(ENV_Y_RULE) {
            match parse_y_rule(&v) {
                Some(rule) => self.name.y_rule = rule,
                None => warn!(var = ENV_Y_RULE, value = %v, "unknown y rule, ignored"),
            }
        }
        if let Some(v) = lookup(ENV_LUCKY_MIN_SCORE) {
            match v.trim().parse::<u32>() {
                Ok(n) => self.lucky.min_score = n,
                Err(_) => warn!(var = ENV_LUCKY_MIN_SCORE, value = %v, "not a number, ignored"),
            }
        }
    }

    pub fn name_config(&self) -> NameConfig {
        NameConfig::new(self.name.system, self.name.y_rule)
    }

    /// Lucky-date settings; zero counts are raised to one.
    pub fn lucky_config(&self) -> LuckyConfig {
        let mut best_count = self.lucky.best_count;
        if best_count == 0 {
            warn!("lucky.best_count = 0, using 1");
            best_count = 1;
        }
        let mut search_days = self.lucky.search_days;
        if search_days == 0 {
            warn!("lucky.search_days = 0, using 1");
            search_days = 1;
        }
        LuckyConfig {
            min_score: self.lucky.min_score,
            best_count,
            search_days,
            name: self.name_config(),
        }
    }
}

fn parse(text: &str, path: &Path) -> Result<AnkConfig> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Explicit path, then `$ANK_CONFIG`, then `./ank.toml`.
pub fn resolve_path(explicit: Option<&Path>, lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    match lookup(CONFIG_ENV) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

fn parse_system(s: &str) -> Option<LetterSystem> {
    let s = s.trim();
    [LetterSystem::Pythagorean, LetterSystem::Chaldean]
        .into_iter()
        .find(|v| v.name().eq_ignore_ascii_case(s))
}

fn parse_y_rule(s: &str) -> Option<YRule> {
    let s = s.trim();
    [YRule::Consonant, YRule::VowelWhenAlone]
        .into_iter()
        .find(|v| v.name().eq_ignore_ascii_case(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |k: &str| {
            pairs
                .iter()
                .find(|(name, _)| *name == k)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn empty_text_is_default() {
        let c = AnkConfig::from_toml_str("").unwrap();
        assert_eq!(c, AnkConfig::default());
        assert_eq!(c.lucky_config(), LuckyConfig::default());
    }

    #[test]
    fn partial_sections() {
        let c = AnkConfig::from_toml_str(
            r#"
            [name]
            system = "chaldean"

            [lucky]
            min_score = 45

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(c.name.system, LetterSystem::Chaldean);
        assert_eq!(c.name.y_rule, YRule::Consonant);
        assert_eq!(c.lucky.min_score, 45);
        assert_eq!(c.lucky.best_count, 5);
        assert_eq!(c.output.format, OutputFormat::Json);
    }

    #[test]
    fn y_rule_snake_case() {
        let c = AnkConfig::from_toml_str("[name]\ny_rule = \"vowel_when_alone\"\n").unwrap();
        assert_eq!(c.name_config().y_rule, YRule::VowelWhenAlone);
    }

    #[test]
    fn bad_value_is_a_parse_error() {
        let err = AnkConfig::from_toml_str("[name]\nsystem = \"kabbalah\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_overrides_and_ignores_garbage() {
        let mut c = AnkConfig::default();
        c.apply_env(env(&[
            (ENV_NAME_SYSTEM, "Chaldean"),
            (ENV_Y_RULE, "nonsense"),
            (ENV_LUCKY_MIN_SCORE, "55"),
        ]));
        assert_eq!(c.name.system, LetterSystem::Chaldean);
        assert_eq!(c.name.y_rule, YRule::Consonant);
        assert_eq!(c.lucky.min_score, 55);

        c.apply_env(env(&[(ENV_LUCKY_MIN_SCORE, "many")]));
        assert_eq!(c.lucky.min_score, 55);
    }

    #[test]
    fn path_lookup_order() {
        let explicit = Path::new("/tmp/explicit.toml");
        assert_eq!(
            resolve_path(Some(explicit), env(&[(CONFIG_ENV, "/tmp/env.toml")])),
            explicit
        );
        assert_eq!(
            resolve_path(None, env(&[(CONFIG_ENV, "/tmp/env.toml")])),
            PathBuf::from("/tmp/env.toml")
        );
        assert_eq!(resolve_path(None, env(&[])), PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let c = AnkConfig::load(Some(Path::new("/nonexistent/ank/config.toml"))).unwrap();
        assert_eq!(c.output.format, OutputFormat::Text);
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("ank-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[lucky]\nbest_count = 0\n").unwrap();
        let c = AnkConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(c.lucky.best_count, 0);
        assert_eq!(c.lucky_config().best_count, 1);
    }
}
