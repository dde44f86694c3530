//! Application configuration loading for engine defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use mealpick_core::{Pacing, ScoringWeights};

/// Largest accepted pacing delay in milliseconds.
const MAX_PACING_MS: u64 = 10_000;

/// TOML-style file configuration for engine defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileConfig {
    /// Bonus per liked ingredient found in a dish.
    pub like_bonus: Option<f64>,
    /// Bonus when a search term is in the dish name.
    pub search_bonus: Option<f64>,
    /// Exclusive upper bound of the random novelty term.
    pub novelty_jitter: Option<f64>,
    /// Score above which a candidate is a high scorer.
    pub high_score_threshold: Option<f64>,
    /// Share of ranked candidates kept when high scorers are too few.
    pub pool_fraction: Option<f64>,
    /// Pause before a full meal is returned.
    pub meal_pacing_ms: Option<u64>,
    /// Pause before a replacement dish is returned.
    pub single_pacing_ms: Option<u64>,
    /// JSON catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl FileConfig {
    /// Validates config values against engine constraints.
    pub fn validate(&self) -> Result<()> {
        if let Some(jitter) = self.novelty_jitter
            && !(jitter.is_finite() && jitter > 0.0)
        {
            bail!("Invalid config value for `novelty_jitter`: {jitter}. Expected a positive number");
        }
        validate_non_negative("like_bonus", self.like_bonus)?;
        validate_non_negative("search_bonus", self.search_bonus)?;
        if let Some(threshold) = self.high_score_threshold
            && !threshold.is_finite()
        {
            bail!("Invalid config value for `high_score_threshold`: {threshold}. Expected a finite number");
        }
        if let Some(fraction) = self.pool_fraction
            && !(fraction > 0.0 && fraction <= 1.0)
        {
            bail!("Invalid config value for `pool_fraction`: {fraction}. Expected range: (0, 1]");
        }
        validate_pacing_ms("meal_pacing_ms", self.meal_pacing_ms)?;
        validate_pacing_ms("single_pacing_ms", self.single_pacing_ms)?;
        Ok(())
    }

    /// Scoring weights with file overrides applied to defaults.
    #[must_use]
    pub fn weights(&self) -> ScoringWeights {
        let defaults = ScoringWeights::default();
        ScoringWeights {
            like_bonus: self.like_bonus.unwrap_or(defaults.like_bonus),
            search_bonus: self.search_bonus.unwrap_or(defaults.search_bonus),
            novelty_jitter: self.novelty_jitter.unwrap_or(defaults.novelty_jitter),
            high_score_threshold: self
                .high_score_threshold
                .unwrap_or(defaults.high_score_threshold),
            pool_fraction: self.pool_fraction.unwrap_or(defaults.pool_fraction),
        }
    }

    /// Pacing with file overrides applied to defaults.
    #[must_use]
    pub fn pacing(&self) -> Pacing {
        let defaults = Pacing::default();
        Pacing {
            meal: self
                .meal_pacing_ms
                .map_or(defaults.meal, Duration::from_millis),
            single: self
                .single_pacing_ms
                .map_or(defaults.single, Duration::from_millis),
        }
    }
}

fn validate_non_negative(field: &str, value: Option<f64>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if !(value.is_finite() && value >= 0.0) {
        bail!("Invalid config value for `{field}`: {value}. Expected a non-negative number");
    }
    Ok(())
}

fn validate_pacing_ms(field: &str, value: Option<u64>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if value > MAX_PACING_MS {
        bail!("Invalid config value for `{field}`: {value}. Expected range: 0..={MAX_PACING_MS}");
    }
    Ok(())
}

/// Loaded config metadata.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Resolved config path if a base directory is known.
    pub path: Option<PathBuf>,
    /// Parsed file config when a config file exists and was valid.
    pub config: Option<FileConfig>,
    /// Indicates whether configuration was loaded from disk.
    pub loaded_from_file: bool,
}

impl LoadedConfig {
    /// File config, or all-defaults when no file was loaded.
    #[must_use]
    pub fn effective(&self) -> FileConfig {
        self.config.clone().unwrap_or_default()
    }
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/mealpick/config.toml`
/// 2. `$HOME/.config/mealpick/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(
            PathBuf::from(xdg_config_home)
                .join("mealpick")
                .join("config.toml"),
        );
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("mealpick")
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from default path if present.
pub fn load_default_file_config() -> Result<LoadedConfig> {
    let path = resolve_default_config_path();
    let Some(path_ref) = path.as_deref() else {
        return Ok(LoadedConfig {
            path,
            config: None,
            loaded_from_file: false,
        });
    };

    if !path_ref.exists() {
        return Ok(LoadedConfig {
            path,
            config: None,
            loaded_from_file: false,
        });
    }

    let config = load_file_config(path_ref)?;
    Ok(LoadedConfig {
        path,
        config: Some(config),
        loaded_from_file: true,
    })
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (line_index, raw_line) in raw.lines().enumerate() {
        let line_no = line_index + 1;
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            bail!("Invalid config syntax on line {line_no}: expected key = value");
        };

        let key = raw_key.trim();
        let value = raw_value.trim();
        let invalid = || format!("Invalid `{key}` value on line {line_no}");

        match key {
            "like_bonus" => cfg.like_bonus = Some(parse_number(value).with_context(invalid)?),
            "search_bonus" => cfg.search_bonus = Some(parse_number(value).with_context(invalid)?),
            "novelty_jitter" => {
                cfg.novelty_jitter = Some(parse_number(value).with_context(invalid)?);
            }
            "high_score_threshold" => {
                cfg.high_score_threshold = Some(parse_number(value).with_context(invalid)?);
            }
            "pool_fraction" => {
                cfg.pool_fraction = Some(parse_number(value).with_context(invalid)?);
            }
            "meal_pacing_ms" => {
                cfg.meal_pacing_ms = Some(parse_integer_u64(value).with_context(invalid)?);
            }
            "single_pacing_ms" => {
                cfg.single_pacing_ms = Some(parse_integer_u64(value).with_context(invalid)?);
            }
            "catalog_path" => {
                let parsed = parse_string_literal(value).with_context(invalid)?;
                cfg.catalog_path = Some(PathBuf::from(parsed));
            }
            unknown => {
                bail!("Unknown configuration key: '{unknown}' on line {line_no}");
            }
        }
    }
    cfg.validate()?;
    Ok(cfg)
}

fn strip_inline_comment(line: &str) -> &str {
    let mut in_string = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {}
        }
    }
    line
}

fn parse_string_literal(raw_value: &str) -> Result<String> {
    if raw_value.len() < 2 || !raw_value.starts_with('"') || !raw_value.ends_with('"') {
        bail!("Expected double-quoted string");
    }
    Ok(raw_value[1..raw_value.len() - 1].to_string())
}

fn parse_number(raw_value: &str) -> Result<f64> {
    let token = raw_value.trim();
    if token.is_empty() {
        bail!("Expected numeric value");
    }
    let value = token.parse::<f64>()?;
    if !value.is_finite() {
        bail!("Expected a finite number");
    }
    Ok(value)
}

fn parse_integer_u64(raw_value: &str) -> Result<u64> {
    let token = raw_value.trim();
    if token.is_empty() {
        bail!("Expected integer value");
    }
    let value = token.parse::<i128>()?;
    if value < 0 {
        bail!("Expected non-negative integer");
    }
    u64::try_from(value).map_err(|_| anyhow::anyhow!("Integer value out of range for u64"))
}
