use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::matching::search::{EngineSettings, MAX_RESULTS};
use crate::matching::synthesizer::{SynthesisSettings, MAX_LISTINGS_PER_FIELD};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub listings_per_field: usize,
    pub max_results: usize,
    pub max_relevant_skills: usize,
    /// Fixes the per-request RNG seed. Unset in production.
    pub search_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let synthesis = SynthesisSettings::default();
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            listings_per_field: synthesis.listings_per_field,
            max_results: MAX_RESULTS,
            max_relevant_skills: synthesis.max_relevant_skills,
            search_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            listings_per_field: at_most(
                "LISTINGS_PER_FIELD",
                parse_or(&lookup, "LISTINGS_PER_FIELD", defaults.listings_per_field)?,
                MAX_LISTINGS_PER_FIELD,
            )?,
            max_results: at_most(
                "MAX_RESULTS",
                parse_or(&lookup, "MAX_RESULTS", defaults.max_results)?,
                MAX_RESULTS,
            )?,
            max_relevant_skills: parse_or(
                &lookup,
                "MAX_RELEVANT_SKILLS",
                defaults.max_relevant_skills,
            )?,
            search_seed: lookup("SEARCH_SEED")
                .map(|raw| parse_value("SEARCH_SEED", &raw))
                .transpose()?,
        })
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            synthesis: SynthesisSettings {
                listings_per_field: self.listings_per_field,
                max_relevant_skills: self.max_relevant_skills,
            },
            max_results: self.max_results,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn at_most(key: &str, value: usize, max: usize) -> Result<usize> {
    if value > max {
        bail!("Environment variable '{key}' must be at most {max}, got {value}");
    }
    Ok(value)
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'"))
}
