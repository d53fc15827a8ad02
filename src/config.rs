// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_PATH: &str = "SEARCH_CONFIG_PATH";
const DEFAULT_PATH: &str = "config/search.toml";

/// API credentials, read from the environment (`.env` is honored by `main`).
#[derive(Debug, Clone)]
pub struct ApiTokens {
    pub headhunter: String,
    pub superjob: String,
}

impl ApiTokens {
    pub fn from_env() -> Result<Self> {
        let headhunter =
            env::var("HH_TOKEN").map_err(|_| anyhow!("Missing HH_TOKEN env var"))?;
        let superjob = env::var("SJ_TOKEN").map_err(|_| anyhow!("Missing SJ_TOKEN env var"))?;
        Ok(Self {
            headhunter,
            superjob,
        })
    }
}

/// hh.ru query knobs. Defaults target Moscow developer vacancies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub area_id: u32,
    pub specialization_id: u32,
    pub professional_role_id: u32,
    pub period_days: u32,
    pub per_page: u32,
    /// Hard stop for runaway pagination, in pages per language.
    pub page_ceiling: u32,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            area_id: 1,
            specialization_id: 1,
            professional_role_id: 96,
            period_days: 30,
            per_page: 10,
            page_ceiling: 200,
        }
    }
}

/// superjob.ru query knobs. Defaults target the Moscow programming catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub town_id: u32,
    pub catalogue_id: u32,
    pub period_days: u32,
    pub per_page: u32,
    /// Hard stop for runaway pagination, in pages per language.
    pub page_ceiling: u32,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            town_id: 4,
            catalogue_id: 48,
            period_days: 7,
            per_page: 10,
            page_ceiling: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Shown in table titles next to the source name.
    pub region_label: String,
    /// Languages to sweep, one summary row each. Order is preserved.
    pub languages: Vec<String>,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            region_label: "Moscow".to_string(),
            languages: [
                "JavaScript",
                "Python",
                "Java",
                "C#",
                "PHP",
                "C++",
                "C",
                "Ruby",
                "Go",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            headhunter: HeadHunterConfig::default(),
            superjob: SuperJobConfig::default(),
        }
    }
}

/// Load search config from an explicit TOML path.
pub fn load_from(path: &Path) -> Result<SearchConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading search config from {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("parsing search config from {}", path.display()))
}

/// Load search config using env var + fallbacks:
/// 1) $SEARCH_CONFIG_PATH
/// 2) config/search.toml
/// 3) built-in defaults
pub fn load() -> Result<SearchConfig> {
    if let Ok(p) = env::var(ENV_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_from(&pb);
        } else {
            return Err(anyhow!("SEARCH_CONFIG_PATH points to non-existent path"));
        }
    }
    let default_p = PathBuf::from(DEFAULT_PATH);
    if default_p.exists() {
        return load_from(&default_p);
    }
    Ok(SearchConfig::default())
}
