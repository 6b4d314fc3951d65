use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{Error, InternalResult};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoCase {
    pub grammar: String,
    pub input: String,
}

impl DemoCase {
    pub fn new(grammar: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            grammar: grammar.into(),
            input: input.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_cases")]
    pub cases: Vec<DemoCase>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            cases: default_cases(),
        }
    }
}

impl DemoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }
}

pub fn from_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: DeserializeOwned>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

// デフォルト値の定義
fn default_cases() -> Vec<DemoCase> {
    vec![
        DemoCase::new("alternation", "abcfffdef(korova)"),
        DemoCase::new("keywords", "abcfffdef(korova)"),
    ]
}
