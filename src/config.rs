// Configuration for cyrwords
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::words::DEFAULT_MIN_WORD_LEN;

/// Config file looked up in the working directory when no other is named.
pub const DEFAULT_CONFIG_FILE: &str = "cyrwords.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CYRWORDS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// PDF dictionary to read
    pub input: PathBuf,
    /// Word list to create or overwrite
    pub output: PathBuf,
    /// Shortest word, in letters, kept in the output
    pub min_word_len: usize,
    /// Log and skip pages whose text cannot be extracted instead of failing
    pub skip_unreadable_pages: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("dictionary.pdf"),
            output: PathBuf::from("words.txt"),
            min_word_len: DEFAULT_MIN_WORD_LEN,
            skip_unreadable_pages: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `$CYRWORDS_CONFIG`, else `./cyrwords.toml` if present, else defaults.
    pub fn discover() -> Result<Self> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            Self::load(local)
        } else {
            Ok(Self::default())
        }
    }

    pub fn to_toml(&self) -> String {
        // Plain fields only, serialization cannot fail
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
