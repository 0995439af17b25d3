//! Pipeline configuration (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::wordlist::{BONUS_ACCEPT_WORDS, DEFAULT_ASK_THRESHOLD};

/// Word-list pipeline settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Directory holding every word-list artifact
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Letter count of game words
    #[serde(default = "default_word_len")]
    pub word_len: usize,
    /// A rated word is a secret answer only above this count
    #[serde(default = "default_ask_threshold")]
    pub ask_threshold: u64,
    /// Corpus search endpoint
    #[serde(default = "default_rating_endpoint")]
    pub rating_endpoint: String,
    /// Per-request timeout (s)
    #[serde(default = "default_rating_timeout_secs")]
    pub rating_timeout_secs: u64,
    /// Text-standard subcorpora counted by the rating
    #[serde(default = "default_subcorpora")]
    pub subcorpora: Vec<String>,
    /// Words always added to the accept list
    #[serde(default = "default_bonus_accept_words")]
    pub bonus_accept_words: Vec<String>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_word_len() -> usize {
    5
}

fn default_ask_threshold() -> u64 {
    DEFAULT_ASK_THRESHOLD
}

fn default_rating_endpoint() -> String {
    "https://bnkorpus.info/rest/korpus/search".to_string()
}

fn default_rating_timeout_secs() -> u64 {
    10
}

fn default_subcorpora() -> Vec<String> {
    vec!["teksty".to_string(), "pieraklady".to_string()]
}

fn default_bonus_accept_words() -> Vec<String> {
    BONUS_ACCEPT_WORDS.iter().map(|w| w.to_string()).collect()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            word_len: default_word_len(),
            ask_threshold: default_ask_threshold(),
            rating_endpoint: default_rating_endpoint(),
            rating_timeout_secs: default_rating_timeout_secs(),
            subcorpora: default_subcorpora(),
            bonus_accept_words: default_bonus_accept_words(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.word_len == 0 {
            return Err(Error::Config("word_len must be positive".into()));
        }
        if self.rating_timeout_secs == 0 {
            return Err(Error::Config("rating_timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// `<data>/<stem>.txt`: Cyrillic corpus list
    pub fn corpus_path(&self, stem: &str) -> PathBuf {
        self.data_dir.join(format!("{}.txt", stem))
    }

    /// `<data>/<stem>.lac.txt`: Łacinka spelling of the corpus list
    pub fn lacinka_path(&self, stem: &str) -> PathBuf {
        self.data_dir.join(format!("{}.lac.txt", stem))
    }

    fn sized(&self, suffix: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", self.word_len, suffix))
    }

    pub fn distinct_lacinka_path(&self) -> PathBuf {
        self.sized("different.lac.txt")
    }

    pub fn distinct_cyrillic_path(&self) -> PathBuf {
        self.sized("different.txt")
    }

    pub fn repeat_lacinka_path(&self) -> PathBuf {
        self.sized("repeat.lac.txt")
    }

    pub fn rating_path(&self) -> PathBuf {
        self.sized("different.rate.txt")
    }

    pub fn denylist_path(&self) -> PathBuf {
        self.sized("deny.txt")
    }

    pub fn ask_path(&self) -> PathBuf {
        self.sized("ask.txt")
    }

    pub fn accept_path(&self) -> PathBuf {
        self.sized("accept.txt")
    }
}

/// Default config file: `lacinka.json` in the working directory
pub fn default_config_path() -> PathBuf {
    PathBuf::from("lacinka.json")
}

/// Load a config file that must exist and parse
pub fn load_config_strict(path: &Path) -> Result<PipelineConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("invalid config {}: {}", path.display(), e)))
}

/// Load the implicit config file: defaults if it is missing or unparseable.
/// Any other read failure is an error.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PipelineConfig::default()),
        Err(e) => {
            return Err(Error::Config(format!(
                "cannot read {}: {}",
                path.display(),
                e
            )))
        }
    };
    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        log::warn!("invalid config {}: {}, using defaults", path.display(), e);
        PipelineConfig::default()
    }))
}

/// Save the config file
pub fn save_config(path: &Path, config: &PipelineConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("serialization failed: {}", e)))?;
    fs::write(path, json)?;
    Ok(())
}

/// Write a fresh config file; an existing one is kept unless `force`
pub fn init_config(path: &Path, config: &PipelineConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} exists, use --force to replace it",
            path.display()
        )));
    }
    config.validate()?;
    save_config(path, config)?;
    log::info!("config written to {}", path.display());
    Ok(())
}
