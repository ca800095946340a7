use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::errors::{
    AlphabetNotFoundError, ConfigError, Error, find_closest_alphabet,
};

/// Name of the alphabet used when neither the caller nor the settings pick one.
pub const DEFAULT_ALPHABET: &str = "ascii";

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The symbols comprising the alphabet (explicit list)
    #[serde(default)]
    pub chars: String,
    /// Starting character for range-based alphabet definition
    /// Use with `length` to define sequential Unicode ranges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Number of characters in range-based alphabet
    /// Use with `start` to define sequential Unicode ranges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// One-line description shown by `config list`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Shorthand for an explicit symbol list.
    pub fn from_chars(chars: impl Into<String>) -> Self {
        AlphabetConfig {
            chars: chars.into(),
            ..Default::default()
        }
    }

    /// Returns the effective symbol set, generating from range if needed.
    ///
    /// Priority:
    /// 1. If `chars` is non-empty, use it directly
    /// 2. If `start` + `length` are set, generate sequential range
    /// 3. Otherwise the alphabet is empty
    pub fn effective_chars(&self) -> Result<String, ConfigError> {
        if !self.chars.is_empty() {
            return Ok(self.chars.clone());
        }

        if let (Some(start_str), Some(length)) = (&self.start, self.length) {
            let start_char = start_str
                .chars()
                .next()
                .ok_or_else(|| ConfigError::invalid_range("start must contain a character"))?;

            return Self::generate_range(start_char as u32, length);
        }

        Err(ConfigError::EmptyAlphabet)
    }

    /// Number of symbols this definition yields, without generating them.
    pub fn symbol_count(&self) -> usize {
        if !self.chars.is_empty() {
            self.chars.chars().count()
        } else {
            self.length.unwrap_or(0)
        }
    }

    /// Generate a string of sequential Unicode characters from a range.
    fn generate_range(start: u32, length: usize) -> Result<String, ConfigError> {
        const MAX_UNICODE: u32 = 0x10FFFF;
        const SURROGATE_START: u32 = 0xD800;
        const SURROGATE_END: u32 = 0xDFFF;

        if length == 0 {
            return Err(ConfigError::invalid_range("length must be greater than 0"));
        }

        let end = u32::try_from(length - 1)
            .ok()
            .and_then(|span| start.checked_add(span))
            .ok_or_else(|| ConfigError::invalid_range("range exceeds maximum Unicode codepoint"))?;

        if end > MAX_UNICODE {
            return Err(ConfigError::invalid_range(format!(
                "range end U+{:X} exceeds maximum Unicode codepoint U+{:X}",
                end, MAX_UNICODE
            )));
        }

        if start <= SURROGATE_END && end >= SURROGATE_START {
            return Err(ConfigError::invalid_range(format!(
                "range U+{:X}..U+{:X} crosses surrogate gap (U+D800..U+DFFF)",
                start, end
            )));
        }

        (start..=end)
            .map(|codepoint| {
                char::from_u32(codepoint).ok_or_else(|| {
                    ConfigError::invalid_range(format!("invalid codepoint U+{:X}", codepoint))
                })
            })
            .collect()
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Alphabet used when none is named
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

/// Collection of alphabet configurations loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabet configurations bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `<config dir>/printable-string/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching names. A file
    /// that exists but fails to parse is logged and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("printable-string").join("alphabets.toml");
            config.merge_file_if_exists(&user_config_path);
        }

        config.merge_file_if_exists(Path::new("alphabets.toml"));

        Ok(config)
    }

    fn merge_file_if_exists(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => {
                log::debug!(
                    "merging {} alphabets from {}",
                    other.alphabets.len(),
                    path.display()
                );
                self.merge(other);
            }
            Err(e) => {
                log::warn!("failed to load alphabets from {}: {}", path.display(), e);
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in `self`.
    /// A default alphabet set in `other` wins as well.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// All alphabet names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// The alphabet to use when none is named.
    pub fn default_name(&self) -> &str {
        self.settings
            .default_alphabet
            .as_deref()
            .unwrap_or(DEFAULT_ALPHABET)
    }

    /// Builds the named alphabet.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] (with a spelling suggestion) for an unknown name,
    /// [`Error::Config`] for a definition that does not yield a usable
    /// alphabet.
    pub fn build(&self, name: &str) -> Result<Alphabet, Error> {
        let config = self.get(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;

        let chars = config.effective_chars()?;
        Ok(Alphabet::new(chars.chars().collect())?)
    }
}
