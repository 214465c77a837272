//! Kashida configuration system
//!
//! This crate provides centralized configuration for the reshaper and the
//! bidi reorderer, loading settings from `kashida.toml` with environment
//! variable overrides.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "kashida.toml";

/// Errors raised while loading or validating configuration.
///
/// All of these indicate a caller or deployment mistake rather than bad
/// input text, so they are surfaced instead of being defaulted away.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid language `{0}` (expected Arabic, ArabicV2 or Kurdish)")]
    InvalidLanguage(String),
    #[error("invalid base direction `{0}` (expected L, R or auto)")]
    InvalidBaseDirection(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct KashidaConfig {
    /// Arabic reshaper settings
    pub reshaper: ReshaperConfig,
    /// Bidi reordering settings
    pub bidi: BidiConfig,
}

/// Letter-form table selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Arabic,
    /// Arabic with base letters kept for isolated forms.
    ArabicV2,
    Kurdish,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Arabic => "Arabic",
            Language::ArabicV2 => "ArabicV2",
            Language::Kurdish => "Kurdish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Arabic" | "arabic" => Ok(Language::Arabic),
            "ArabicV2" | "arabicv2" | "arabic-v2" => Ok(Language::ArabicV2),
            "Kurdish" | "kurdish" => Ok(Language::Kurdish),
            other => Err(ConfigError::InvalidLanguage(other.to_string())),
        }
    }
}

/// Base direction hint for paragraph analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseDirection {
    /// Detect paragraph base direction from text (first strong char).
    #[default]
    Auto,
    /// Force overall left-to-right base direction.
    #[serde(alias = "L")]
    Ltr,
    /// Force overall right-to-left base direction.
    #[serde(alias = "R")]
    Rtl,
}

impl FromStr for BaseDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "auto" | "Auto" | "" => Ok(BaseDirection::Auto),
            "L" | "ltr" | "LTR" => Ok(BaseDirection::Ltr),
            "R" | "rtl" | "RTL" => Ok(BaseDirection::Rtl),
            other => Err(ConfigError::InvalidBaseDirection(other.to_string())),
        }
    }
}

/// Arabic reshaper configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReshaperConfig {
    /// Letter-form table to shape with
    pub language: Language,
    /// Master switch for ligature substitution
    pub support_ligatures: bool,
    /// Drop harakat (diacritics) from the output
    pub delete_harakat: bool,
    /// Attach harakat to the glyph before the one they follow
    pub shift_harakat_position: bool,
    /// Drop tatweel (U+0640) from the output
    pub delete_tatweel: bool,
    /// Let ZERO WIDTH JOINER take part in joining decisions
    pub support_zwj: bool,
    /// Emit the base letter instead of its isolated presentation form
    pub use_unshaped_instead_of_isolated: bool,
    /// State of ligatures not listed in `ligatures`
    pub ligatures_default: bool,
    /// Per-ligature overrides keyed by ligature name (e.g. "ALLAH")
    pub ligatures: BTreeMap<String, bool>,
}

impl Default for ReshaperConfig {
    fn default() -> Self {
        Self {
            language: Language::Arabic,
            support_ligatures: true,
            delete_harakat: true,
            shift_harakat_position: false,
            delete_tatweel: false,
            support_zwj: true,
            use_unshaped_instead_of_isolated: false,
            ligatures_default: true,
            ligatures: BTreeMap::new(),
        }
    }
}

impl ReshaperConfig {
    /// Whether the ligature named `name` takes part in substitution.
    ///
    /// This does not consult `support_ligatures`; the reshaper checks the
    /// master switch first.
    pub fn is_ligature_enabled(&self, name: &str) -> bool {
        self.ligatures
            .get(name)
            .copied()
            .unwrap_or(self.ligatures_default)
    }

    pub fn set_ligature(&mut self, name: impl Into<String>, enabled: bool) {
        self.ligatures.insert(name.into(), enabled);
    }
}

/// Bidi reordering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BidiConfig {
    /// Paragraph direction override
    pub base_dir: BaseDirection,
    /// Debug mode: treat uppercase Latin letters as strong right-to-left
    pub upper_is_rtl: bool,
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|val| val == "1" || val.eq_ignore_ascii_case("true"))
}

impl KashidaConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `kashida.toml` in the current directory,
    /// or return the default configuration if there is no such file.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_from_file_or_default(DEFAULT_CONFIG_FILE)
    }

    /// Load `path`, falling back to defaults only when it does not exist.
    /// A file that cannot be read or parsed is still an error.
    pub fn load_from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load_from_file(path) {
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Boolean switches accept `1` or `true`; anything else turns them off.
    /// An unknown language or base direction is an error.
    pub fn merge_with_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(lang) = std::env::var("KASHIDA_LANGUAGE") {
            self.reshaper.language = lang.parse()?;
        }
        if let Some(flag) = env_flag("KASHIDA_DELETE_HARAKAT") {
            self.reshaper.delete_harakat = flag;
        }
        if let Some(flag) = env_flag("KASHIDA_DELETE_TATWEEL") {
            self.reshaper.delete_tatweel = flag;
        }
        if let Some(flag) = env_flag("KASHIDA_SUPPORT_ZWJ") {
            self.reshaper.support_zwj = flag;
        }
        if let Some(flag) = env_flag("KASHIDA_SHIFT_HARAKAT") {
            self.reshaper.shift_harakat_position = flag;
        }
        if let Some(flag) = env_flag("KASHIDA_USE_UNSHAPED") {
            self.reshaper.use_unshaped_instead_of_isolated = flag;
        }
        if let Some(flag) = env_flag("KASHIDA_SUPPORT_LIGATURES") {
            self.reshaper.support_ligatures = flag;
        }

        if let Ok(dir) = std::env::var("KASHIDA_BASE_DIR") {
            self.bidi.base_dir = dir.parse()?;
        }
        if let Some(flag) = env_flag("KASHIDA_UPPER_IS_RTL") {
            self.bidi.upper_is_rtl = flag;
        }
        Ok(())
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from kashida.toml (defaults if the file does not exist)
    /// 2. Override with environment variables if present
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_or_default()?;
        config.merge_with_env()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KashidaConfig::default();
        assert_eq!(config.reshaper.language, Language::Arabic);
        assert!(config.reshaper.support_ligatures);
        assert!(config.reshaper.delete_harakat);
        assert!(!config.reshaper.delete_tatweel);
        assert!(config.reshaper.support_zwj);
        assert_eq!(config.bidi.base_dir, BaseDirection::Auto);
        assert!(!config.bidi.upper_is_rtl);
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = KashidaConfig::default();
        config.reshaper.set_ligature("ALLAH", false);
        config.bidi.base_dir = BaseDirection::Rtl;
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: KashidaConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = KashidaConfig::from_toml_str(
            r#"
            [reshaper]
            language = "Kurdish"
            delete_harakat = false

            [reshaper.ligatures]
            "ALLAH" = false

            [bidi]
            base_dir = "R"
            "#,
        )
        .unwrap();
        assert_eq!(config.reshaper.language, Language::Kurdish);
        assert!(!config.reshaper.delete_harakat);
        assert!(config.reshaper.support_zwj);
        assert!(!config.reshaper.is_ligature_enabled("ALLAH"));
        assert!(config.reshaper.is_ligature_enabled("AKBAR"));
        assert_eq!(config.bidi.base_dir, BaseDirection::Rtl);
    }

    #[test]
    fn test_unknown_language_in_file_is_rejected() {
        let err = KashidaConfig::from_toml_str("[reshaper]\nlanguage = \"Klingon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("ArabicV2".parse::<Language>().unwrap(), Language::ArabicV2);
        assert!(matches!(
            "Persian".parse::<Language>(),
            Err(ConfigError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn test_base_direction_from_str() {
        assert_eq!("L".parse::<BaseDirection>().unwrap(), BaseDirection::Ltr);
        assert_eq!("R".parse::<BaseDirection>().unwrap(), BaseDirection::Rtl);
        assert_eq!("auto".parse::<BaseDirection>().unwrap(), BaseDirection::Auto);
        assert!(matches!(
            "up".parse::<BaseDirection>(),
            Err(ConfigError::InvalidBaseDirection(_))
        ));
    }

    #[test]
    fn test_ligatures_default_off() {
        let mut config = ReshaperConfig {
            ligatures_default: false,
            ..ReshaperConfig::default()
        };
        assert!(!config.is_ligature_enabled("ALLAH"));
        config.set_ligature("ALLAH", true);
        assert!(config.is_ligature_enabled("ALLAH"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = KashidaConfig::load_from_file_or_default(dir.path().join("kashida.toml"));
        assert_eq!(config.unwrap(), KashidaConfig::default());
    }

    #[test]
    fn test_load_or_default_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kashida.toml");

        std::fs::write(&path, "[reshaper]\nlanguage = \"Klingon\"\n").unwrap();
        let result = KashidaConfig::load_from_file_or_default(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::write(&path, "[reshaper]\nlanguage = \"Kurdish\"\n").unwrap();
        let config = KashidaConfig::load_from_file_or_default(&path).unwrap();
        assert_eq!(config.reshaper.language, Language::Kurdish);
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("KASHIDA_DELETE_TATWEEL", "true");
            std::env::set_var("KASHIDA_UPPER_IS_RTL", "1");
        }

        let mut config = KashidaConfig::default();
        config.merge_with_env().unwrap();

        assert!(config.reshaper.delete_tatweel);
        assert!(config.bidi.upper_is_rtl);

        // An invalid base direction is reported rather than ignored
        unsafe {
            std::env::set_var("KASHIDA_BASE_DIR", "sideways");
        }
        let result = config.merge_with_env();
        assert!(matches!(result, Err(ConfigError::InvalidBaseDirection(_))));

        // Clean up
        unsafe {
            std::env::remove_var("KASHIDA_DELETE_TATWEEL");
            std::env::remove_var("KASHIDA_UPPER_IS_RTL");
            std::env::remove_var("KASHIDA_BASE_DIR");
        }
    }
}
