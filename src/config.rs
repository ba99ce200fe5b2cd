use crate::audio::{AudioSink, Bell, Mute};
use crate::highscore::FileStore;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Settings about data files
    pub(crate) files: FileConfig,

    /// Settings about sound effects
    pub(crate) sound: SoundConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the store in which the high score should be kept: the file
    /// given in the configuration or, if that is not set, the default high
    /// score file.
    pub(crate) fn high_score_store(&self) -> Result<FileStore, ConfigError> {
        self.files
            .high_score_file
            .clone()
            .or_else(FileStore::default_path)
            .map(FileStore::new)
            .ok_or(ConfigError::NoDataPath)
    }

    /// Return the sink through which sound effects should be played
    pub(crate) fn audio_sink(&self) -> Box<dyn AudioSink> {
        if self.sound.enabled {
            Box::new(Bell::stdout())
        } else {
            Box::new(Mute)
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Path to which log messages should be appended.  If not set, nothing is
    /// logged.
    pub(crate) log_file: Option<PathBuf>,
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct SoundConfig {
    /// Whether to ring the terminal bell for sound effects
    pub(crate) enabled: bool,
}

impl Default for SoundConfig {
    fn default() -> SoundConfig {
        SoundConfig { enabled: true }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to determine path to local data directory")]
    NoDataPath,
    #[error("failed to read configuration file")]
    Read(#[from] io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty() {
        let cfg = toml::from_str::<Config>("").expect("empty config is valid");
        assert_eq!(cfg, Config::default());
        assert!(cfg.sound.enabled);
        assert_eq!(cfg.files.high_score_file, None);
        assert_eq!(cfg.files.log_file, None);
    }

    #[test]
    fn full() {
        let src = concat!(
            "[files]\n",
            "high-score-file = \"/var/games/gridsnake/score\"\n",
            "log-file = \"/tmp/gridsnake.log\"\n",
            "\n",
            "[sound]\n",
            "enabled = false\n",
        );
        let cfg = toml::from_str::<Config>(src).expect("config is valid");
        assert_eq!(
            cfg,
            Config {
                files: FileConfig {
                    high_score_file: Some(PathBuf::from("/var/games/gridsnake/score")),
                    log_file: Some(PathBuf::from("/tmp/gridsnake.log")),
                },
                sound: SoundConfig { enabled: false },
            }
        );
        assert_eq!(
            cfg.high_score_store().expect("path is configured").path(),
            Path::new("/var/games/gridsnake/score")
        );
    }

    #[test]
    fn bad_type() {
        let r = toml::from_str::<Config>("[sound]\nenabled = \"yes\"\n");
        assert!(r.is_err());
    }

    #[test]
    fn missing_allowed() {
        let tmp = tempdir().expect("create temp dir");
        let cfg = Config::load(&tmp.path().join("config.toml"), true).expect("missing is fine");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn missing_not_allowed() {
        let tmp = tempdir().expect("create temp dir");
        let r = Config::load(&tmp.path().join("config.toml"), false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn load_from_disk() {
        let tmp = tempdir().expect("create temp dir");
        let path = tmp.path().join("config.toml");
        fs_err::write(&path, "[sound]\nenabled = false\n").expect("write config");
        let cfg = Config::load(&path, false).expect("config is valid");
        assert!(!cfg.sound.enabled);
        assert_eq!(cfg.files, FileConfig::default());
    }

    #[test]
    fn parse_error() {
        let tmp = tempdir().expect("create temp dir");
        let path = tmp.path().join("config.toml");
        fs_err::write(&path, "[sound\n").expect("write config");
        let r = Config::load(&path, true);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }
}
