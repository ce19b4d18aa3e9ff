//! Configuration.

use crate::{format::Format, scheduler::TurnScheduler};
use educe::Educe;
use std::{path::PathBuf, time::Duration};

#[cfg(feature = "serde")]
use crate::{
    error::Error,
    store::{FileGameStore, FileTemplateStore},
};
#[cfg(feature = "serde")]
use log::info;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::{fs, path::Path};

/// Configuration of a simulation session.
///
/// Missing fields in a configuration file take their default values.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Pacing interval between generations, in milliseconds.
    #[educe(Default(expression = "1000"))]
    pub turn_interval_ms: u64,

    /// Directory holding one file per template.
    #[educe(Default(expression = "PathBuf::from(\"templates\")"))]
    pub template_dir: PathBuf,

    /// Format used when saving templates.
    ///
    /// Templates in any known format are read.
    pub template_format: Format,

    /// File holding the saved game.
    ///
    /// The format is chosen by its extension.
    #[educe(Default(expression = "PathBuf::from(\"game_state.json\")"))]
    pub game_file: PathBuf,
}

impl Config {
    /// Sets the pacing interval, saturating at `u64::MAX` milliseconds.
    pub fn set_turn_interval(mut self, interval: Duration) -> Self {
        self.turn_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the template directory.
    pub fn set_template_dir<P: Into<PathBuf>>(mut self, template_dir: P) -> Self {
        self.template_dir = template_dir.into();
        self
    }

    /// Sets the format used when saving templates.
    pub fn set_template_format(mut self, template_format: Format) -> Self {
        self.template_format = template_format;
        self
    }

    /// Sets the saved game file.
    pub fn set_game_file<P: Into<PathBuf>>(mut self, game_file: P) -> Self {
        self.game_file = game_file.into();
        self
    }

    /// The pacing interval.
    pub fn turn_interval(&self) -> Duration {
        Duration::from_millis(self.turn_interval_ms)
    }

    /// Creates a scheduler with the configured pacing interval.
    pub fn scheduler(&self) -> TurnScheduler {
        TurnScheduler::new(self.turn_interval())
    }

    /// Reads a configuration file in JSON, YAML or TOML,
    /// chosen by its extension.
    #[cfg(feature = "serde")]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let config = format.decode(&fs::read_to_string(path)?)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// The template store described by this configuration.
    #[cfg(feature = "serde")]
    pub fn template_store(&self) -> FileTemplateStore {
        FileTemplateStore::new(&self.template_dir, self.template_format)
    }

    /// The game store described by this configuration.
    #[cfg(feature = "serde")]
    pub fn game_store(&self) -> FileGameStore {
        FileGameStore::new(&self.game_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        let config = Config::default();
        assert_eq!(config.turn_interval(), Duration::from_secs(1));
        assert_eq!(config.template_dir, PathBuf::from("templates"));
        assert_eq!(config.template_format, Format::Json);
        assert_eq!(config.game_file, PathBuf::from("game_state.json"));
        assert_eq!(config.scheduler().interval(), Duration::from_secs(1));
    }

    #[test]
    fn long_interval() {
        let config = Config::default().set_turn_interval(Duration::MAX);
        assert_eq!(config.turn_interval_ms, u64::MAX);
        let config = Config::default().set_turn_interval(Duration::from_secs(90));
        assert_eq!(config.turn_interval_ms, 90_000);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn partial_file() {
        let config: Config = Format::Toml
            .decode("turn_interval_ms = 250\ntemplate_format = \"yaml\"\n")
            .unwrap();
        assert_eq!(
            config,
            Config::default()
                .set_turn_interval(Duration::from_millis(250))
                .set_template_format(Format::Yaml)
        );
    }
}
