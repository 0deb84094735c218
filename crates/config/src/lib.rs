// Copyright (C) 2024 RME contributors
//
// This file is part of RME.
//
// RME is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// RME is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with RME.  If not, see <http://www.gnu.org/licenses/>.


use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use rme_commands::SandboxState;

/// Where [`Config::load_or_default`] looks when no path is given.
pub const DEFAULT_PATH: &str = "rme.ron";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not access {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a valid configuration: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("Could not serialize the configuration: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Could not replace {path}: {source}")]
    Persist {
        path: Utf8PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug, Default)]
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(strum::EnumIter, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
pub enum DocFormat {
    #[default]
    #[strum(to_string = "markdown", serialize = "md")]
    Markdown,
    #[strum(to_string = "json")]
    Json,
    #[strum(to_string = "ron")]
    Ron,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DocConfig {
    pub format: DocFormat,
    /// Standard output when unset.
    pub output: Option<Utf8PathBuf>,
}

/// Settings for the `rme` front end.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// An `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub doc: DocConfig,
    /// The world the sandbox host starts in.
    pub sandbox: SandboxState,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            log_filter: "warn".to_string(),
            doc: DocConfig::default(),
            sandbox: SandboxState::default(),
        }
    }

    pub fn from_ron(path: &Utf8Path, text: &str) -> Result<Self, Error> {
        ron::from_str(text).map_err(|source| Error::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn load(path: &Utf8Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_ron(path, &text)
    }

    /// Loads `path` if given, otherwise [`DEFAULT_PATH`] if it exists, otherwise the defaults.
    pub fn load_or_default(path: Option<&Utf8Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::load(path),
            None if Utf8Path::new(DEFAULT_PATH).is_file() => Self::load(Utf8Path::new(DEFAULT_PATH)),
            None => {
                tracing::debug!("No {DEFAULT_PATH} found, using the default configuration");
                Ok(Self::default())
            }
        }
    }

    pub fn to_ron(&self) -> Result<String, Error> {
        let config = ron::ser::PrettyConfig::default().struct_names(true);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    /// Writes the configuration next to `path` and moves it into place.
    pub fn save(&self, path: &Utf8Path) -> Result<(), Error> {
        let text = self.to_ron()?;
        let dir = match path.parent() {
            Some(dir) if !dir.as_str().is_empty() => dir,
            _ => Utf8Path::new("."),
        };
        let io_error = |source| Error::Io {
            path: path.to_owned(),
            source,
        };

        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(io_error)?;
        file.write_all(text.as_bytes()).map_err(io_error)?;
        file.persist(path).map_err(|source| Error::Persist {
            path: path.to_owned(),
            source,
        })?;

        tracing::info!("Saved configuration to {path}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn missing_fields_take_defaults() {
        let config = Config::from_ron(Utf8Path::new("rme.ron"), "(doc: (format: Json))").unwrap();
        assert_eq!(config.doc.format, DocFormat::Json);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.sandbox, SandboxState::default());
    }

    #[test]
    fn parse_errors_name_the_file() {
        let error = Config::from_ron(Utf8Path::new("broken.ron"), "(log_filter: 3)").unwrap_err();
        assert!(error.to_string().starts_with("broken.ron"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("rme.ron")).unwrap();

        let mut config = Config::new();
        config.log_filter = "rme=debug".to_string();
        config.sandbox.map_name = "Cave".to_string();
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn doc_formats_parse_loosely() {
        assert_eq!(DocFormat::from_str("MD"), Ok(DocFormat::Markdown));
        assert_eq!(DocFormat::from_str("json"), Ok(DocFormat::Json));
        assert_eq!(DocFormat::Ron.to_string(), "ron");
        assert!(DocFormat::from_str("html").is_err());
    }
}
