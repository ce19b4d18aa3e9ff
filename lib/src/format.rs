//! File formats for configurations and stored records.

use crate::error::Error;
use std::{
    fmt::{self, Display, Formatter},
    path::Path,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A structured text format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// [JSON](https://www.json.org/).
    #[default]
    Json,
    /// [YAML](https://yaml.org/).
    Yaml,
    /// [TOML](https://toml.io/).
    Toml,
}

impl Format {
    /// All formats, in the order they are tried when looking for a file.
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Toml];

    /// The file extension written for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }

    /// Recognizes a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }

    /// Chooses the format from the extension of a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
            .ok_or_else(|| Error::UnknownFormat(path.display().to_string()))
    }

    /// Serializes a value.
    #[cfg(feature = "serde")]
    pub fn encode<T: Serialize>(self, value: &T) -> Result<String, Error> {
        Ok(match self {
            Format::Json => serde_json::to_string_pretty(value)?,
            Format::Yaml => serde_yaml::to_string(value)?,
            Format::Toml => toml::to_string(value)?,
        })
    }

    /// Deserializes a value.
    #[cfg(feature = "serde")]
    pub fn decode<T: DeserializeOwned>(self, s: &str) -> Result<T, Error> {
        Ok(match self {
            Format::Json => serde_json::from_str(s)?,
            Format::Yaml => serde_yaml::from_str(s)?,
            Format::Toml => toml::from_str(s)?,
        })
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_extension(s).ok_or_else(|| String::from("invalid Format"))
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path() {
        assert_eq!(Format::from_path("a/b.json").ok(), Some(Format::Json));
        assert_eq!(Format::from_path("b.YML").ok(), Some(Format::Yaml));
        assert_eq!(Format::from_path("b.toml").ok(), Some(Format::Toml));
        assert!(matches!(
            Format::from_path("b.txt"),
            Err(Error::UnknownFormat(_))
        ));
        assert!(Format::from_path("noext").is_err());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn encode_decode() {
        use crate::{cells::Cell, save::TemplateRecord};

        let record = TemplateRecord {
            name: String::from("pair"),
            height: 2,
            width: 2,
            cells: vec![vec![Cell::Alive, Cell::Dead], vec![Cell::Dead, Cell::Alive]],
        };
        for format in Format::ALL {
            let s = format.encode(&record).unwrap();
            let decoded: TemplateRecord = format.decode(&s).unwrap();
            assert_eq!(decoded, record, "{}", format);
        }
    }
}
