//! Settings document loading
//!
//! Reads a YAML game document into its raw key/value form. Nothing here checks
//! cross-field rules or required keys; that happens when a `GameDocument` is
//! converted into a `Game`.

use config::{Config, Environment, File, FileFormat};
use log::debug;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::ParseError;

/// Prefix for environment variables that override document keys.
/// Nested keys use `__`, e.g. `DOM5_VICTORY__CATACLYSM`.
pub const ENV_PREFIX: &str = "DOM5";

/// Raw game settings as written in the document
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameDocument {
    #[serde(deserialize_with = "string_scalar")]
    pub name: Option<String>,
    #[serde(deserialize_with = "string_scalar")]
    pub era: Option<String>,
    #[serde(deserialize_with = "string_scalar")]
    pub master_password: Option<String>,

    pub renaming: Option<bool>,
    pub hof_size: Option<u32>,
    #[serde(deserialize_with = "string_scalar")]
    pub story_events: Option<String>,
    pub victory: Option<VictoryDocument>,

    /// Top-level cataclysm turn from the older document layout
    pub cataclysm: Option<u32>,

    pub port: Option<u16>,
    pub cheat_detection: Option<bool>,
    pub steam: Option<bool>,
    pub text_only: Option<bool>,
    pub tcp_server: Option<bool>,
}

/// Raw `victory` section
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VictoryDocument {
    pub l1_thrones: u32,
    pub l2_thrones: u32,
    pub l3_thrones: u32,
    pub ascension_points: Option<u32>,
    pub cataclysm: Option<u32>,
    pub conquer_all: bool,
}

/// Text field that must be written as a string in the document.
///
/// YAML reads a bare `007` or `1e3` as a number and the number's text is gone by
/// the time it reaches us, so anything but a string scalar is rejected.
fn string_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringScalar>::deserialize(deserializer).map(|value| value.map(|s| s.0))
}

struct StringScalar(String);

struct StringScalarVisitor;

impl<'de> Visitor<'de> for StringScalarVisitor {
    type Value = StringScalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string (quote values that look like numbers)")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<StringScalar, E> {
        Ok(StringScalar(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<StringScalar, E> {
        Ok(StringScalar(value))
    }
}

impl<'de> Deserialize<'de> for StringScalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StringScalarVisitor)
    }
}

/// Read and parse the document at `path`.
pub fn read_document(path: &Path) -> Result<GameDocument, ParseError> {
    debug!("Reading game document {}", path.display());

    let settings = Config::builder()
        .add_source(File::from(path).format(FileFormat::Yaml))
        .build()
        .map_err(|e| ParseError::new(path, e))?;

    settings
        .try_deserialize()
        .map_err(|e| ParseError::new(path, e))
}

/// Read the document at `path`, letting `<prefix>_*` environment variables
/// override its keys.
///
/// Override values stay strings; numeric and boolean keys are parsed from them
/// during deserialization.
pub fn read_document_with_env(path: &Path, prefix: &str) -> Result<GameDocument, ParseError> {
    debug!(
        "Reading game document {} with {}_* overrides",
        path.display(),
        prefix
    );

    let settings = Config::builder()
        .add_source(File::from(path).format(FileFormat::Yaml))
        .add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .map_err(|e| ParseError::new(path, e))?;

    settings
        .try_deserialize()
        .map_err(|e| ParseError::new(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_nested_victory() {
        let file = write_yaml(
            "name: Test_game\n\
             era: MA\n\
             master_password: secret\n\
             victory:\n  l1_thrones: 5\n  l2_thrones: 10\n  ascension_points: 8\n",
        );

        let doc = read_document(file.path()).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Test_game"));
        assert_eq!(doc.era.as_deref(), Some("MA"));

        let victory = doc.victory.unwrap();
        assert_eq!(victory.l1_thrones, 5);
        assert_eq!(victory.l2_thrones, 10);
        assert_eq!(victory.l3_thrones, 0);
        assert_eq!(victory.ascension_points, Some(8));
        assert!(!victory.conquer_all);
    }

    #[test]
    fn test_unset_keys_stay_empty() {
        let file = write_yaml("name: Test_game\n");

        let doc = read_document(file.path()).unwrap();
        assert_eq!(doc.port, None);
        assert_eq!(doc.victory, None);
        assert_eq!(doc.story_events, None);
    }

    #[test]
    fn test_non_numeric_hof_size_is_parse_error() {
        let file = write_yaml("name: Test_game\nhof_size: lots\n");
        assert!(read_document(file.path()).is_err());
    }

    #[test]
    fn test_quoted_password_keeps_its_text() {
        let file = write_yaml("name: \"1e3\"\nmaster_password: \"007\"\n");

        let doc = read_document(file.path()).unwrap();
        assert_eq!(doc.name.as_deref(), Some("1e3"));
        assert_eq!(doc.master_password.as_deref(), Some("007"));
    }

    #[test]
    fn test_bare_numeric_text_fields_are_rejected() {
        for contents in [
            "name: Test_game\nmaster_password: 007\n",
            "name: 1e3\nmaster_password: pw\n",
            "name: Test_game\nmaster_password: 1.50\n",
            "name: Test_game\nera: 2\n",
        ] {
            let file = write_yaml(contents);
            assert!(
                read_document(file.path()).is_err(),
                "accepted {:?}",
                contents
            );
        }
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = read_document(&path).unwrap_err();
        assert_eq!(err.path(), path.as_path());
    }
}
