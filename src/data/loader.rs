// ABOUTME: Data document loading for JSON and YAML sources
// ABOUTME: Handles format selection, file extension inference, and key normalization

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value as JsonValue;
use tracing::debug;

use super::error::{DataError, Result};
use super::normalize::normalize_keys;

/// Input formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    #[default]
    Json,
    Yaml,
}

/// Loads data documents into normalized JSON values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataLoader {
    strict: bool,
}

impl DataLoader {
    /// Create a loader. `strict` makes duplicate mapping keys in YAML data an
    /// error instead of overwriting.
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Load a document from a reader in the given format.
    pub fn load_reader<R: Read>(&self, reader: R, format: DataFormat) -> Result<JsonValue> {
        match format {
            DataFormat::Json => self.load_json(reader),
            DataFormat::Yaml => self.load_yaml(reader),
        }
    }

    /// Load a document from a file, inferring the format from its extension.
    /// Anything other than `.json`, `.yaml`, or `.yml` is rejected.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<JsonValue> {
        let path = path.as_ref();
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => DataFormat::Json,
            Some("yaml") | Some("yml") => DataFormat::Yaml,
            _ => {
                return Err(DataError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        debug!("Loading {:?} data from {}", format, path.display());
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file), format)
    }

    fn load_json<R: Read>(&self, reader: R) -> Result<JsonValue> {
        let data = serde_json::from_reader(reader)?;
        Ok(data)
    }

    fn load_yaml<R: Read>(&self, reader: R) -> Result<JsonValue> {
        let raw: serde_yaml::Value = serde_yaml::from_reader(reader)?;
        normalize_keys(raw, self.strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_json_preserves_number_kinds() {
        let loader = DataLoader::new(false);
        let data = loader
            .load_reader(r#"{"i": 7, "f": 1.5}"#.as_bytes(), DataFormat::Json)
            .unwrap();
        assert!(data["i"].is_i64() || data["i"].is_u64());
        assert!(data["f"].is_f64());
    }

    #[test]
    fn test_load_yaml_normalizes_keys() {
        let loader = DataLoader::new(false);
        let data = loader
            .load_reader("1: one\nname: world".as_bytes(), DataFormat::Yaml)
            .unwrap();
        assert_eq!(data, json!({"1": "one", "name": "world"}));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let loader = DataLoader::new(false);
        let err = loader
            .load_reader("{broken".as_bytes(), DataFormat::Json)
            .unwrap_err();
        assert!(matches!(err, DataError::JsonError(_)));
    }

    #[test]
    fn test_load_file_infers_format_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("data.json");
        let yaml_path = dir.path().join("data.yml");
        std::fs::write(&json_path, r#"{"from": "json"}"#).unwrap();
        std::fs::write(&yaml_path, "from: yaml").unwrap();

        let loader = DataLoader::new(false);
        assert_eq!(loader.load_file(&json_path).unwrap(), json!({"from": "json"}));
        assert_eq!(loader.load_file(&yaml_path).unwrap(), json!({"from": "yaml"}));
    }

    #[test]
    fn test_load_file_rejects_unknown_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("data.csv");
        std::fs::write(&csv_path, "a,b,c").unwrap();

        let loader = DataLoader::new(false);
        let err = loader.load_file(&csv_path).unwrap_err();
        assert!(matches!(err, DataError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_strict_loader_rejects_colliding_keys() {
        let loader = DataLoader::new(true);
        let err = loader
            .load_reader("1: a\n\"1\": b".as_bytes(), DataFormat::Yaml)
            .unwrap_err();
        assert!(matches!(err, DataError::DuplicateKey { .. }));
    }
}
