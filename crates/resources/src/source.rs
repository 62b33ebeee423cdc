//! Named structured records an inventory is built from.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use vending_core::{InventoryError, InventoryResult};

/// Top-level shape of an inventory record: key -> item object.
pub type Dictionary = Map<String, Value>;

/// A place named records can be looked up in.
pub trait InventorySource {
    /// Fetch record `name.ext` as a dictionary.
    ///
    /// - missing record: `InvalidResource`
    /// - record that is not a key -> value mapping: `ConversionFailure`
    fn dictionary(&self, name: &str, ext: &str) -> InventoryResult<Dictionary>;
}

fn into_dictionary(resource: &str, value: Value) -> InventoryResult<Dictionary> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(InventoryError::conversion(format!(
            "{resource}: expected an object at top level, found {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// JSON records stored as `<root>/<name>.<ext>`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str, ext: &str) -> PathBuf {
        self.root.join(format!("{name}.{ext}"))
    }
}

impl InventorySource for DirectorySource {
    fn dictionary(&self, name: &str, ext: &str) -> InventoryResult<Dictionary> {
        let path = self.path_for(name, ext);
        if !path.is_file() {
            return Err(InventoryError::invalid_resource(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| InventoryError::conversion(format!("{}: {e}", path.display())))?;
        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| InventoryError::conversion(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "loaded inventory record");
        into_dictionary(&path.display().to_string(), value)
    }
}

/// Records held in memory, keyed by `name.ext`.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: HashMap<String, Value>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, name: &str, ext: &str, value: Value) -> Self {
        self.insert(name, ext, value);
        self
    }

    pub fn insert(&mut self, name: &str, ext: &str, value: Value) {
        self.records.insert(format!("{name}.{ext}"), value);
    }
}

impl InventorySource for InMemorySource {
    fn dictionary(&self, name: &str, ext: &str) -> InventoryResult<Dictionary> {
        let resource = format!("{name}.{ext}");
        let value = self
            .records
            .get(&resource)
            .cloned()
            .ok_or_else(|| InventoryError::invalid_resource(resource.clone()))?;
        into_dictionary(&resource, value)
    }
}
