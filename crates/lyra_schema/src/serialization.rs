use crate::field::SchemaNode;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SchemaResult<T> = Result<T, SchemaError>;

pub fn load_schema(path: impl AsRef<Path>) -> SchemaResult<SchemaNode> {
    let json = fs::read_to_string(path)?;
    let schema = serde_json::from_str(&json)?;
    Ok(schema)
}

pub fn save_data(
    data: &serde_json::Map<String, serde_json::Value>,
    path: impl AsRef<Path>,
) -> SchemaResult<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}
