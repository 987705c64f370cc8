use log::info;

use crate::error::StorageError;
use crate::types::BatchInput;

/// Leser inn en batch fra disk (JSON).
/// En fil som mangler er en feil; demo-pakkene brukes bare når ingen sti er gitt.
pub fn load_batch(path: &str) -> Result<BatchInput, StorageError> {
    let contents = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_string(),
        source,
    })?;
    let batch = parse_batch(&contents, path)?;
    info!("batch lastet fra {path} ({} pakker)", batch.packages.len());
    Ok(batch)
}

/// Parser batch-JSON; feilen peker på feltet som ikke passet.
pub fn parse_batch(contents: &str, origin: &str) -> Result<BatchInput, StorageError> {
    let de = &mut serde_json::Deserializer::from_str(contents);
    serde_path_to_error::deserialize(de).map_err(|err| StorageError::Json {
        path: origin.to_string(),
        field: err.path().to_string(),
        source: err.into_inner(),
    })
}
