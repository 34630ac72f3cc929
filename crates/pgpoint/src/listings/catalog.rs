use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::domain::PropertyRecord;

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DuplicateId(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read property catalog: {}", err),
            CatalogError::Json(err) => write!(f, "invalid property catalog JSON: {}", err),
            CatalogError::DuplicateId(id) => {
                write!(f, "property catalog lists id '{}' more than once", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Loads property records exported from the owner-side database as a JSON array.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyRecord>, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PropertyRecord>, CatalogError> {
        let records: Vec<PropertyRecord> = serde_json::from_reader(reader)?;

        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.property.id.0.as_str()) {
                return Err(CatalogError::DuplicateId(record.property.id.0.clone()));
            }
        }

        Ok(records)
    }
}
