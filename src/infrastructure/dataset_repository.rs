// In-memory dataset repository with JSON/TOML loading
use crate::application::enterprise_repository::EnterpriseRepository;
use crate::domain::enterprise::Enterprise;
use crate::infrastructure::sample_dataset::sample_enterprises;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported dataset format '{0}', expected .json or .toml")]
    UnsupportedFormat(String),

    #[error("Duplicate enterprise id {0}")]
    DuplicateEnterprise(u32),

    #[error("Duplicate deviation id {0}")]
    DuplicateDeviation(u32),

    #[error("Enterprise {id} placed outside the 0-100 map plane at ({x}, {y})")]
    OutOfPlane { id: u32, x: f64, y: f64 },
}

#[derive(Debug, Deserialize)]
struct TomlDataset {
    #[serde(default)]
    enterprises: Vec<Enterprise>,
}

#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    enterprises: Vec<Enterprise>,
}

impl InMemoryRepository {
    /// Wrap records as-is, without validation
    pub fn new(enterprises: Vec<Enterprise>) -> Self {
        Self { enterprises }
    }

    pub fn sample() -> Self {
        Self::new(sample_enterprises())
    }

    pub fn from_enterprises(enterprises: Vec<Enterprise>) -> Result<Self, DatasetError> {
        validate(&enterprises)?;
        Ok(Self::new(enterprises))
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let enterprises = match extension.as_str() {
            "json" => parse_json(&content)?,
            "toml" => parse_toml(&content)?,
            other => return Err(DatasetError::UnsupportedFormat(other.to_string())),
        };

        tracing::info!(
            "Loaded {} enterprises from {}",
            enterprises.len(),
            path.display()
        );

        Self::from_enterprises(enterprises)
    }
}

impl EnterpriseRepository for InMemoryRepository {
    fn enterprises(&self) -> &[Enterprise] {
        &self.enterprises
    }
}

/// A JSON dataset is a top-level array of enterprises
pub fn parse_json(content: &str) -> Result<Vec<Enterprise>, DatasetError> {
    Ok(serde_json::from_str(content)?)
}

/// A TOML dataset lists enterprises as `[[enterprises]]` tables
pub fn parse_toml(content: &str) -> Result<Vec<Enterprise>, DatasetError> {
    let dataset: TomlDataset = toml::from_str(content)?;
    Ok(dataset.enterprises)
}

fn validate(enterprises: &[Enterprise]) -> Result<(), DatasetError> {
    let mut enterprise_ids = HashSet::new();
    let mut deviation_ids = HashSet::new();

    for enterprise in enterprises {
        if !enterprise_ids.insert(enterprise.id) {
            return Err(DatasetError::DuplicateEnterprise(enterprise.id));
        }
        if !enterprise.coordinates.is_within_plane() {
            return Err(DatasetError::OutOfPlane {
                id: enterprise.id,
                x: enterprise.coordinates.x,
                y: enterprise.coordinates.y,
            });
        }
        for deviation in &enterprise.deviations {
            if !deviation_ids.insert(deviation.id) {
                return Err(DatasetError::DuplicateDeviation(deviation.id));
            }
        }
    }

    Ok(())
}
