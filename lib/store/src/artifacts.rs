//! On-disk artifact schema.
//!
//! Each of the four precomputed artifacts is one bincode file with an
//! explicit version field, deserialized into a typed DTO and converted into
//! the core types after validation. The DTOs stay separate from the core
//! types so the disk format can evolve without touching query code.

use librix_core::{
    BookRecord, Catalog, Error, Metric, NeighborModel, PivotMatrix, RatingsTable, Result,
};
use serde::{Deserialize, Serialize};

/// Current on-disk format version. A file with any other version fails the
/// load with a descriptive error.
pub const FORMAT_VERSION: u32 = 1;

pub const CATALOG_FILE: &str = "book_names.bin";
pub const MATRIX_FILE: &str = "book_pivot.bin";
pub const MODEL_FILE: &str = "model.bin";
pub const RATINGS_FILE: &str = "final_ratings.bin";

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogArtifact {
    pub version: u32,
    pub titles: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatrixArtifact {
    pub version: u32,
    pub dim: u32,
    pub titles: Vec<String>,
    pub values: Vec<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: u32,
    pub metric: String,
    pub dim: u32,
    pub rows: Vec<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RatingsArtifact {
    pub version: u32,
    pub records: Vec<RecordArtifact>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordArtifact {
    pub title: String,
    pub author: String,
    pub image_url: String,
}

pub(crate) fn check_version(artifact: &str, found: u32) -> Result<()> {
    if found != FORMAT_VERSION {
        return Err(Error::UnsupportedVersion {
            artifact: artifact.to_string(),
            found,
            expected: FORMAT_VERSION,
        });
    }
    Ok(())
}

impl CatalogArtifact {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            version: FORMAT_VERSION,
            titles: catalog.titles().to_vec(),
        }
    }

    pub fn into_catalog(self) -> Result<Catalog> {
        check_version(CATALOG_FILE, self.version)?;
        Ok(Catalog::new(self.titles))
    }
}

impl MatrixArtifact {
    pub fn from_matrix(matrix: &PivotMatrix) -> Self {
        Self {
            version: FORMAT_VERSION,
            dim: matrix.dim() as u32,
            titles: matrix.titles().to_vec(),
            values: matrix.values().to_vec(),
        }
    }

    pub fn into_matrix(self) -> Result<PivotMatrix> {
        check_version(MATRIX_FILE, self.version)?;
        PivotMatrix::new(self.titles, self.dim as usize, self.values)
    }
}

impl ModelArtifact {
    pub fn from_model(model: &NeighborModel) -> Self {
        let metric = match model.metric() {
            Metric::Cosine => "Cosine",
            Metric::Euclidean => "Euclidean",
        };
        Self {
            version: FORMAT_VERSION,
            metric: metric.to_string(),
            dim: model.dim() as u32,
            rows: model.rows().to_vec(),
        }
    }

    pub fn into_model(self) -> Result<NeighborModel> {
        check_version(MODEL_FILE, self.version)?;
        let metric = match self.metric.as_str() {
            "Cosine" => Metric::Cosine,
            "Euclidean" => Metric::Euclidean,
            other => {
                return Err(Error::InvalidArtifact {
                    artifact: MODEL_FILE.to_string(),
                    reason: format!("unknown metric: {other}"),
                })
            }
        };
        NeighborModel::new(metric, self.dim as usize, self.rows)
    }
}

impl RatingsArtifact {
    pub fn from_table(table: &RatingsTable) -> Self {
        Self {
            version: FORMAT_VERSION,
            records: table
                .records()
                .iter()
                .map(|r| RecordArtifact {
                    title: r.title.clone(),
                    author: r.author.clone(),
                    image_url: r.image_url.clone(),
                })
                .collect(),
        }
    }

    pub fn into_table(self) -> Result<RatingsTable> {
        check_version(RATINGS_FILE, self.version)?;
        Ok(RatingsTable::new(
            self.records
                .into_iter()
                .map(|r| BookRecord {
                    title: r.title,
                    author: r.author,
                    image_url: r.image_url,
                })
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_gate() {
        let artifact = CatalogArtifact {
            version: 99,
            titles: vec![],
        };
        let err = artifact.into_catalog().unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedVersion { found: 99, expected: FORMAT_VERSION, .. }
        ));
    }

    #[test]
    fn test_unknown_metric_rejected() {
        let artifact = ModelArtifact {
            version: FORMAT_VERSION,
            metric: "Manhattan".to_string(),
            dim: 2,
            rows: vec![1.0, 0.0],
        };
        let err = artifact.into_model().unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact { .. }));
    }

    #[test]
    fn test_metric_round_trip() {
        let model = NeighborModel::new(Metric::Euclidean, 2, vec![1.0, 0.0]).unwrap();
        let restored = ModelArtifact::from_model(&model).into_model().unwrap();
        assert_eq!(restored.metric(), Metric::Euclidean);
    }
}
