//! # LibriX Store
//!
//! Artifact store for the LibriX book recommender.
//!
//! Four precomputed artifacts live in one directory, each a versioned
//! bincode file:
//!
//! - `book_names.bin` - the title catalog
//! - `book_pivot.bin` - the pivoted title/rating matrix
//! - `model.bin` - the fitted neighbor model
//! - `final_ratings.bin` - the per-title metadata table
//!
//! [`load_library`] reads and cross-validates all four at startup; any
//! missing or corrupt file is a fatal error naming the offending artifact.
//! [`save_library`] writes a library back out, used to produce fixture
//! artifact sets.

pub mod artifacts;

use std::fs;
use std::path::Path;

use librix_core::{Error, Library, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::artifacts::{
    CatalogArtifact, MatrixArtifact, ModelArtifact, RatingsArtifact, CATALOG_FILE, MATRIX_FILE,
    MODEL_FILE, RATINGS_FILE,
};

fn read_artifact<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(Error::ArtifactMissing(path));
    }
    let bytes = fs::read(&path)?;
    bincode::deserialize(&bytes).map_err(|e| Error::Serialization(format!("{name}: {e}")))
}

fn write_artifact<T: Serialize>(dir: &Path, name: &str, artifact: &T) -> Result<()> {
    let bytes =
        bincode::serialize(artifact).map_err(|e| Error::Serialization(format!("{name}: {e}")))?;
    fs::write(dir.join(name), bytes)?;
    Ok(())
}

/// Load and validate the artifact set from a directory.
///
/// Fails fast on the first missing artifact, undecodable file, unsupported
/// format version, or cross-artifact inconsistency. Matrix titles without a
/// metadata row are only warned about; they resolve to the placeholder
/// cover at query time.
pub fn load_library(dir: &Path) -> Result<Library> {
    let catalog = read_artifact::<CatalogArtifact>(dir, CATALOG_FILE)?.into_catalog()?;
    let matrix = read_artifact::<MatrixArtifact>(dir, MATRIX_FILE)?.into_matrix()?;
    let model = read_artifact::<ModelArtifact>(dir, MODEL_FILE)?.into_model()?;
    let ratings = read_artifact::<RatingsArtifact>(dir, RATINGS_FILE)?.into_table()?;

    let library = Library::new(catalog, matrix, model, ratings)?;

    info!(
        "Artifacts loaded: {} catalog titles, {} matrix rows of dim {}, {} metadata rows",
        library.catalog().len(),
        library.matrix().row_count(),
        library.matrix().dim(),
        library.ratings().len(),
    );

    let missing = library.missing_metadata();
    if missing > 0 {
        warn!("{missing} matrix titles have no metadata row; their covers fall back to the placeholder");
    }

    Ok(library)
}

/// Write a library out as a full artifact set.
pub fn save_library(dir: &Path, library: &Library) -> Result<()> {
    fs::create_dir_all(dir)?;
    write_artifact(dir, CATALOG_FILE, &CatalogArtifact::from_catalog(library.catalog()))?;
    write_artifact(dir, MATRIX_FILE, &MatrixArtifact::from_matrix(library.matrix()))?;
    write_artifact(dir, MODEL_FILE, &ModelArtifact::from_model(library.model()))?;
    write_artifact(dir, RATINGS_FILE, &RatingsArtifact::from_table(library.ratings()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use librix_core::{BookRecord, Catalog, Metric, NeighborModel, PivotMatrix, RatingsTable};

    fn library() -> Library {
        let titles = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let matrix = PivotMatrix::new(
            titles.clone(),
            2,
            vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
        )
        .unwrap();
        let model = NeighborModel::fit(&matrix, Metric::Cosine);
        let ratings = RatingsTable::new(vec![BookRecord {
            title: "a".to_string(),
            author: "Author".to_string(),
            image_url: "http://covers/a.jpg".to_string(),
        }]);
        Library::new(Catalog::new(titles), matrix, model, ratings).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        save_library(dir.path(), &library()).unwrap();

        let restored = load_library(dir.path()).unwrap();
        assert_eq!(restored.catalog().len(), 3);
        assert_eq!(restored.matrix().row_count(), 3);
        assert_eq!(restored.matrix().dim(), 2);
        assert_eq!(restored.model().metric(), Metric::Cosine);
        assert_eq!(restored.ratings().len(), 1);
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        save_library(dir.path(), &library()).unwrap();
        fs::remove_file(dir.path().join(MODEL_FILE)).unwrap();

        let err = load_library(dir.path()).unwrap_err();
        match err {
            Error::ArtifactMissing(path) => {
                assert!(path.ends_with(MODEL_FILE));
            }
            other => panic!("expected ArtifactMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_artifact_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        save_library(dir.path(), &library()).unwrap();
        fs::write(dir.path().join(MATRIX_FILE), b"\x01\x02").unwrap();

        let err = load_library(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_version_mismatch_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        save_library(dir.path(), &library()).unwrap();

        let stale = CatalogArtifact {
            version: 0,
            titles: vec!["a".to_string()],
        };
        write_artifact(dir.path(), CATALOG_FILE, &stale).unwrap();

        let err = load_library(dir.path()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion { found: 0, .. }));
    }
}
