use crate::{Catalog, Error, NeighborModel, PivotMatrix, RatingsTable, Result};

/// The application context: all four precomputed artifacts, loaded once at
/// startup and read-only for the process lifetime.
///
/// Constructed explicitly and passed to the recommender, poster resolver,
/// and API behind an `Arc` - there are no ambient globals. With no writers
/// after construction, concurrent reads need no synchronization.
#[derive(Debug)]
pub struct Library {
    catalog: Catalog,
    matrix: PivotMatrix,
    model: NeighborModel,
    ratings: RatingsTable,
}

impl Library {
    /// Assemble a library and cross-validate the artifacts.
    pub fn new(
        catalog: Catalog,
        matrix: PivotMatrix,
        model: NeighborModel,
        ratings: RatingsTable,
    ) -> Result<Self> {
        let library = Self {
            catalog,
            matrix,
            model,
            ratings,
        };
        library.validate()?;
        Ok(library)
    }

    /// Consistency checks across artifacts; any failure is fatal at startup.
    ///
    /// Matrix titles without metadata are deliberately NOT an error here -
    /// they resolve to the placeholder cover at query time. Use
    /// [`missing_metadata`](Self::missing_metadata) to report them.
    fn validate(&self) -> Result<()> {
        if self.matrix.is_empty() && !self.catalog.is_empty() {
            return Err(Error::InvalidArtifact {
                artifact: "pivot matrix".to_string(),
                reason: "matrix is empty but the catalog is not".to_string(),
            });
        }

        if self.model.dim() != self.matrix.dim() {
            return Err(Error::InvalidArtifact {
                artifact: "neighbor model".to_string(),
                reason: format!(
                    "model dim {} does not match matrix dim {}",
                    self.model.dim(),
                    self.matrix.dim()
                ),
            });
        }

        if self.model.row_count() != self.matrix.row_count() {
            return Err(Error::InvalidArtifact {
                artifact: "neighbor model".to_string(),
                reason: format!(
                    "model has {} rows, matrix has {}",
                    self.model.row_count(),
                    self.matrix.row_count()
                ),
            });
        }

        // The search control only offers catalog titles, so each one must
        // resolve to a matrix row or the UI would offer dead selections.
        for title in self.catalog.iter() {
            if self.matrix.position_of(title).is_none() {
                return Err(Error::InvalidArtifact {
                    artifact: "catalog".to_string(),
                    reason: format!("title not present in pivot matrix: {title}"),
                });
            }
        }

        Ok(())
    }

    /// Number of matrix titles with no metadata row. Reported at load time;
    /// each resolves to the placeholder cover when queried.
    #[must_use]
    pub fn missing_metadata(&self) -> usize {
        self.matrix
            .titles()
            .iter()
            .filter(|t| self.ratings.record_for(t).is_none())
            .count()
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &PivotMatrix {
        &self.matrix
    }

    #[inline]
    #[must_use]
    pub fn model(&self) -> &NeighborModel {
        &self.model
    }

    #[inline]
    #[must_use]
    pub fn ratings(&self) -> &RatingsTable {
        &self.ratings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;
    use crate::metadata::BookRecord;

    fn matrix() -> PivotMatrix {
        PivotMatrix::new(
            vec!["a".to_string(), "b".to_string()],
            2,
            vec![1.0, 0.0, 0.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn test_catalog_title_must_exist_in_matrix() {
        let m = matrix();
        let model = NeighborModel::fit(&m, Metric::Cosine);
        let err = Library::new(
            Catalog::new(vec!["a".to_string(), "ghost".to_string()]),
            m,
            model,
            RatingsTable::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact { .. }));
    }

    #[test]
    fn test_model_row_count_checked() {
        let m = matrix();
        let model = NeighborModel::new(Metric::Cosine, 2, vec![1.0, 0.0]).unwrap();
        let err = Library::new(
            Catalog::new(vec!["a".to_string()]),
            m,
            model,
            RatingsTable::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact { .. }));
    }

    #[test]
    fn test_missing_metadata_counted_not_fatal() {
        let m = matrix();
        let model = NeighborModel::fit(&m, Metric::Cosine);
        let library = Library::new(
            Catalog::new(vec!["a".to_string(), "b".to_string()]),
            m,
            model,
            RatingsTable::new(vec![BookRecord {
                title: "a".to_string(),
                author: String::new(),
                image_url: "http://covers/a.jpg".to_string(),
            }]),
        )
        .unwrap();
        assert_eq!(library.missing_metadata(), 1);
    }
}
