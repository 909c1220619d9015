use std::sync::Arc;

use crate::{Error, Library, Result};

/// Neighbors requested per lookup, the queried title included. Capped to
/// the matrix row count for small libraries.
pub const NEIGHBOR_COUNT: usize = 6;

/// One recommendation: a neighbor title and its distance from the query row.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub distance: f32,
}

/// Answers "which books are closest to this one" against the fitted model.
///
/// Stateless over a shared [`Library`]; cloning is cheap and handlers may
/// query concurrently.
#[derive(Clone)]
pub struct Recommender {
    library: Arc<Library>,
}

impl Recommender {
    #[must_use]
    pub fn new(library: Arc<Library>) -> Self {
        Self { library }
    }

    #[inline]
    #[must_use]
    pub fn library(&self) -> &Arc<Library> {
        &self.library
    }

    /// Recommend up to [`NEIGHBOR_COUNT`] titles for the given one, the
    /// queried title itself first at distance ~0, then ascending distance.
    ///
    /// The search control restricts selection to catalog titles, so an
    /// unknown title is a defensive path: it returns
    /// [`Error::TitleNotFound`] instead of an out-of-range row access.
    pub fn recommend(&self, title: &str) -> Result<Vec<Recommendation>> {
        let matrix = self.library.matrix();
        let row = matrix
            .position_of(title)
            .ok_or_else(|| Error::TitleNotFound(title.to_string()))?;

        // position_of guarantees the row exists.
        let query = matrix.row(row).ok_or_else(|| Error::InvalidArtifact {
            artifact: "pivot matrix".to_string(),
            reason: format!("row {row} out of range"),
        })?;

        let k = NEIGHBOR_COUNT.min(matrix.row_count());
        let hits = self.library.model().kneighbors(query, k)?;

        Ok(hits
            .into_iter()
            .filter_map(|n| {
                matrix.title(n.row).map(|t| Recommendation {
                    title: t.to_string(),
                    distance: n.distance,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;
    use crate::{Catalog, NeighborModel, PivotMatrix, RatingsTable};

    fn library() -> Arc<Library> {
        let titles: Vec<String> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        // Rows fan out from [1, 0] by increasing angle.
        let values = vec![
            1.0, 0.0, //
            0.99, 0.14, //
            0.92, 0.39, //
            0.77, 0.64, //
            0.5, 0.87, //
            0.17, 0.98, //
            -0.17, 0.98,
        ];
        let matrix = PivotMatrix::new(titles.clone(), 2, values).unwrap();
        let model = NeighborModel::fit(&matrix, Metric::Cosine);
        Arc::new(Library::new(Catalog::new(titles), matrix, model, RatingsTable::default()).unwrap())
    }

    #[test]
    fn test_six_results_self_first() {
        let rec = Recommender::new(library());
        let results = rec.recommend("a").unwrap();
        assert_eq!(results.len(), 6);
        assert_eq!(results[0].title, "a");
        assert!(results[0].distance < 1e-6);
        assert_eq!(results[1].title, "b");
    }

    #[test]
    fn test_unknown_title() {
        let rec = Recommender::new(library());
        let err = rec.recommend("nope").unwrap_err();
        assert!(matches!(err, Error::TitleNotFound(_)));
    }

    #[test]
    fn test_deterministic() {
        let rec = Recommender::new(library());
        let first = rec.recommend("d").unwrap();
        let second = rec.recommend("d").unwrap();
        assert_eq!(first, second);
    }
}
