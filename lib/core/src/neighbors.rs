use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::distance::{distance, Metric};
use crate::{Error, PivotMatrix, Result};

/// A single neighbor hit: the row position in the shared index space and
/// its distance from the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub row: usize,
    pub distance: f32,
}

/// A fitted brute-force nearest-neighbor index over the pivot matrix rows.
///
/// The model keeps its own copy of the row vectors it was fitted on, so a
/// loaded model artifact is queryable without the matrix it came from. Rows
/// are index-aligned with the pivot matrix; consistency between the two is
/// checked at load time, not here.
#[derive(Debug, Clone)]
pub struct NeighborModel {
    metric: Metric,
    dim: usize,
    rows: Vec<f32>,
}

impl NeighborModel {
    /// Reconstruct a model from its serialized parts.
    ///
    /// Fails when the row buffer is not a whole number of rows of `dim`.
    pub fn new(metric: Metric, dim: usize, rows: Vec<f32>) -> Result<Self> {
        if dim == 0 || rows.len() % dim != 0 {
            return Err(Error::InvalidArtifact {
                artifact: "neighbor model".to_string(),
                reason: format!("row buffer of {} values is not divisible by dim {}", rows.len(), dim),
            });
        }
        Ok(Self { metric, dim, rows })
    }

    /// Fit a model over all rows of a pivot matrix.
    ///
    /// Fitting copies the rows; the distance work happens at query time.
    pub fn fit(matrix: &PivotMatrix, metric: Metric) -> Self {
        Self {
            metric,
            dim: matrix.dim(),
            rows: matrix.values().to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len() / self.dim
    }

    /// The flat row-major buffer of fitted rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[f32] {
        &self.rows
    }

    /// Find the `k` nearest rows to the query vector, ascending by distance.
    ///
    /// When the query is itself a fitted row, that row comes back first at
    /// distance ~0. Ties are broken by row position so results are fully
    /// deterministic. `k` larger than the fitted row count is capped.
    pub fn kneighbors(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        if query.len() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: query.len(),
            });
        }

        let count = self.row_count();
        let k = k.min(count);
        if k == 0 {
            return Ok(Vec::new());
        }

        // Max-heap of the current top-k, keyed by (distance, row) so the
        // worst candidate sits on top and ties resolve to lower rows.
        let mut heap: BinaryHeap<(OrderedFloat<f32>, usize)> = BinaryHeap::with_capacity(k + 1);
        for row in 0..count {
            let slice = &self.rows[row * self.dim..(row + 1) * self.dim];
            let d = distance(self.metric, query, slice);
            heap.push((OrderedFloat(d), row));
            if heap.len() > k {
                heap.pop();
            }
        }

        let mut hits: Vec<Neighbor> = heap
            .into_iter()
            .map(|(d, row)| Neighbor {
                row,
                distance: d.into_inner(),
            })
            .collect();
        hits.sort_by_key(|n| (OrderedFloat(n.distance), n.row));
        Ok(hits)
    }
}
