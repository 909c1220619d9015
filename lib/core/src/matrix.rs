use ahash::AHashMap;

use crate::{Error, Result};

/// The pivoted interaction matrix: one row per book title, columns spanning
/// the latent rating dimension the model was fitted on.
///
/// Row order is stable and canonical - it is the shared index space between
/// this matrix and the fitted [`NeighborModel`](crate::NeighborModel).
/// Values are stored row-major in a single flat buffer.
#[derive(Debug, Clone)]
pub struct PivotMatrix {
    titles: Vec<String>,
    dim: usize,
    values: Vec<f32>,
    by_title: AHashMap<String, usize>,
}

impl PivotMatrix {
    /// Build a matrix from row titles and a flat row-major value buffer.
    ///
    /// Fails when the buffer length does not equal `titles.len() * dim`.
    pub fn new(titles: Vec<String>, dim: usize, values: Vec<f32>) -> Result<Self> {
        if values.len() != titles.len() * dim {
            return Err(Error::InvalidArtifact {
                artifact: "pivot matrix".to_string(),
                reason: format!(
                    "expected {} values for {} rows of dim {}, got {}",
                    titles.len() * dim,
                    titles.len(),
                    dim,
                    values.len()
                ),
            });
        }

        // First occurrence wins on duplicate titles, matching row order.
        let mut by_title = AHashMap::with_capacity(titles.len());
        for (row, title) in titles.iter().enumerate() {
            by_title.entry(title.clone()).or_insert(row);
        }

        Ok(Self {
            titles,
            dim,
            values,
            by_title,
        })
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.titles.len()
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Row values by position.
    #[inline]
    pub fn row(&self, idx: usize) -> Option<&[f32]> {
        if idx >= self.titles.len() {
            return None;
        }
        Some(&self.values[idx * self.dim..(idx + 1) * self.dim])
    }

    /// Title at a row position.
    #[inline]
    pub fn title(&self, idx: usize) -> Option<&str> {
        self.titles.get(idx).map(String::as_str)
    }

    /// Row position of a title, if present.
    #[inline]
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.by_title.get(title).copied()
    }

    #[inline]
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// The flat row-major value buffer.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
