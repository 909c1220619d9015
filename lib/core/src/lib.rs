//! # LibriX Core
//!
//! Core library for the LibriX book recommender.
//!
//! This crate provides the domain types and query logic:
//!
//! - [`PivotMatrix`] - the pivoted title/rating matrix, the canonical row
//!   index space
//! - [`NeighborModel`] - a fitted brute-force k-NN index over the matrix rows
//! - [`Catalog`] - the ordered title list feeding the search control
//! - [`RatingsTable`] - per-title metadata (display title, author, cover URL)
//! - [`Library`] - the application context holding all four artifacts
//! - [`Recommender`] / [`PosterResolver`] - the two query components
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use librix_core::{
//!     Catalog, Library, Metric, NeighborModel, PivotMatrix, RatingsTable, Recommender,
//! };
//!
//! let titles = vec!["The Hobbit".to_string(), "Dune".to_string()];
//! let matrix = PivotMatrix::new(titles.clone(), 2, vec![1.0, 0.0, 0.0, 1.0]).unwrap();
//! let model = NeighborModel::fit(&matrix, Metric::Cosine);
//! let library = Arc::new(
//!     Library::new(Catalog::new(titles), matrix, model, RatingsTable::default()).unwrap(),
//! );
//!
//! let recommender = Recommender::new(library);
//! let results = recommender.recommend("The Hobbit").unwrap();
//! assert_eq!(results[0].title, "The Hobbit");
//! ```

pub mod catalog;
pub mod distance;
pub mod error;
pub mod library;
pub mod matrix;
pub mod metadata;
pub mod neighbors;
pub mod recommend;

pub use catalog::Catalog;
pub use distance::{cosine_distance, euclidean_distance, Metric};
pub use error::{Error, Result};
pub use library::Library;
pub use matrix::PivotMatrix;
pub use metadata::{BookRecord, PosterResolver, RatingsTable, PLACEHOLDER_POSTER};
pub use neighbors::{Neighbor, NeighborModel};
pub use recommend::{Recommendation, Recommender, NEIGHBOR_COUNT};
