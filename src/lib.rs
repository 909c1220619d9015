//! # LibriX
//!
//! A book recommendation lookup service: given a selected title, LibriX
//! queries a precomputed nearest-neighbor model over a pivoted title/rating
//! matrix and renders the closest titles with their cover images.
//!
//! The model is fitted and serialized elsewhere. LibriX loads four
//! artifacts once at startup, keeps them immutable for the process
//! lifetime, and answers deterministic in-memory lookups.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! librix --artifacts-dir ./artifacts --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use librix::prelude::*;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let library = Arc::new(load_library(Path::new("./artifacts")).unwrap());
//!
//! let recommender = Recommender::new(library.clone());
//! let results = recommender.recommend("The Hobbit").unwrap();
//!
//! let resolver = PosterResolver::new(library);
//! for r in &results {
//!     println!("{} -> {}", r.title, resolver.poster_url_or_placeholder(&r.title));
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `librix-core` - domain types and query logic (matrix, neighbor model,
//!   recommender, poster resolver)
//! - `librix-store` - versioned bincode artifacts and fail-fast loading
//! - `librix-api` - actix-web page and JSON API

// Re-export core types
pub use librix_core::{
    BookRecord, Catalog, Error, Library, Metric, Neighbor, NeighborModel, PivotMatrix,
    PosterResolver, RatingsTable, Recommendation, Recommender, Result, NEIGHBOR_COUNT,
    PLACEHOLDER_POSTER,
};

// Re-export store
pub use librix_store::{load_library, save_library};

// Re-export API
pub use librix_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_library, save_library, BookRecord, Catalog, Error, Library, Metric, NeighborModel,
        PivotMatrix, PosterResolver, RatingsTable, Recommendation, Recommender, Result, RestApi,
        NEIGHBOR_COUNT, PLACEHOLDER_POSTER,
    };
}
