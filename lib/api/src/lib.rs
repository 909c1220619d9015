//! # LibriX API
//!
//! HTTP surface for the LibriX book recommender:
//!
//! - `GET /` - the server-rendered page: search select over the catalog, a
//!   trigger button, and a five-wide gallery of recommendation cards with a
//!   light/dark theme toggle
//! - `GET /api/books` - the title catalog as JSON
//! - `GET /api/recommend?title=...` - full neighbor list for a title
//! - `GET /health` - liveness and artifact counts
//!
//! Handlers are stateless over a shared `Arc<Library>`; requests perform no
//! writes and need no synchronization.

pub mod page;
pub mod rest;

pub use page::{Card, Theme};
pub use rest::RestApi;
