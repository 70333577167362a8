//! blog-service: HTTP backend for a blog front end.
//!
//! Exposes a small JSON API over a MongoDB article collection (fetch,
//! upvote, add-comment) and serves the pre-built single-page front end
//! for every other route.
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
