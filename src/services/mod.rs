pub mod database;

pub use database::{articles, with_db, ARTICLES_COLLECTION};
