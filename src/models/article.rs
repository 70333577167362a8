use serde::{Deserialize, Serialize};

/// The sole persisted entity. Articles are pre-seeded in the store; the API
/// only reads them and mutates `upvotes`/`comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique key, taken from the URL path.
    pub name: String,
    pub upvotes: i64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub username: String,
    pub text: String,
}
