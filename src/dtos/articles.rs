use serde::Deserialize;

/// Request body for `POST /api/articles/:name/add-comment`.
#[derive(Debug, Deserialize)]
pub struct NewComment {
    pub username: String,
    pub text: String,
}
