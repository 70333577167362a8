pub mod articles;
pub mod health;

pub use articles::{add_comment, get_article, upvote_article};
pub use health::health_check;
