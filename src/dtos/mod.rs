pub mod articles;

pub use articles::NewComment;
