use crate::dtos::NewComment;
use crate::error::AppError;
use crate::models::{Article, Comment};
use crate::services::{articles, with_db};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use mongodb::bson::doc;

/// `GET /api/articles/:name` — returns the raw document, or JSON `null`
/// when no article carries that name. Absence is not an error.
pub async fn get_article(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article = with_db(&state.config.mongodb, |db| async move {
        articles(&db)
            .find_one(doc! { "name": &name }, None)
            .await
            .map_err(AppError::from)
    })
    .await?;

    Ok(Json(article))
}

/// `POST /api/articles/:name/upvote` — find, bump the counter, write it
/// back, re-read, return.
///
/// The read-modify-write is deliberately not atomic: two concurrent upvotes
/// on the same article may both read the same count and one increment is
/// lost (last write wins). A missing article fails the operation and falls
/// through to the uniform 500.
pub async fn upvote_article(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let updated = with_db(&state.config.mongodb, |db| async move {
        let collection = articles(&db);

        let article = collection
            .find_one(doc! { "name": &name }, None)
            .await?
            .ok_or_else(|| AppError::Database(anyhow::anyhow!("no article named '{}'", name)))?;

        collection
            .update_one(
                doc! { "name": &name },
                doc! { "$set": { "upvotes": article.upvotes + 1 } },
                None,
            )
            .await?;

        let updated = collection
            .find_one(doc! { "name": &name }, None)
            .await?
            .ok_or_else(|| AppError::Database(anyhow::anyhow!("no article named '{}'", name)))?;

        Ok(updated)
    })
    .await?;

    tracing::info!(article = %updated.name, upvotes = updated.upvotes, "Article upvoted");

    Ok(Json(updated))
}

/// `POST /api/articles/:name/add-comment` — find, append the comment to the
/// in-memory list, write the whole list back, re-read, return.
///
/// Same unguarded read-modify-write as upvoting: concurrent comment posts
/// can silently drop one append.
///
/// A body that does not parse as `{username, text}` is rejected by the
/// `Json` extractor with a 4xx before this handler runs; beyond that shape
/// check, nothing is validated.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<NewComment>,
) -> Result<impl IntoResponse, AppError> {
    let updated = with_db(&state.config.mongodb, |db| async move {
        let collection = articles(&db);

        let article = collection
            .find_one(doc! { "name": &name }, None)
            .await?
            .ok_or_else(|| AppError::Database(anyhow::anyhow!("no article named '{}'", name)))?;

        let mut comments = article.comments;
        comments.push(Comment {
            username: payload.username,
            text: payload.text,
        });
        let comments = mongodb::bson::to_bson(&comments).map_err(|e| {
            AppError::Database(anyhow::anyhow!("Failed to serialize comments: {}", e))
        })?;

        collection
            .update_one(
                doc! { "name": &name },
                doc! { "$set": { "comments": comments } },
                None,
            )
            .await?;

        let updated: Article = collection
            .find_one(doc! { "name": &name }, None)
            .await?
            .ok_or_else(|| AppError::Database(anyhow::anyhow!("no article named '{}'", name)))?;

        Ok(updated)
    })
    .await?;

    tracing::info!(
        article = %updated.name,
        comments = updated.comments.len(),
        "Comment added"
    );

    Ok(Json(updated))
}
