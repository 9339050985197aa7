use crate::dtos::{ItemResponse, NewItem};
use crate::models::Item;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use metrics::counter;
use mongodb::bson::{doc, oid::ObjectId};
use service_core::error::AppError;

pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state
        .db
        .items()
        .find(doc! {}, None)
        .await
        .map_err(AppError::from)?;

    let mut items = Vec::new();
    while let Some(item) = cursor.try_next().await.map_err(AppError::from)? {
        items.push(ItemResponse::from(item));
    }

    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let object_id =
        ObjectId::parse_str(&id).map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid ID")))?;

    let item = state
        .db
        .items()
        .find_one(doc! { "_id": object_id }, None)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Item not found")))?;

    Ok(Json(ItemResponse::from(item)))
}

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Extract the body here rather than in the signature so a malformed
    // payload answers 400 with the contract message, not axum's default
    let Json(fields) = payload
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Failed to add item: {}", e)))?;

    let mut item = Item::new(fields);

    let result = state
        .db
        .items()
        .insert_one(&item, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert item: {}", e);
            AppError::BadRequest(anyhow::anyhow!("Failed to add item: {}", e))
        })?;

    let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
        AppError::BadRequest(anyhow::anyhow!(
            "Failed to add item: storage returned a non-ObjectId identifier"
        ))
    })?;
    item.id = Some(inserted_id);

    tracing::info!(item_id = %inserted_id, "Item created");
    counter!("items_created_total").increment(1);

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}
