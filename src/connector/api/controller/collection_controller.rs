use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::application::VectorDbConnector;

use super::super::dto::{CreateCollectionRequest, MessageResponse};
use super::super::ApiError;

pub async fn create_collection(
    State(connector): State<Arc<VectorDbConnector>>,
    payload: Result<Json<CreateCollectionRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload?;

    let collection = connector
        .create_collection(&request.name, request.description)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "Collection '{}' created",
        collection.name()
    ))))
}
