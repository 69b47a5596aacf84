use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;

use crate::application::VectorDbConnector;

use super::super::dto::{
    DocumentRequest, DocumentResponse, MessageResponse, RetrieveQueryParams,
    RetrievedDocumentsResponse,
};
use super::super::ApiError;

pub async fn insert_document(
    State(connector): State<Arc<VectorDbConnector>>,
    payload: Result<Json<DocumentRequest>, JsonRejection>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let Json(document) = payload?;
    let doc_id = connector.insert_document(&document.text).await?;

    Ok(Json(DocumentResponse {
        doc_id,
        message: "Document inserted successfully.".to_string(),
    }))
}

pub async fn update_document(
    State(connector): State<Arc<VectorDbConnector>>,
    doc_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<DocumentRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(doc_id) = doc_id?;
    let Json(document) = payload?;
    connector.update_document(&doc_id, &document.text).await?;

    Ok(Json(MessageResponse::new(format!(
        "Document with ID {} updated successfully.",
        doc_id
    ))))
}

pub async fn delete_document(
    State(connector): State<Arc<VectorDbConnector>>,
    doc_id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(doc_id) = doc_id?;
    connector.delete_document(&doc_id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Document with ID {} deleted successfully.",
        doc_id
    ))))
}

pub async fn retrieve_documents(
    State(connector): State<Arc<VectorDbConnector>>,
    params: Result<Query<RetrieveQueryParams>, QueryRejection>,
) -> Result<Json<RetrievedDocumentsResponse>, ApiError> {
    let Query(params) = params?;
    let documents = connector
        .retrieve_documents(&params.query_text, params.n)
        .await?;

    Ok(Json(RetrievedDocumentsResponse { documents }))
}
