use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::VectorDbConnector;

use super::controller::{
    create_collection, delete_document, insert_document, retrieve_documents, update_document,
};

/// Routes of the document API, all sharing one connector.
pub fn router(connector: Arc<VectorDbConnector>) -> Router {
    Router::new()
        .route("/create-collection", post(create_collection))
        .route("/insert", post(insert_document))
        .route("/update/{doc_id}", put(update_document))
        .route("/delete/{doc_id}", delete(delete_document))
        .route("/retrieve/", get(retrieve_documents))
        .route("/retrieve", get(retrieve_documents))
        .layer(TraceLayer::new_for_http())
        .with_state(connector)
}
