use axum::extract::State;
use axum::Json;
use tracing::error;

use crate::errors::JsonApiError;
use crate::routes::ServerState;
use crate::views::{TypeListView, TypeView};
use service::lookup_service;

#[utoipa::path(
    get, path = "/tipos-animal", tag = "tipo-animal",
    responses((status = 200, description = "All animal types", body = TypeListView))
)]
pub async fn animal_types(State(state): State<ServerState>) -> Result<Json<TypeListView>, JsonApiError> {
    match lookup_service::list_animal_types(&state.db).await {
        Ok(rows) => Ok(Json(TypeListView { types: rows.into_iter().map(TypeView::from).collect() })),
        Err(e) => {
            error!(err = %e, "list animal types failed");
            Err(JsonApiError::internal(e.to_string()))
        }
    }
}

#[utoipa::path(
    get, path = "/tipos-contato", tag = "tipo-contato",
    responses((status = 200, description = "All contact types", body = TypeListView))
)]
pub async fn contact_types(State(state): State<ServerState>) -> Result<Json<TypeListView>, JsonApiError> {
    match lookup_service::list_contact_types(&state.db).await {
        Ok(rows) => Ok(Json(TypeListView { types: rows.into_iter().map(TypeView::from).collect() })),
        Err(e) => {
            error!(err = %e, "list contact types failed");
            Err(JsonApiError::internal(e.to_string()))
        }
    }
}
