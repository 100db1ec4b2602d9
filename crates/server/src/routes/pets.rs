use axum::extract::{Query, State};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::errors::JsonApiError;
use crate::routes::ServerState;
use crate::views::{DeleteView, PetListView, PetView};
use service::errors::ServiceError;
use service::pet_service;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreatePetForm {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "valor")]
    pub value: f64,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct GetPetQuery {
    pub id: i32,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct DeletePetQuery {
    #[serde(rename = "nome")]
    pub name: String,
}

#[utoipa::path(
    post, path = "/pet", tag = "pet",
    request_body(content = crate::openapi::CreatePetFormDoc, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Pet created", body = PetView),
        (status = 409, description = "Pet of the same name and type already saved", body = crate::openapi::ErrorMessage),
        (status = 400, description = "Could not save the new item", body = crate::openapi::ErrorMessage)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Form(input): Form<CreatePetForm>,
) -> Result<Json<PetView>, JsonApiError> {
    info!(name = %input.name, "pet_create_request");
    match pet_service::create_pet(&state.db, &input.name, input.quantity, input.value).await {
        Ok(created) => {
            info!(id = created.id, name = %created.name, "created pet");
            Ok(Json(PetView::from_parts(created, Vec::new())))
        }
        Err(ServiceError::Conflict(_)) => {
            warn!(name = %input.name, "duplicate pet");
            Err(JsonApiError::conflict("pet of the same name and type already saved"))
        }
        Err(e) => {
            warn!(name = %input.name, err = %e, "could not save pet");
            Err(JsonApiError::bad_request("could not save the new item"))
        }
    }
}

#[utoipa::path(
    get, path = "/pets", tag = "pet",
    responses((status = 200, description = "All registered pets", body = PetListView))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<PetListView>, JsonApiError> {
    match pet_service::list_pets(&state.db).await {
        Ok(rows) => {
            info!(count = rows.len(), "list pets");
            Ok(Json(PetListView { pets: rows.into_iter().map(PetView::from).collect() }))
        }
        Err(e) => {
            error!(err = %e, "list pets failed");
            Err(JsonApiError::internal(e.to_string()))
        }
    }
}

#[utoipa::path(
    get, path = "/pet", tag = "pet",
    params(GetPetQuery),
    responses(
        (status = 200, description = "Pet with its contacts", body = PetView),
        (status = 404, description = "Pet not found", body = crate::openapi::ErrorMessage)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Query(q): Query<GetPetQuery>,
) -> Result<Json<PetView>, JsonApiError> {
    match pet_service::get_pet(&state.db, q.id).await {
        Ok(Some(row)) => Ok(Json(PetView::from(row))),
        Ok(None) => {
            warn!(id = q.id, "pet not found");
            Err(JsonApiError::not_found("pet not found"))
        }
        Err(e) => {
            error!(id = q.id, err = %e, "get pet failed");
            Err(JsonApiError::internal(e.to_string()))
        }
    }
}

#[utoipa::path(
    delete, path = "/pet", tag = "pet",
    params(DeletePetQuery),
    responses(
        (status = 200, description = "Pet removed", body = DeleteView),
        (status = 404, description = "Pet not found", body = crate::openapi::ErrorMessage)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Query(q): Query<DeletePetQuery>,
) -> Result<Json<DeleteView>, JsonApiError> {
    // Axum already decoded the query string once; clients are allowed to
    // double-encode the name, so two more passes before matching.
    let name = double_decode(&q.name);
    match pet_service::delete_pet_by_name(&state.db, &name).await {
        Ok(0) => {
            warn!(name = %name, "pet not found for delete");
            Err(JsonApiError::not_found("pet not found"))
        }
        Ok(count) => {
            info!(name = %name, count, "deleted pet");
            Ok(Json(DeleteView { message: "pet removed".into(), id: name }))
        }
        Err(e) => {
            error!(name = %name, err = %e, "delete pet failed");
            Err(JsonApiError::internal(e.to_string()))
        }
    }
}

fn double_decode(raw: &str) -> String {
    let once = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    let twice = urlencoding::decode(&once).map(|s| s.into_owned());
    twice.unwrap_or(once)
}

#[cfg(test)]
mod tests {
    use super::double_decode;

    #[test]
    fn double_decode_handles_double_encoded_input() {
        assert_eq!(double_decode("Rex%2520A"), "Rex A");
        assert_eq!(double_decode("Rex%20A"), "Rex A");
        assert_eq!(double_decode("Rex"), "Rex");
    }
}
