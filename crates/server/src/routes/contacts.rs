use axum::extract::State;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::errors::JsonApiError;
use crate::routes::ServerState;
use crate::views::PetView;
use service::contact_service;
use service::errors::ServiceError;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateContactForm {
    pub pet_id: i32,
    #[serde(rename = "texto")]
    pub text: String,
}

#[utoipa::path(
    post, path = "/contato", tag = "contato",
    request_body(content = crate::openapi::CreateContactFormDoc, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Pet with the updated contact list", body = PetView),
        (status = 404, description = "Pet not found", body = crate::openapi::ErrorMessage),
        (status = 400, description = "Invalid contact", body = crate::openapi::ErrorMessage)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Form(input): Form<CreateContactForm>,
) -> Result<Json<PetView>, JsonApiError> {
    info!(pet_id = input.pet_id, "contact_create_request");
    match contact_service::add_contact(&state.db, input.pet_id, &input.text).await {
        Ok(row) => {
            info!(pet_id = input.pet_id, "added contact");
            Ok(Json(PetView::from(row)))
        }
        Err(ServiceError::NotFound(_)) => {
            warn!(pet_id = input.pet_id, "pet not found for contact");
            Err(JsonApiError::not_found("pet not found"))
        }
        Err(ServiceError::Validation(m)) => Err(JsonApiError::bad_request(m)),
        Err(e) => {
            error!(pet_id = input.pet_id, err = %e, "add contact failed");
            Err(JsonApiError::internal(e.to_string()))
        }
    }
}
