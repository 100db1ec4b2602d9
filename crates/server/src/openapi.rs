use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreatePetFormDoc {
    pub nome: String,
    pub quantidade: i32,
    pub valor: f64,
}

#[derive(utoipa::ToSchema)]
pub struct CreateContactFormDoc {
    pub pet_id: i32,
    pub texto: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::home,
        crate::routes::health,
        crate::routes::pets::create,
        crate::routes::pets::list,
        crate::routes::pets::get,
        crate::routes::pets::delete,
        crate::routes::contacts::create,
        crate::routes::lookups::animal_types,
        crate::routes::lookups::contact_types,
    ),
    components(
        schemas(
            ErrorMessage,
            CreatePetFormDoc,
            CreateContactFormDoc,
            crate::views::PetView,
            crate::views::ContactView,
            crate::views::PetListView,
            crate::views::TypeView,
            crate::views::TypeListView,
            crate::views::DeleteView,
        )
    ),
    tags(
        (name = "documentacao", description = "Swagger UI and the OpenAPI document"),
        (name = "pet", description = "Create, list and remove pets"),
        (name = "contato", description = "Attach responsible-party contacts to a registered pet"),
        (name = "tipo-animal", description = "Animal type lookup"),
        (name = "tipo-contato", description = "Contact type lookup")
    )
)]
pub struct ApiDoc;
