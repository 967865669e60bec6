pub mod entities;
pub mod fixtures;
pub mod items;
pub mod reports;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::entity_service::EntityService;
use crate::application::fixtures::FixtureService;
use crate::infrastructure::DieselRepository;

pub type AppEntityService = EntityService<DieselRepository>;
pub type AppFixtureService = FixtureService<DieselRepository>;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse),
    ),
    tag = "root"
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Welcome to the Commerce Reports API!".to_string(),
    })
}

/// Registers every route. Collection paths answer with and without a
/// trailing slash.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root));
    reports::configure(cfg);
    items::configure(cfg);
    entities::configure(cfg);
    fixtures::configure(cfg);
}

pub(crate) fn collection_paths(name: &str) -> Vec<String> {
    vec![format!("/{name}"), format!("/{name}/")]
}
