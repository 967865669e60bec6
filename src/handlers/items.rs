use actix_web::{web, HttpResponse};

use super::entities::ListParams;
use super::{collection_paths, AppEntityService};
use crate::errors::{AppError, ErrorResponse};
use crate::models::{Item, NewItem};

/// POST /items/
///
/// Creates every item in the body with a single insert.
#[utoipa::path(
    post,
    path = "/items/",
    request_body = Vec<NewItem>,
    responses(
        (status = 201, description = "Items created", body = Vec<Item>),
        (status = 422, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "items"
)]
pub async fn create_items(
    service: web::Data<AppEntityService>,
    body: web::Json<Vec<NewItem>>,
) -> Result<HttpResponse, AppError> {
    let items = body.into_inner();
    let created = web::block(move || service.create::<Item>(items)).await??;
    Ok(HttpResponse::Created().json(created))
}

/// GET /items/
///
/// Returns items ordered by id.
#[utoipa::path(
    get,
    path = "/items/",
    params(ListParams),
    responses(
        (status = 200, description = "Page of items", body = Vec<Item>),
        (status = 422, description = "Negative skip or limit", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "items"
)]
pub async fn list_items(
    service: web::Data<AppEntityService>,
    query: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    let ListParams { skip, limit } = query.into_inner();
    let items = web::block(move || service.list::<Item>(skip, limit)).await??;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /items/{id}
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = i32, Path, description = "Item id"),
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "items"
)]
pub async fn get_item(
    service: web::Data<AppEntityService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let item = web::block(move || service.get::<Item>(id)).await??;
    Ok(HttpResponse::Ok().json(item))
}

/// PUT /items/{id}
///
/// Replaces name and description; a missing description clears it.
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = i32, Path, description = "Item id"),
    ),
    request_body = NewItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "items"
)]
pub async fn update_item(
    service: web::Data<AppEntityService>,
    path: web::Path<i32>,
    body: web::Json<NewItem>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let changes = body.into_inner();
    let item = web::block(move || service.update_item(id, changes)).await??;
    Ok(HttpResponse::Ok().json(item))
}

/// DELETE /items/{id}
///
/// Returns the item as it was before deletion.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = i32, Path, description = "Item id"),
    ),
    responses(
        (status = 200, description = "Item deleted", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "items"
)]
pub async fn delete_item(
    service: web::Data<AppEntityService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let item = web::block(move || service.delete_item(id)).await??;
    Ok(HttpResponse::Ok().json(item))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(collection_paths("items"))
            .route(web::get().to(list_items))
            .route(web::post().to(create_items)),
    )
    .service(
        web::resource("/items/{id}")
            .route(web::get().to(get_item))
            .route(web::put().to(update_item))
            .route(web::delete().to(delete_item)),
    );
}
