//! Create and read routes for the commerce tables. These rows are immutable
//! once created, so there is no update or delete.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use super::{collection_paths, AppEntityService};
use crate::domain::page::DEFAULT_LIMIT;
use crate::domain::ports::EntityRepository;
use crate::errors::AppError;
use crate::infrastructure::DieselRepository;
use crate::models::{Customer, Entity, Inventory, Order, Payment, Product, Shipment, Supplier};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Rows to skip. Defaults to 0.
    #[serde(default)]
    pub skip: i64,
    /// Maximum rows to return. Defaults to 100.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

pub async fn create<E>(
    service: web::Data<AppEntityService>,
    body: web::Json<Vec<E::New>>,
) -> Result<HttpResponse, AppError>
where
    E: Entity,
    DieselRepository: EntityRepository<E>,
{
    let new = body.into_inner();
    let created = web::block(move || service.create::<E>(new)).await??;
    Ok(HttpResponse::Created().json(created))
}

pub async fn list<E>(
    service: web::Data<AppEntityService>,
    query: web::Query<ListParams>,
) -> Result<HttpResponse, AppError>
where
    E: Entity,
    DieselRepository: EntityRepository<E>,
{
    let ListParams { skip, limit } = query.into_inner();
    let rows = web::block(move || service.list::<E>(skip, limit)).await??;
    Ok(HttpResponse::Ok().json(rows))
}

pub async fn get<E>(
    service: web::Data<AppEntityService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError>
where
    E: Entity,
    DieselRepository: EntityRepository<E>,
{
    let id = path.into_inner();
    let row = web::block(move || service.get::<E>(id)).await??;
    Ok(HttpResponse::Ok().json(row))
}

fn entity_routes<E>(cfg: &mut web::ServiceConfig, name: &str)
where
    E: Entity,
    DieselRepository: EntityRepository<E>,
{
    cfg.service(
        web::resource(collection_paths(name))
            .route(web::get().to(list::<E>))
            .route(web::post().to(create::<E>)),
    )
    .service(web::resource(format!("/{name}/{{id}}")).route(web::get().to(get::<E>)));
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    entity_routes::<Customer>(cfg, "customers");
    entity_routes::<Order>(cfg, "orders");
    entity_routes::<Product>(cfg, "products");
    entity_routes::<Supplier>(cfg, "suppliers");
    entity_routes::<Inventory>(cfg, "inventory");
    entity_routes::<Shipment>(cfg, "shipments");
    entity_routes::<Payment>(cfg, "payments");
}
