use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{collection_paths, AppFixtureService};
use crate::application::fixtures::FixtureRequest;
use crate::domain::fixture::{FixtureCounts, FixtureMode};
use crate::errors::{AppError, ErrorResponse};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateParams {
    /// `random` (default) or `sequential`.
    #[serde(default)]
    pub mode: FixtureMode,
    /// Rows per table in random mode, 1..=1000. Defaults to 10.
    pub count: Option<usize>,
    /// Seed for reproducible random data.
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub message: String,
    pub mode: FixtureMode,
    pub counts: FixtureCounts,
}

/// POST /generate_data/
///
/// Appends a batch of synthetic rows to every table in one transaction.
#[utoipa::path(
    post,
    path = "/generate_data/",
    params(GenerateParams),
    responses(
        (status = 200, description = "Data generated", body = GenerateResponse),
        (status = 422, description = "Invalid parameters", body = ErrorResponse),
        (status = 500, description = "Batch rolled back", body = ErrorResponse),
    ),
    tag = "fixtures"
)]
pub async fn generate_data(
    service: web::Data<AppFixtureService>,
    query: web::Query<GenerateParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let request = FixtureRequest {
        mode: params.mode,
        count: params.count,
        seed: params.seed,
    };
    let counts = web::block(move || service.generate(request)).await??;

    Ok(HttpResponse::Ok().json(GenerateResponse {
        message: "Synthetic data generated successfully".to_string(),
        mode: request.mode,
        counts,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(collection_paths("generate_data")).route(web::post().to(generate_data)),
    );
}
