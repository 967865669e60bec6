use actix_web::{web, HttpResponse};

use super::collection_paths;
use crate::errors::AppError;
use crate::infrastructure::DieselReportQueries;
use crate::models::reports::*;

/// GET /<report-name>/
pub async fn get_report<R: ReportRow>(
    queries: web::Data<DieselReportQueries>,
) -> Result<HttpResponse, AppError> {
    let rows = web::block(move || queries.run::<R>()).await??;
    Ok(HttpResponse::Ok().json(rows))
}

fn report<R: ReportRow>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(collection_paths(R::spec().name)).route(web::get().to(get_report::<R>)),
    );
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    report::<ProductWithInventory>(cfg);
    report::<OrderWithPayment>(cfg);
    report::<OrderWithCustomer>(cfg);
    report::<SupplierInventory>(cfg);
    report::<ShipmentWithOrder>(cfg);
    report::<CustomerWithOrders>(cfg);
    report::<SupplierWithProducts>(cfg);
    report::<CompletedPayment>(cfg);
    report::<OrderWithShipment>(cfg);
    report::<PaymentWithShipment>(cfg);
    report::<ProductInventoryStatus>(cfg);
    report::<OrderWithPaymentStatus>(cfg);
    report::<InventoryWithSupplier>(cfg);
}
