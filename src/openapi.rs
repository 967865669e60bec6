use utoipa::openapi::content::{Content, ContentBuilder};
use utoipa::openapi::path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItem};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{ArrayBuilder, KnownFormat, ObjectBuilder, SchemaFormat, Type};
use utoipa::openapi::{Ref, RefOr, Required, Response, ResponseBuilder, Schema};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::reports::CATALOG;
use crate::handlers::entities::ListParams;
use crate::models::{Customer, Entity, Inventory, Order, Payment, Product, Shipment, Supplier};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Commerce Reports API",
        version = "0.1.0",
        description = "Item CRUD, commerce tables and join reports"
    ),
    paths(
        crate::handlers::root,
        crate::handlers::items::create_items,
        crate::handlers::items::list_items,
        crate::handlers::items::get_item,
        crate::handlers::items::update_item,
        crate::handlers::items::delete_item,
        crate::handlers::fixtures::generate_data,
    ),
    components(schemas(
        crate::models::Customer,
        crate::models::NewCustomer,
        crate::models::Order,
        crate::models::NewOrder,
        crate::models::Product,
        crate::models::NewProduct,
        crate::models::Supplier,
        crate::models::NewSupplier,
        crate::models::Inventory,
        crate::models::NewInventory,
        crate::models::Shipment,
        crate::models::NewShipment,
        crate::models::Payment,
        crate::models::NewPayment,
        crate::models::reports::ProductWithInventory,
        crate::models::reports::OrderWithPayment,
        crate::models::reports::OrderWithCustomer,
        crate::models::reports::SupplierInventory,
        crate::models::reports::ShipmentWithOrder,
        crate::models::reports::CustomerWithOrders,
        crate::models::reports::SupplierWithProducts,
        crate::models::reports::CompletedPayment,
        crate::models::reports::OrderWithShipment,
        crate::models::reports::PaymentWithShipment,
        crate::models::reports::ProductInventoryStatus,
        crate::models::reports::OrderWithPaymentStatus,
        crate::models::reports::InventoryWithSupplier,
    )),
    tags(
        (name = "items", description = "Item CRUD"),
        (name = "entities", description = "Create and read the commerce tables"),
        (name = "reports", description = "Read-only join reports"),
        (name = "fixtures", description = "Synthetic data generation"),
    )
)]
pub struct ApiDoc;

fn json(schema: impl Into<RefOr<Schema>>) -> Content {
    ContentBuilder::new().schema(Some(schema)).build()
}

/// `GET`/`POST /{name}/` and `GET /{name}/{id}` for one commerce table. The
/// routes are generic over the entity, so they are described here rather
/// than through `#[utoipa::path]`.
fn add_entity_paths<E>(doc: &mut utoipa::openapi::OpenApi, name: &str)
where
    E: Entity + ToSchema,
    E::New: ToSchema,
{
    let row = Ref::from_schema_name(<E as ToSchema>::name());
    let new_row = Ref::from_schema_name(<E::New as ToSchema>::name());
    let rows = ArrayBuilder::new().items(RefOr::Ref(row.clone())).build();
    let new_rows = ArrayBuilder::new().items(RefOr::Ref(new_row)).build();

    let list = OperationBuilder::new()
        .tag("entities")
        .operation_id(Some(format!("list_{name}")))
        .parameters(Some(ListParams::into_params(|| Some(ParameterIn::Query))))
        .response(
            "200",
            ResponseBuilder::new()
                .description("Rows ordered by id")
                .content("application/json", json(rows.clone()))
                .build(),
        )
        .response("422", Response::new("Negative skip or limit"))
        .build();

    let create = OperationBuilder::new()
        .tag("entities")
        .operation_id(Some(format!("create_{name}")))
        .request_body(Some(
            RequestBodyBuilder::new()
                .content("application/json", json(new_rows))
                .required(Some(Required::True))
                .build(),
        ))
        .response(
            "201",
            ResponseBuilder::new()
                .description("Created rows with their ids")
                .content("application/json", json(rows))
                .build(),
        )
        .response("422", Response::new("Malformed body"))
        .build();

    let id = ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .schema(Some(
            ObjectBuilder::new()
                .schema_type(Type::Integer)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int32)))
                .build(),
        ))
        .build();
    let get = OperationBuilder::new()
        .tag("entities")
        .operation_id(Some(format!("get_{name}")))
        .parameter(id)
        .response(
            "200",
            ResponseBuilder::new()
                .description("The stored row")
                .content("application/json", json(row))
                .build(),
        )
        .response("404", Response::new(format!("{} not found", E::NAME)))
        .build();

    let mut collection = PathItem::new(HttpMethod::Get, list);
    collection.post = Some(create);
    doc.paths.paths.insert(format!("/{name}/"), collection);
    doc.paths
        .paths
        .insert(format!("/{name}/{{id}}"), PathItem::new(HttpMethod::Get, get));
}

/// The derived document plus the commerce table routes and one GET
/// operation per join report.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    add_entity_paths::<Customer>(&mut doc, "customers");
    add_entity_paths::<Order>(&mut doc, "orders");
    add_entity_paths::<Product>(&mut doc, "products");
    add_entity_paths::<Supplier>(&mut doc, "suppliers");
    add_entity_paths::<Inventory>(&mut doc, "inventory");
    add_entity_paths::<Shipment>(&mut doc, "shipments");
    add_entity_paths::<Payment>(&mut doc, "payments");

    for spec in CATALOG {
        let nullable = spec.nullable_fields();
        let description = (!nullable.is_empty())
            .then(|| format!("Nullable columns: {}", nullable.join(", ")));
        let operation = OperationBuilder::new()
            .tag("reports")
            .operation_id(Some(spec.name))
            .summary(Some(format!(
                "{} {} {}",
                spec.left,
                spec.kind.keyword().to_lowercase(),
                spec.right
            )))
            .description(description)
            .response("200", Response::new("Flattened report rows"))
            .build();
        doc.paths.paths.insert(
            format!("/{}/", spec.name),
            PathItem::new(HttpMethod::Get, operation),
        );
    }
    doc
}

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", api_doc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_item_and_report_paths() {
        let doc = api_doc();
        assert!(doc.paths.paths.contains_key("/items/{id}"));
        assert!(doc.paths.paths.contains_key("/generate_data/"));
        for spec in CATALOG {
            let path = format!("/{}/", spec.name);
            assert!(doc.paths.paths.contains_key(&path), "{path}");
        }
    }

    #[test]
    fn document_lists_commerce_table_routes() {
        let doc = api_doc();
        for name in [
            "customers",
            "orders",
            "products",
            "suppliers",
            "inventory",
            "shipments",
            "payments",
        ] {
            let collection = &doc.paths.paths[&format!("/{name}/")];
            assert!(collection.get.is_some(), "list {name}");
            assert!(collection.post.is_some(), "create {name}");
            let by_id = &doc.paths.paths[&format!("/{name}/{{id}}")];
            assert!(by_id.get.is_some(), "get {name}");
        }
    }

    #[test]
    fn outer_join_reports_describe_their_nullable_columns() {
        let doc = api_doc();
        let op = doc.paths.paths["/customers_with_orders/"]
            .get
            .as_ref()
            .expect("GET operation");
        assert_eq!(
            op.description.as_deref(),
            Some("Nullable columns: order_id, total_price")
        );
        let inner = doc.paths.paths["/orders_with_customers/"]
            .get
            .as_ref()
            .expect("GET operation");
        assert!(inner.description.is_none());
    }
}
