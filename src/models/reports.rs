//! Flattened rows returned by the reporting endpoints. Field names match the
//! aliases in `crate::domain::reports`; fields are `Option` exactly where the
//! join kind lets them come back null.

use bigdecimal::BigDecimal;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Numeric, Varchar};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::reports::{self, JoinSpec};

/// A row type bound to one join specification.
pub trait ReportRow: Serialize + Send + Sized + 'static {
    fn spec() -> &'static JoinSpec;
    fn load(conn: &mut PgConnection) -> QueryResult<Vec<Self>>;
}

macro_rules! report_row {
    ($row:ty, $spec:path) => {
        impl ReportRow for $row {
            fn spec() -> &'static JoinSpec {
                &$spec
            }

            fn load(conn: &mut PgConnection) -> QueryResult<Vec<Self>> {
                diesel::sql_query(Self::spec().to_sql()).load::<Self>(conn)
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct ProductWithInventory {
    #[diesel(sql_type = Integer)]
    pub product_id: i32,
    #[diesel(sql_type = Varchar)]
    pub product_name: String,
    #[diesel(sql_type = Numeric)]
    #[schema(value_type = String)]
    pub price: BigDecimal,
    #[diesel(sql_type = Integer)]
    pub stock: i32,
}
report_row!(ProductWithInventory, reports::PRODUCTS_WITH_INVENTORY);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct OrderWithPayment {
    #[diesel(sql_type = Integer)]
    pub order_id: i32,
    #[diesel(sql_type = Integer)]
    pub customer_id: i32,
    #[diesel(sql_type = Numeric)]
    #[schema(value_type = String)]
    pub total_price: BigDecimal,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub payment_status: Option<String>,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub payment_method: Option<String>,
}
report_row!(OrderWithPayment, reports::ORDERS_WITH_PAYMENTS);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct OrderWithCustomer {
    #[diesel(sql_type = Integer)]
    pub order_id: i32,
    #[diesel(sql_type = Varchar)]
    pub customer_name: String,
    #[diesel(sql_type = Varchar)]
    pub customer_email: String,
    #[diesel(sql_type = Numeric)]
    #[schema(value_type = String)]
    pub total_price: BigDecimal,
}
report_row!(OrderWithCustomer, reports::ORDERS_WITH_CUSTOMERS);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct SupplierInventory {
    #[diesel(sql_type = Varchar)]
    pub supplier_name: String,
    #[diesel(sql_type = Varchar)]
    pub supplier_contact: String,
    #[diesel(sql_type = Nullable<Integer>)]
    pub product_id: Option<i32>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub stock: Option<i32>,
}
report_row!(SupplierInventory, reports::SUPPLIERS_WITH_INVENTORY);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct ShipmentWithOrder {
    #[diesel(sql_type = Integer)]
    pub shipment_id: i32,
    #[diesel(sql_type = Varchar)]
    pub tracking_number: String,
    #[diesel(sql_type = Integer)]
    pub order_id: i32,
    #[diesel(sql_type = Numeric)]
    #[schema(value_type = String)]
    pub total_price: BigDecimal,
}
report_row!(ShipmentWithOrder, reports::SHIPMENTS_WITH_ORDERS);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct CustomerWithOrders {
    #[diesel(sql_type = Integer)]
    pub customer_id: i32,
    #[diesel(sql_type = Varchar)]
    pub customer_name: String,
    #[diesel(sql_type = Varchar)]
    pub customer_email: String,
    #[diesel(sql_type = Nullable<Integer>)]
    pub order_id: Option<i32>,
    #[diesel(sql_type = Nullable<Numeric>)]
    #[schema(value_type = Option<String>)]
    pub total_price: Option<BigDecimal>,
}
report_row!(CustomerWithOrders, reports::CUSTOMERS_WITH_ORDERS);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct SupplierWithProducts {
    #[diesel(sql_type = Integer)]
    pub supplier_id: i32,
    #[diesel(sql_type = Varchar)]
    pub supplier_name: String,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub product_name: Option<String>,
    #[diesel(sql_type = Nullable<Numeric>)]
    #[schema(value_type = Option<String>)]
    pub price: Option<BigDecimal>,
}
report_row!(SupplierWithProducts, reports::SUPPLIERS_WITH_PRODUCTS);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct CompletedPayment {
    #[diesel(sql_type = Integer)]
    pub payment_id: i32,
    #[diesel(sql_type = Integer)]
    pub order_id: i32,
    #[diesel(sql_type = Varchar)]
    pub payment_method: String,
    #[diesel(sql_type = Varchar)]
    pub payment_status: String,
    #[diesel(sql_type = Numeric)]
    #[schema(value_type = String)]
    pub total_price: BigDecimal,
}
report_row!(CompletedPayment, reports::COMPLETED_PAYMENTS);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct OrderWithShipment {
    #[diesel(sql_type = Integer)]
    pub order_id: i32,
    #[diesel(sql_type = Numeric)]
    #[schema(value_type = String)]
    pub total_price: BigDecimal,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub tracking_number: Option<String>,
}
report_row!(OrderWithShipment, reports::ORDERS_WITH_SHIPMENTS);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct PaymentWithShipment {
    #[diesel(sql_type = Integer)]
    pub payment_id: i32,
    #[diesel(sql_type = Integer)]
    pub order_id: i32,
    #[diesel(sql_type = Varchar)]
    pub payment_method: String,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub tracking_number: Option<String>,
}
report_row!(PaymentWithShipment, reports::PAYMENTS_WITH_SHIPMENTS);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct ProductInventoryStatus {
    #[diesel(sql_type = Integer)]
    pub product_id: i32,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub product_name: Option<String>,
    #[diesel(sql_type = Nullable<Numeric>)]
    #[schema(value_type = Option<String>)]
    pub price: Option<BigDecimal>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub stock: Option<i32>,
}
report_row!(ProductInventoryStatus, reports::PRODUCTS_WITH_INVENTORY_STATUS);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct OrderWithPaymentStatus {
    #[diesel(sql_type = Integer)]
    pub order_id: i32,
    #[diesel(sql_type = Numeric)]
    #[schema(value_type = String)]
    pub total_price: BigDecimal,
    #[diesel(sql_type = Nullable<Varchar>)]
    pub payment_status: Option<String>,
}
report_row!(OrderWithPaymentStatus, reports::ORDERS_WITH_PAYMENT_STATUS);

#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName, ToSchema)]
pub struct InventoryWithSupplier {
    #[diesel(sql_type = Integer)]
    pub inventory_id: i32,
    #[diesel(sql_type = Integer)]
    pub stock: i32,
    #[diesel(sql_type = Integer)]
    pub product_id: i32,
    #[diesel(sql_type = Varchar)]
    pub supplier_name: String,
    #[diesel(sql_type = Varchar)]
    pub contact: String,
}
report_row!(InventoryWithSupplier, reports::INVENTORY_WITH_SUPPLIERS);
