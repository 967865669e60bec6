use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Entity, Validate};
use crate::schema::orders;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub id: i32,
    /// Not enforced as a foreign key.
    pub customer_id: i32,
    #[schema(value_type = String, example = "120.00")]
    pub total_price: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Insertable, ToSchema)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub customer_id: i32,
    /// Decimal price, e.g. "120.00"
    #[schema(value_type = String, example = "120.00")]
    pub total_price: BigDecimal,
}

impl Entity for Order {
    type New = NewOrder;
    const NAME: &'static str = "Order";
}

impl Validate for NewOrder {}
