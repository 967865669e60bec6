use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Entity, Validate};
use crate::schema::inventory;

#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema,
)]
#[diesel(table_name = inventory)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Inventory {
    pub id: i32,
    pub product_id: i32,
    pub stock: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Insertable, ToSchema)]
#[diesel(table_name = inventory)]
pub struct NewInventory {
    pub product_id: i32,
    pub stock: i32,
}

impl Entity for Inventory {
    type New = NewInventory;
    const NAME: &'static str = "Inventory";
}

impl Validate for NewInventory {}
