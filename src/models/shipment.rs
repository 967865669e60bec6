use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{max_chars, Entity, Validate};
use crate::domain::errors::DomainError;
use crate::schema::shipments;

#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema,
)]
#[diesel(table_name = shipments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Shipment {
    pub id: i32,
    pub order_id: i32,
    pub tracking_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Insertable, ToSchema)]
#[diesel(table_name = shipments)]
pub struct NewShipment {
    pub order_id: i32,
    pub tracking_number: String,
}

impl Entity for Shipment {
    type New = NewShipment;
    const NAME: &'static str = "Shipment";
}

impl Validate for NewShipment {
    fn validate(&self) -> Result<(), DomainError> {
        max_chars("tracking_number", &self.tracking_number, 100)
    }
}
