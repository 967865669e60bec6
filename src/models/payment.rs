use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{max_chars, Entity, Validate};
use crate::domain::errors::DomainError;
use crate::schema::payments;

#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema,
)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Payment {
    pub id: i32,
    pub order_id: i32,
    pub payment_method: String,
    pub payment_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Insertable, ToSchema)]
#[diesel(table_name = payments)]
pub struct NewPayment {
    pub order_id: i32,
    pub payment_method: String,
    pub payment_status: String,
}

impl Entity for Payment {
    type New = NewPayment;
    const NAME: &'static str = "Payment";
}

impl Validate for NewPayment {
    fn validate(&self) -> Result<(), DomainError> {
        max_chars("payment_method", &self.payment_method, 50)?;
        max_chars("payment_status", &self.payment_status, 50)
    }
}
