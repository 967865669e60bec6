use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{max_chars, Entity, Validate};
use crate::domain::errors::DomainError;
use crate::schema::customers;

#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema,
)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Insertable, ToSchema)]
#[diesel(table_name = customers)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

impl Entity for Customer {
    type New = NewCustomer;
    const NAME: &'static str = "Customer";
}

impl Validate for NewCustomer {
    fn validate(&self) -> Result<(), DomainError> {
        max_chars("name", &self.name, 50)?;
        max_chars("email", &self.email, 100)
    }
}
