use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{max_chars, Entity, Validate};
use crate::domain::errors::DomainError;
use crate::schema::suppliers;

#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema,
)]
#[diesel(table_name = suppliers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Insertable, ToSchema)]
#[diesel(table_name = suppliers)]
pub struct NewSupplier {
    pub name: String,
    pub contact: String,
}

impl Entity for Supplier {
    type New = NewSupplier;
    const NAME: &'static str = "Supplier";
}

impl Validate for NewSupplier {
    fn validate(&self) -> Result<(), DomainError> {
        max_chars("name", &self.name, 100)?;
        max_chars("contact", &self.contact, 100)
    }
}
