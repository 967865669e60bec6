use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{max_chars, Entity, Validate};
use crate::domain::errors::DomainError;
use crate::schema::products;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, example = "12.50")]
    pub price: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Insertable, ToSchema)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub name: String,
    #[schema(value_type = String, example = "12.50")]
    pub price: BigDecimal,
}

impl Entity for Product {
    type New = NewProduct;
    const NAME: &'static str = "Product";
}

impl Validate for NewProduct {
    fn validate(&self) -> Result<(), DomainError> {
        max_chars("name", &self.name, 100)
    }
}
