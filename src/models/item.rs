use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{max_chars, Entity, Validate};
use crate::domain::errors::DomainError;
use crate::schema::items;

#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema,
)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Payload for both creating and replacing an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Insertable, ToSchema)]
#[diesel(table_name = items)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}

impl Entity for Item {
    type New = NewItem;
    const NAME: &'static str = "Item";
}

impl Validate for NewItem {
    fn validate(&self) -> Result<(), DomainError> {
        max_chars("name", &self.name, 50)?;
        if let Some(description) = &self.description {
            max_chars("description", description, 255)?;
        }
        Ok(())
    }
}
