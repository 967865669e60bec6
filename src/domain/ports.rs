use super::errors::DomainError;
use super::fixture::{FixtureBatch, FixtureCounts};
use super::page::Page;
use crate::models::{Entity, Item, NewItem};

/// Create and read access shared by every stored entity.
pub trait EntityRepository<E: Entity>: Send + Sync + 'static {
    /// Inserts all payloads in one statement and returns the stored rows in
    /// insertion order.
    fn create_many(&self, new: Vec<E::New>) -> Result<Vec<E>, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<E>, DomainError>;
    fn list(&self, page: Page) -> Result<Vec<E>, DomainError>;
}

/// Items are the only entity that can change after creation.
pub trait ItemRepository: EntityRepository<Item> {
    fn update(&self, id: i32, changes: NewItem) -> Result<Option<Item>, DomainError>;
    /// Returns the row as it was before removal.
    fn delete(&self, id: i32) -> Result<Option<Item>, DomainError>;
}

pub trait FixtureStore: Send + Sync + 'static {
    /// Inserts the whole batch in a single transaction.
    fn insert_batch(&self, batch: FixtureBatch) -> Result<FixtureCounts, DomainError>;
}
