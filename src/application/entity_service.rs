use crate::domain::errors::DomainError;
use crate::domain::page::Page;
use crate::domain::ports::{EntityRepository, ItemRepository};
use crate::models::{Entity, Item, NewItem, Validate};

pub struct EntityService<R> {
    repo: R,
}

impl<R> EntityService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create<E: Entity>(&self, new: Vec<E::New>) -> Result<Vec<E>, DomainError>
    where
        R: EntityRepository<E>,
    {
        new.iter().try_for_each(Validate::validate)?;
        self.repo.create_many(new)
    }

    pub fn get<E: Entity>(&self, id: i32) -> Result<E, DomainError>
    where
        R: EntityRepository<E>,
    {
        self.repo
            .find_by_id(id)?
            .ok_or(DomainError::NotFound(E::NAME))
    }

    pub fn list<E: Entity>(&self, skip: i64, limit: i64) -> Result<Vec<E>, DomainError>
    where
        R: EntityRepository<E>,
    {
        self.repo.list(Page::new(skip, limit)?)
    }
}

impl<R: ItemRepository> EntityService<R> {
    pub fn update_item(&self, id: i32, changes: NewItem) -> Result<Item, DomainError> {
        changes.validate()?;
        self.repo
            .update(id, changes)?
            .ok_or(DomainError::NotFound(Item::NAME))
    }

    pub fn delete_item(&self, id: i32) -> Result<Item, DomainError> {
        self.repo
            .delete(id)?
            .ok_or(DomainError::NotFound(Item::NAME))
    }
}
