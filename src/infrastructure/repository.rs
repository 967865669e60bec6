use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::fixture::{FixtureBatch, FixtureCounts};
use crate::domain::page::Page;
use crate::domain::ports::{EntityRepository, FixtureStore, ItemRepository};
use crate::models::{
    Customer, Entity, Inventory, Item, NewItem, Order, Payment, Product, Shipment, Supplier,
};
use crate::schema::{customers, inventory, items, orders, payments, products, shipments, suppliers};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

macro_rules! entity_repository {
    ($entity:ty, $table:ident) => {
        impl EntityRepository<$entity> for DieselRepository {
            fn create_many(
                &self,
                new: Vec<<$entity as Entity>::New>,
            ) -> Result<Vec<$entity>, DomainError> {
                if new.is_empty() {
                    return Ok(Vec::new());
                }
                let mut conn = self.pool.get()?;
                let created = diesel::insert_into($table::table)
                    .values(&new)
                    .returning(<$entity>::as_returning())
                    .get_results(&mut conn)?;
                Ok(created)
            }

            fn find_by_id(&self, id: i32) -> Result<Option<$entity>, DomainError> {
                let mut conn = self.pool.get()?;
                let row = $table::table
                    .find(id)
                    .select(<$entity>::as_select())
                    .first(&mut conn)
                    .optional()?;
                Ok(row)
            }

            fn list(&self, page: Page) -> Result<Vec<$entity>, DomainError> {
                let mut conn = self.pool.get()?;
                let rows = $table::table
                    .select(<$entity>::as_select())
                    .order($table::id.asc())
                    .offset(page.skip)
                    .limit(page.limit)
                    .load(&mut conn)?;
                Ok(rows)
            }
        }
    };
}

entity_repository!(Item, items);
entity_repository!(Customer, customers);
entity_repository!(Order, orders);
entity_repository!(Product, products);
entity_repository!(Supplier, suppliers);
entity_repository!(Inventory, inventory);
entity_repository!(Shipment, shipments);
entity_repository!(Payment, payments);

impl ItemRepository for DieselRepository {
    fn update(&self, id: i32, changes: NewItem) -> Result<Option<Item>, DomainError> {
        let mut conn = self.pool.get()?;
        let updated = diesel::update(items::table.find(id))
            .set((
                items::name.eq(changes.name),
                items::description.eq(changes.description),
            ))
            .returning(Item::as_returning())
            .get_result(&mut conn)
            .optional()?;
        Ok(updated)
    }

    fn delete(&self, id: i32) -> Result<Option<Item>, DomainError> {
        let mut conn = self.pool.get()?;
        let deleted = diesel::delete(items::table.find(id))
            .returning(Item::as_returning())
            .get_result(&mut conn)
            .optional()?;
        Ok(deleted)
    }
}

impl FixtureStore for DieselRepository {
    fn insert_batch(&self, batch: FixtureBatch) -> Result<FixtureCounts, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            Ok(FixtureCounts {
                items: diesel::insert_into(items::table)
                    .values(&batch.items)
                    .execute(conn)?,
                customers: diesel::insert_into(customers::table)
                    .values(&batch.customers)
                    .execute(conn)?,
                products: diesel::insert_into(products::table)
                    .values(&batch.products)
                    .execute(conn)?,
                suppliers: diesel::insert_into(suppliers::table)
                    .values(&batch.suppliers)
                    .execute(conn)?,
                inventory: diesel::insert_into(inventory::table)
                    .values(&batch.inventory)
                    .execute(conn)?,
                orders: diesel::insert_into(orders::table)
                    .values(&batch.orders)
                    .execute(conn)?,
                shipments: diesel::insert_into(shipments::table)
                    .values(&batch.shipments)
                    .execute(conn)?,
                payments: diesel::insert_into(payments::table)
                    .values(&batch.payments)
                    .execute(conn)?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use diesel::prelude::*;

    use super::DieselRepository;
    use crate::domain::errors::DomainError;
    use crate::domain::fixture::FixtureBatch;
    use crate::domain::page::Page;
    use crate::domain::ports::{EntityRepository, FixtureStore, ItemRepository};
    use crate::models::{Item, NewItem, NewOrder, NewPayment, Order, Payment};
    use crate::schema::items;
    use crate::test_support::setup_db;

    fn new_item(name: &str, description: Option<&str>) -> NewItem {
        NewItem {
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn created_items_read_back_equal_to_input() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool);

        let input = vec![new_item("Widget", Some("A widget")), new_item("Gadget", None)];
        let created: Vec<Item> = repo.create_many(input.clone()).expect("create failed");
        assert_eq!(created.len(), 2);

        for (item, expected) in created.iter().zip(&input) {
            let found: Item = repo
                .find_by_id(item.id)
                .expect("find failed")
                .expect("item should exist");
            assert_eq!(found.name, expected.name);
            assert_eq!(found.description, expected.description);
        }
    }

    #[tokio::test]
    async fn create_many_with_empty_batch_is_a_no_op() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool);

        let created: Vec<Item> = repo.create_many(vec![]).expect("create failed");
        assert!(created.is_empty());
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool);

        let result: Option<Item> = repo.find_by_id(999_999).expect("find should not error");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn list_orders_by_id_and_applies_skip_and_limit() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool);

        let created: Vec<Item> = repo
            .create_many(
                (1..=5)
                    .map(|i| new_item(&format!("Item {i}"), None))
                    .collect::<Vec<_>>(),
            )
            .expect("create failed");

        let page: Vec<Item> = repo.list(Page::new(1, 3).unwrap()).expect("list failed");
        let ids: Vec<i32> = page.iter().map(|i| i.id).collect();
        let expected: Vec<i32> = created[1..4].iter().map(|i| i.id).collect();
        assert_eq!(ids, expected);

        let tail: Vec<Item> = repo.list(Page::new(4, 10).unwrap()).expect("list failed");
        assert_eq!(tail.len(), 1);

        let empty: Vec<Item> = repo.list(Page::new(0, 0).unwrap()).expect("list failed");
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn update_replaces_name_and_description_only() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool);

        let created: Vec<Item> = repo
            .create_many(vec![new_item("Widget", Some("A widget"))])
            .expect("create failed");
        let id = created[0].id;

        let updated = repo
            .update(id, new_item("Sprocket", None))
            .expect("update failed")
            .expect("item should exist");

        assert_eq!(
            updated,
            Item {
                id,
                name: "Sprocket".to_string(),
                description: None,
            }
        );
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool);

        let result = repo
            .update(999_999, new_item("Ghost", None))
            .expect("update should not error");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_returns_the_removed_row_and_it_is_gone() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool);

        let created: Vec<Item> = repo
            .create_many(vec![new_item("Widget", Some("A widget"))])
            .expect("create failed");
        let id = created[0].id;

        let deleted = repo.delete(id).expect("delete failed");
        assert_eq!(deleted.as_ref(), Some(&created[0]));

        let found: Option<Item> = repo.find_by_id(id).expect("find failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn delete_unknown_id_removes_nothing() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool.clone());

        let _: Vec<Item> = repo
            .create_many(vec![new_item("Keep me", None)])
            .expect("create failed");

        assert!(repo.delete(999_999).expect("delete failed").is_none());

        let mut conn = pool.get().expect("Failed to get connection");
        let remaining: i64 = items::table.count().get_result(&mut conn).expect("count failed");
        assert_eq!(remaining, 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool);

        let first: Vec<Item> = repo
            .create_many(vec![new_item("First", None)])
            .expect("create failed");
        repo.delete(first[0].id).expect("delete failed");

        let second: Vec<Item> = repo
            .create_many(vec![new_item("Second", None)])
            .expect("create failed");
        assert!(second[0].id > first[0].id);
    }

    #[tokio::test]
    async fn commerce_entities_round_trip() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool);

        let orders: Vec<Order> = repo
            .create_many(vec![NewOrder {
                customer_id: 7,
                total_price: BigDecimal::from_str("120.50").unwrap(),
            }])
            .expect("create order failed");
        let payments: Vec<Payment> = repo
            .create_many(vec![NewPayment {
                order_id: orders[0].id,
                payment_method: "Cash".to_string(),
                payment_status: "Pending".to_string(),
            }])
            .expect("create payment failed");

        let order: Order = repo
            .find_by_id(orders[0].id)
            .expect("find failed")
            .expect("order should exist");
        assert_eq!(order.customer_id, 7);
        assert_eq!(order.total_price, BigDecimal::from_str("120.50").unwrap());

        let listed: Vec<Payment> = repo.list(Page::default()).expect("list failed");
        assert_eq!(listed, payments);
    }

    #[tokio::test]
    async fn insert_batch_counts_every_table() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool);

        let batch = FixtureBatch {
            items: vec![new_item("a", None), new_item("b", None)],
            orders: vec![NewOrder {
                customer_id: 1,
                total_price: BigDecimal::from(10),
            }],
            ..FixtureBatch::default()
        };

        let counts = repo.insert_batch(batch).expect("insert failed");
        assert_eq!(counts.items, 2);
        assert_eq!(counts.orders, 1);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn insert_batch_rolls_back_on_failure() {
        let (_container, pool) = setup_db().await;
        let repo = DieselRepository::new(pool);

        // The name column is VARCHAR(50); the second table insert fails.
        let batch = FixtureBatch {
            items: vec![new_item("kept only if the batch commits", None)],
            customers: vec![crate::models::NewCustomer {
                name: "x".repeat(80),
                email: "too-long@example.com".to_string(),
            }],
            ..FixtureBatch::default()
        };

        let err = repo.insert_batch(batch).expect_err("insert should fail");
        assert!(matches!(err, DomainError::Internal(_)));

        let items: Vec<Item> = repo.list(Page::default()).expect("list failed");
        assert!(items.is_empty());
    }
}
