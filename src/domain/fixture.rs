use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{
    NewCustomer, NewInventory, NewItem, NewOrder, NewPayment, NewProduct, NewShipment,
    NewSupplier,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FixtureMode {
    /// Faker-style values drawn from a random generator.
    #[default]
    Random,
    /// Twenty fixed, numbered rows per table.
    Sequential,
}

/// Rows for all eight tables, inserted together or not at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureBatch {
    pub items: Vec<NewItem>,
    pub customers: Vec<NewCustomer>,
    pub products: Vec<NewProduct>,
    pub suppliers: Vec<NewSupplier>,
    pub inventory: Vec<NewInventory>,
    pub orders: Vec<NewOrder>,
    pub shipments: Vec<NewShipment>,
    pub payments: Vec<NewPayment>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct FixtureCounts {
    pub items: usize,
    pub customers: usize,
    pub products: usize,
    pub suppliers: usize,
    pub inventory: usize,
    pub orders: usize,
    pub shipments: usize,
    pub payments: usize,
}

impl FixtureBatch {
    pub fn counts(&self) -> FixtureCounts {
        FixtureCounts {
            items: self.items.len(),
            customers: self.customers.len(),
            products: self.products.len(),
            suppliers: self.suppliers.len(),
            inventory: self.inventory.len(),
            orders: self.orders.len(),
            shipments: self.shipments.len(),
            payments: self.payments.len(),
        }
    }
}

impl FixtureCounts {
    pub fn total(&self) -> usize {
        self.items
            + self.customers
            + self.products
            + self.suppliers
            + self.inventory
            + self.orders
            + self.shipments
            + self.payments
    }
}
