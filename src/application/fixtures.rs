//! Synthetic data for the demo tables.
//!
//! Batches are appended, never upserted; running the generator twice doubles
//! the rows. Foreign-key columns in random batches point anywhere in 1..=100,
//! so reports see both matched and dangling references.

use bigdecimal::BigDecimal;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::errors::DomainError;
use crate::domain::fixture::{FixtureBatch, FixtureCounts, FixtureMode};
use crate::domain::ports::FixtureStore;
use crate::models::{
    NewCustomer, NewInventory, NewItem, NewOrder, NewPayment, NewProduct, NewShipment,
    NewSupplier,
};

pub const PAYMENT_METHODS: [&str; 4] = ["Credit Card", "PayPal", "Bank Transfer", "Cash"];
pub const PAYMENT_STATUSES: [&str; 4] = ["Completed", "Pending", "Failed", "Refunded"];

pub const DEFAULT_COUNT: usize = 10;
pub const MAX_COUNT: usize = 1000;
pub const SEQUENTIAL_COUNT: usize = 20;

/// Upper bound for the random foreign-key columns.
const MAX_REFERENCE_ID: i32 = 100;

#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRequest {
    pub mode: FixtureMode,
    /// Rows per table for random batches.
    pub count: Option<usize>,
    /// Fixes the random generator for reproducible batches.
    pub seed: Option<u64>,
}

fn cents(value: i64) -> BigDecimal {
    BigDecimal::new(value.into(), 2)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn tracking_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let letters: String = (0..3).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect();
    format!("{letters}-{:05}", rng.gen_range(0..100_000))
}

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&str]) -> String {
    choices.choose(rng).copied().unwrap_or_default().to_string()
}

pub fn random_batch<R: Rng + ?Sized>(rng: &mut R, count: usize) -> FixtureBatch {
    let mut batch = FixtureBatch::default();
    for _ in 0..count {
        batch.items.push(NewItem {
            name: Word().fake_with_rng(rng),
            description: Some(Sentence(3..8).fake_with_rng(rng)),
        });
        batch.customers.push(NewCustomer {
            name: Name().fake_with_rng(rng),
            email: SafeEmail().fake_with_rng(rng),
        });
        batch.inventory.push(NewInventory {
            product_id: rng.gen_range(1..=MAX_REFERENCE_ID),
            stock: rng.gen_range(0..=500),
        });
        batch.products.push(NewProduct {
            name: capitalize(&Word().fake_with_rng::<String, _>(rng)),
            price: cents(rng.gen_range(0..10_000)),
        });
        batch.orders.push(NewOrder {
            customer_id: rng.gen_range(1..=MAX_REFERENCE_ID),
            total_price: cents(rng.gen_range(0..100_000)),
        });
        batch.payments.push(NewPayment {
            order_id: rng.gen_range(1..=MAX_REFERENCE_ID),
            payment_method: pick(rng, &PAYMENT_METHODS),
            payment_status: pick(rng, &PAYMENT_STATUSES),
        });
        batch.shipments.push(NewShipment {
            order_id: rng.gen_range(1..=MAX_REFERENCE_ID),
            tracking_number: tracking_number(rng),
        });
        batch.suppliers.push(NewSupplier {
            name: CompanyName().fake_with_rng(rng),
            contact: Name().fake_with_rng(rng),
        });
    }
    batch
}

/// Numbered rows whose ids line up across tables on a fresh database:
/// inventory `n` stocks product `n`, order `n` belongs to customer `n`.
pub fn sequential_batch() -> FixtureBatch {
    let n = SEQUENTIAL_COUNT as i64;
    let mut batch = FixtureBatch::default();
    for i in 0..n {
        let seq = i + 1;
        let id = i as i32 + 1;
        batch.items.push(NewItem {
            name: format!("Item {seq}"),
            description: Some(format!("Description for Item {seq}")),
        });
        batch.customers.push(NewCustomer {
            name: format!("Customer {seq}"),
            email: format!("customer{seq}@example.com"),
        });
        batch.products.push(NewProduct {
            name: format!("Product {seq}"),
            price: cents(1_000 + i * 250),
        });
        batch.suppliers.push(NewSupplier {
            name: format!("Supplier {seq}"),
            contact: format!("contact{seq}@supplier.com"),
        });
        batch.inventory.push(NewInventory {
            product_id: id,
            stock: 50 + i as i32 * 5,
        });
        batch.orders.push(NewOrder {
            customer_id: (i % n) as i32 + 1,
            total_price: cents(10_000 + i * 1_000),
        });
        batch.shipments.push(NewShipment {
            order_id: (i % n) as i32 + 1,
            tracking_number: format!("TRACK{}", i + 1000),
        });
        batch.payments.push(NewPayment {
            order_id: (i % n) as i32 + 1,
            payment_method: if i % 2 == 0 { "Credit Card" } else { "PayPal" }.to_string(),
            payment_status: if i % 3 != 0 { "Completed" } else { "Pending" }.to_string(),
        });
    }
    batch
}

pub struct FixtureService<S> {
    store: S,
}

impl<S: FixtureStore> FixtureService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn generate(&self, request: FixtureRequest) -> Result<FixtureCounts, DomainError> {
        let batch = match request.mode {
            FixtureMode::Random => {
                let count = request.count.unwrap_or(DEFAULT_COUNT);
                if !(1..=MAX_COUNT).contains(&count) {
                    return Err(DomainError::InvalidInput(format!(
                        "count must be between 1 and {MAX_COUNT}, got {count}"
                    )));
                }
                let mut rng = match request.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                random_batch(&mut rng, count)
            }
            FixtureMode::Sequential => sequential_batch(),
        };

        match self.store.insert_batch(batch) {
            Ok(counts) => {
                log::info!(
                    "generated {} fixture rows ({:?} mode)",
                    counts.total(),
                    request.mode
                );
                Ok(counts)
            }
            Err(e) => {
                log::error!("fixture batch rolled back: {e}");
                Err(e)
            }
        }
    }
}
