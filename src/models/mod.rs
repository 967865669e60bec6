pub mod customer;
pub mod inventory;
pub mod item;
pub mod order;
pub mod payment;
pub mod product;
pub mod reports;
pub mod shipment;
pub mod supplier;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::DomainError;

pub use customer::{Customer, NewCustomer};
pub use inventory::{Inventory, NewInventory};
pub use item::{Item, NewItem};
pub use order::{NewOrder, Order};
pub use payment::{NewPayment, Payment};
pub use product::{NewProduct, Product};
pub use shipment::{NewShipment, Shipment};
pub use supplier::{NewSupplier, Supplier};

/// A stored row with a system-assigned integer id and a matching creation
/// payload.
pub trait Entity: Serialize + Send + 'static {
    type New: DeserializeOwned + Validate + Send + 'static;

    /// Human-readable name used in "not found" messages.
    const NAME: &'static str;
}

/// Checks a payload against the column limits of its table before it is
/// written. Payloads without text columns keep the default.
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

/// `VARCHAR(n)` limits count characters, not bytes.
pub(crate) fn max_chars(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len > max {
        return Err(DomainError::InvalidInput(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}
