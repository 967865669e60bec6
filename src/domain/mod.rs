pub mod errors;
pub mod fixture;
pub mod page;
pub mod ports;
pub mod reports;
