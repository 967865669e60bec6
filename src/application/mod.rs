pub mod entity_service;
pub mod fixtures;
