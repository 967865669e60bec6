use super::errors::DomainError;

pub const DEFAULT_LIMIT: i64 = 100;

/// Offset/limit window over a table, ordered by id ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(skip: i64, limit: i64) -> Result<Self, DomainError> {
        if skip < 0 {
            return Err(DomainError::InvalidInput(format!(
                "skip must be non-negative, got {skip}"
            )));
        }
        if limit < 0 {
            return Err(DomainError::InvalidInput(format!(
                "limit must be non-negative, got {limit}"
            )));
        }
        Ok(Self { skip, limit })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
