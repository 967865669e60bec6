use diesel::pg::PgConnection;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::models::reports::ReportRow;

/// Runs the join catalog against the pool. Each call checks out one
/// connection and issues one statement.
#[derive(Clone)]
pub struct DieselReportQueries {
    pool: DbPool,
}

impl DieselReportQueries {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn run<R: ReportRow>(&self) -> Result<Vec<R>, DomainError> {
        let mut pooled = self.pool.get()?;
        let conn: &mut PgConnection = &mut pooled;
        let rows = R::load(conn)?;
        log::debug!("report {} returned {} rows", R::spec().name, rows.len());
        Ok(rows)
    }
}
