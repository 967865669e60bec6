pub mod report_queries;
pub mod repository;

pub use report_queries::DieselReportQueries;
pub use repository::DieselRepository;
