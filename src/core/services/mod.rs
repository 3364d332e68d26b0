pub mod export_service;
pub mod summary_service;

pub use export_service::{ExportService, CSV_HEADER};
pub use summary_service::{CategoryTotal, MonthlySummary, SummaryService};
