//! Print report: fixed-row pagination plus the report header

pub mod header;
pub mod paginator;

pub use header::{net_meal, Report, ReportHeader, ReportLayout};
pub use paginator::{paginate, Page, PageCapacity, RowPair};
