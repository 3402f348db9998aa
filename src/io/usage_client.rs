pub mod client;
pub mod dtos;

pub use client::{ApiClient, decode};
pub use dtos::{
    AppUsage, AppUsageReport, ServiceMonthlyReport, ServiceUsage, ServiceUsageReport,
    ServiceYearlyReport,
};
