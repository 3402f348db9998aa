pub mod rows;
pub mod table;

use std::io::Write;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cli::OutputFormat;
use crate::error::Error;
use crate::io::usage_client::client::{APP_USAGES_PATH, SERVICE_USAGES_PATH};
use crate::io::usage_client::{AppUsageReport, ServiceUsageReport};
use crate::prelude::*;

use rows::RenderRow;
use table::Table;

/// A report kind the accounting service can hand out.
pub trait Report: Serialize + DeserializeOwned {
    /// Resource path under the accounting service root.
    const PATH: &'static str;

    /// Label in the table's Type column.
    const KIND: &'static str;

    const HEADERS: &'static [&'static str];

    fn report_time(&self) -> &str;

    /// Flattens the report into table rows, in display order.
    fn rows(&self) -> Vec<RenderRow>;
}

impl Report for AppUsageReport {
    const PATH: &'static str = APP_USAGES_PATH;
    const KIND: &'static str = "AI";
    const HEADERS: &'static [&'static str] =
        &["Type", "Year", "Month", "Average", "Maximum", "Hours"];

    fn report_time(&self) -> &str {
        &self.report_time
    }

    // Yearly first, then monthly.
    fn rows(&self) -> Vec<RenderRow> {
        let yearly = self
            .yearly
            .iter()
            .map(|usage| RenderRow::yearly(Self::KIND, None, usage));

        let monthly = self
            .monthly
            .iter()
            .map(|usage| RenderRow::monthly(Self::KIND, None, usage));

        yearly.chain(monthly).collect()
    }
}

impl Report for ServiceUsageReport {
    const PATH: &'static str = SERVICE_USAGES_PATH;
    const KIND: &'static str = "Service";
    const HEADERS: &'static [&'static str] =
        &["Type", "Name", "Year", "Month", "Average", "Maximum", "Hours"];

    fn report_time(&self) -> &str {
        &self.report_time
    }

    // Monthly first, then yearly. The opposite of the application report.
    fn rows(&self) -> Vec<RenderRow> {
        let monthly = self.monthly.iter().flat_map(|service| {
            service
                .usages
                .iter()
                .map(|usage| RenderRow::monthly(Self::KIND, Some(service.service_name.as_str()), usage))
        });

        let yearly = self
            .yearly
            .iter()
            .map(|entry| RenderRow::yearly(Self::KIND, Some(entry.service_name.as_str()), entry));

        monthly.chain(yearly).collect()
    }
}

/// Writes the report to `out` in the requested format.
///
/// JSON mirrors the decoded report. The table flattens it and ends with the
/// report date.
pub fn render<R: Report>(report: &R, format: OutputFormat, out: &mut impl Write) -> AppResult<()> {
    match format {
        OutputFormat::Json => render_json(report, out),
        OutputFormat::Table => render_table(report, out),
    }
}

fn render_json<R: Report>(report: &R, out: &mut impl Write) -> AppResult<()> {
    serde_json::to_writer(&mut *out, report).map_err(|e| Error::Render(e.to_string()))?;
    writeln!(out).map_err(|e| Error::Render(e.to_string()))?;

    Ok(())
}

fn render_table<R: Report>(report: &R, out: &mut impl Write) -> AppResult<()> {
    let mut table = Table::new(R::HEADERS);

    for row in report.rows() {
        table.add_row(row.into_cells());
    }

    table.set_caption(format!("Report Date: {}", report.report_time()));

    table.write_to(out).map_err(|e| Error::Render(e.to_string()))?;

    Ok(())
}
