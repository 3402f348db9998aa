use std::io::Write;

use crate::cli::{ReportConfig, Selection};
use crate::io::usage_client::{ApiClient, AppUsageReport, ServiceUsageReport};
use crate::prelude::*;
use crate::report::{self, Report};
use crate::session::{self, SessionProvider};

/// Resolves the session, fetches the selected report and renders it into `out`.
///
/// Nothing is written unless the whole report was fetched and decoded.
pub fn execute(
    config: &ReportConfig,
    session: &dyn SessionProvider,
    out: &mut impl Write,
) -> AppResult<()> {
    let target = session::resolve(session)?;
    let client = ApiClient::new(target, config.timeout);

    debug!(?config, "dispatching");

    match config.selection {
        // accounting-report [--applications]
        Selection::Applications => fetch_and_render::<AppUsageReport>(&client, config, out),

        // accounting-report --services
        Selection::Services => fetch_and_render::<ServiceUsageReport>(&client, config, out),
    }
}

fn fetch_and_render<R: Report>(
    client: &ApiClient,
    config: &ReportConfig,
    out: &mut impl Write,
) -> AppResult<()> {
    let report: R = client.fetch()?;

    report::render(&report, config.format, out)
}
