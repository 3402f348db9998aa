use std::time::Duration;

use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::error::Error;
use crate::prelude::*;
use crate::report::Report;
use crate::session::ApiTarget;

pub const APP_USAGES_PATH: &str = "/system_report/app_usages";
pub const SERVICE_USAGES_PATH: &str = "/system_report/service_usages";

/// One-shot client for the accounting service.
pub struct ApiClient {
    agent: Agent,
    target: ApiTarget,
}

impl ApiClient {
    pub fn new(target: ApiTarget, timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            // Only a plain 200 counts, so redirects are answers too, not hops.
            .max_redirects(0)
            // Statuses are ours to judge, see below.
            .http_status_as_error(false)
            .build();

        ApiClient {
            agent: config.into(),
            target,
        }
    }

    /// Makes a single GET for the report `R` and decodes it.
    ///
    /// Anything but a 200 fails before the body is touched.
    pub fn fetch<R: Report>(&self) -> AppResult<R> {
        let url = format!("{}{}", self.target.base_url, R::PATH);

        info!(%url, "fetching usage report");

        let mut response = self
            .agent
            .get(&url)
            .header("Authorization", self.target.authorization.as_str())
            .call()
            .map_err(|e| Error::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();

        if status != 200 {
            return Err(Error::unexpected_status(status, url).into());
        }

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Error::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        debug!(bytes = body.len(), "received usage report");

        decode(&body)
    }
}

/// Strict decode, no field is filled in for a body that lacks it.
pub fn decode<T: DeserializeOwned>(body: &str) -> AppResult<T> {
    let decoded = serde_json::from_str(body).map_err(|source| Error::Decode { source })?;

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::usage_client::{AppUsageReport, ServiceUsageReport};

    #[test]
    fn decodes_app_report_without_months_on_yearly_entries() {
        let body = r#"{
            "report_time": "2023-01-01",
            "monthly_reports": [{"year": 2023, "month": 1, "average_app_instances": 2,
                "maximum_app_instances": 4, "app_instance_hours": 50}],
            "yearly_reports": [{"year": 2022, "average_app_instances": 1.5,
                "maximum_app_instances": 3, "app_instance_hours": 1000}]
        }"#;

        let report: AppUsageReport = decode(body).unwrap();

        assert_eq!(report.report_time, "2023-01-01");
        assert_eq!(report.monthly[0].month, Some(1));
        assert_eq!(report.yearly[0].month, None);
        assert_eq!(report.yearly[0].average, 1.5);
    }

    #[test]
    fn decodes_flattened_yearly_service_entries() {
        let body = r#"{
            "report_time": "2023-01-01",
            "monthly_service_reports": [{"service_name": "postgres", "service_guid": "g-1",
                "usages": [{"year": 2023, "month": 2, "average_instances": 1,
                    "maximum_instances": 1, "duration_in_hours": 672}]}],
            "yearly_service_report": [{"service_name": "postgres", "year": 2022,
                "average_instances": 1, "maximum_instances": 2, "duration_in_hours": 8760}]
        }"#;

        let report: ServiceUsageReport = decode(body).unwrap();

        assert_eq!(report.monthly[0].service_guid.as_deref(), Some("g-1"));
        assert_eq!(report.monthly[0].usages[0].hours, 672.0);
        assert_eq!(report.yearly[0].service_name, "postgres");
        assert_eq!(report.yearly[0].service_guid, None);
    }

    #[test]
    fn rejects_string_where_number_belongs() {
        let body = r#"{"report_time": "t", "monthly_reports": [],
            "yearly_reports": [{"year": 2022, "average_app_instances": "1.5",
                "maximum_app_instances": 3, "app_instance_hours": 1000}]}"#;

        let error = decode::<AppUsageReport>(body).expect_err("type mismatch");

        assert!(error.to_string().contains("decode"));
    }

    #[test]
    fn rejects_missing_sections() {
        let body = r#"{"report_time": "t", "monthly_reports": []}"#;

        assert!(decode::<AppUsageReport>(body).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(decode::<AppUsageReport>("{not json").is_err());
    }

    #[test]
    fn ignores_fields_it_does_not_render() {
        let body = r#"{"report_time": "t", "monthly_service_reports": [{"service_name": "s",
            "plans": [], "usages": []}], "yearly_service_report": []}"#;

        assert!(decode::<ServiceUsageReport>(body).is_ok());
    }
}
