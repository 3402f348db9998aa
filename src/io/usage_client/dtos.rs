use serde::{Deserialize, Serialize};

// Shapes of the app-usage service's system reports.
//
// Field names follow the wire. Nothing is defaulted except `month` and `service_guid`,
// so a string where a number belongs fails the whole decode.
//
// `month` is missing on yearly aggregates and stays missing on the way back out.

/// Response for `GET /system_report/app_usages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUsageReport {
    /// Generation time of the snapshot, as the server formats it.
    pub report_time: String,

    #[serde(rename = "monthly_reports")]
    pub monthly: Vec<AppUsage>,

    #[serde(rename = "yearly_reports")]
    pub yearly: Vec<AppUsage>,
}

/// Application instance usage for one month, or one year when `month` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUsage {
    pub year: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    #[serde(rename = "average_app_instances")]
    pub average: f64,

    #[serde(rename = "maximum_app_instances")]
    pub maximum: f64,

    #[serde(rename = "app_instance_hours")]
    pub hours: f64,
}

/// Response for `GET /system_report/service_usages`.
///
/// Monthly figures are nested under each service, yearly ones are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceUsageReport {
    pub report_time: String,

    #[serde(rename = "monthly_service_reports")]
    pub monthly: Vec<ServiceMonthlyReport>,

    #[serde(rename = "yearly_service_report")]
    pub yearly: Vec<ServiceYearlyReport>,
}

/// One service with its per-month usages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMonthlyReport {
    pub service_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_guid: Option<String>,

    pub usages: Vec<ServiceUsage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceUsage {
    pub year: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    #[serde(rename = "average_instances")]
    pub average: f64,

    #[serde(rename = "maximum_instances")]
    pub maximum: f64,

    #[serde(rename = "duration_in_hours")]
    pub hours: f64,
}

/// One service's usage for a whole year, with the service name inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceYearlyReport {
    pub service_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_guid: Option<String>,

    pub year: i32,

    #[serde(rename = "average_instances")]
    pub average: f64,

    #[serde(rename = "maximum_instances")]
    pub maximum: f64,

    #[serde(rename = "duration_in_hours")]
    pub hours: f64,
}
