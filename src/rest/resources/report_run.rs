//! Reporting Report Run resource implementation.
//!
//! A [`ReportRun`] is one execution of a financial report. Creating a run
//! starts the report; the result file is attached once `status` is
//! `succeeded`.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::RestResource;
//! use stripe_api::rest::resources::{ReportRun, ReportRunParameters, ReportRunParams};
//!
//! let params = ReportRunParams {
//!     report_type: Some("activity.summary.1".to_string()),
//!     parameters: Some(ReportRunParameters {
//!         connected_account: Some("acct_123".to_string()),
//!         ..Default::default()
//!     }),
//! };
//!
//! let run = ReportRun::create(&client, &params).await?;
//!
//! // Later
//! let run = ReportRun::get(&client, &run.id, &()).await?;
//! if let Some(file) = run.result.as_ref() {
//!     println!("download {}", file.url.as_deref().unwrap_or_default());
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::resources::common::File;
use crate::rest::{
    Identifiable, ListFilters, ListIter, ListParams, RangeQuery, ResourceOperation, ResourcePath,
    RestResource,
};

/// Progress of a report run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReportRunStatus {
    /// The report is being generated.
    Pending,
    /// The result file is ready.
    Succeeded,
    /// The report failed; see `error`.
    Failed,
    /// A status this version of the SDK does not know.
    #[serde(other)]
    Unknown,
}

/// One execution of a report.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ReportRun {
    /// Unique identifier, e.g. `frr_123`.
    pub id: String,

    /// Always `"reporting.report_run"`.
    pub object: String,

    /// When the run was created.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,

    /// Why the run failed.
    pub error: Option<String>,

    /// Whether the report ran on live data.
    pub livemode: bool,

    /// The parameters the report ran with.
    pub parameters: ReportRunParameters,

    /// The report that was run, e.g. `activity.summary.1`.
    pub report_type: String,

    /// The report output, once the run succeeded.
    pub result: Option<File>,

    /// Progress of the run.
    pub status: Option<ReportRunStatus>,

    /// When the run succeeded.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub succeeded_at: Option<DateTime<Utc>>,
}

impl ReportRun {
    /// Returns `true` once the run has succeeded or failed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status,
            Some(ReportRunStatus::Succeeded | ReportRunStatus::Failed)
        )
    }
}

/// Parameters of a report.
///
/// Used both in responses and when creating a run. Timestamps are Unix
/// seconds.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ReportRunParameters {
    /// Columns to include.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,

    /// Restrict the report to this connected account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_account: Option<String>,

    /// Restrict the report to this currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// End of the reported interval (exclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_end: Option<i64>,

    /// Start of the reported interval (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_start: Option<i64>,

    /// Restrict the report to this payout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout: Option<String>,

    /// Restrict the report to this reporting category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_category: Option<String>,

    /// Time zone used for dates in the report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Identifiable for ReportRun {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RestResource for ReportRun {
    type GetParams = ();
    type ListParams = ReportRunListParams;
    type CreateParams = ReportRunParams;

    const NAME: &'static str = "ReportRun";
    const OBJECT: &'static str = "reporting.report_run";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["id"],
            "reporting/report_runs/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &[],
            "reporting/report_runs",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "reporting/report_runs",
        ),
    ];
}

/// Iterator over report runs.
pub type ReportRunIter<'a> = ListIter<'a, ReportRun>;

/// Parameters for creating a report run.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ReportRunParams {
    /// Parameters of the report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ReportRunParameters>,

    /// The report to run, e.g. `activity.summary.1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
}

/// Parameters for listing report runs.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ReportRunListParams {
    /// Paging and expansion.
    #[serde(flatten)]
    pub list: ListParams,

    /// Filter on creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<RangeQuery>,
}

impl ListFilters for ReportRunListParams {
    fn list_params(&self) -> &ListParams {
        &self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::to_form_values;
    use crate::rest::get_path;

    #[test]
    fn test_report_run_deserialization() {
        let json = r#"{
            "id": "frr_123",
            "object": "reporting.report_run",
            "created": 1559751590,
            "error": null,
            "livemode": true,
            "parameters": {"interval_end": 1559347200, "interval_start": 1556668800, "columns": ["category", "net"]},
            "report_type": "activity.summary.1",
            "result": {"id": "file_123", "object": "file", "purpose": "finance_report_run", "size": 2048, "type": "csv", "url": "https://files.example.com/file_123"},
            "status": "succeeded",
            "succeeded_at": 1559751650
        }"#;

        let run: ReportRun = serde_json::from_str(json).unwrap();

        assert_eq!(run.id, "frr_123");
        assert_eq!(run.object, ReportRun::OBJECT);
        assert_eq!(run.report_type, "activity.summary.1");
        assert_eq!(run.parameters.interval_start, Some(1_556_668_800));
        assert_eq!(run.parameters.columns, vec!["category", "net"]);
        assert_eq!(run.result.as_ref().unwrap().file_type.as_deref(), Some("csv"));
        assert_eq!(run.status, Some(ReportRunStatus::Succeeded));
        assert!(run.is_finished());
    }

    #[test]
    fn test_pending_run_is_not_finished() {
        let run: ReportRun =
            serde_json::from_str(r#"{"id": "frr_1", "status": "pending", "result": null}"#)
                .unwrap();
        assert!(!run.is_finished());
        assert!(run.result.is_none());
    }

    #[test]
    fn test_report_run_params_form_encoding() {
        let params = ReportRunParams {
            parameters: Some(ReportRunParameters {
                connected_account: Some("acct_123".to_string()),
                columns: vec!["category".to_string()],
                ..Default::default()
            }),
            report_type: Some("activity.summary.1".to_string()),
        };

        let form = to_form_values(&params).unwrap();
        assert_eq!(form.get("report_type"), Some("activity.summary.1"));
        assert_eq!(form.get("parameters[connected_account]"), Some("acct_123"));
        assert_eq!(form.get("parameters[columns][0]"), Some("category"));
        assert_eq!(form.get("parameters[currency]"), None);
    }

    #[test]
    fn test_parameters_sent_come_back_unchanged() {
        let sent = ReportRunParameters {
            columns: vec!["category".to_string(), "net".to_string()],
            connected_account: Some("acct_123".to_string()),
            currency: Some("usd".to_string()),
            interval_end: Some(1_559_347_200),
            interval_start: Some(1_556_668_800),
            payout: None,
            reporting_category: Some("charge".to_string()),
            timezone: Some("Etc/UTC".to_string()),
        };

        let form = to_form_values(&ReportRunParams {
            parameters: Some(sent.clone()),
            report_type: Some("activity.summary.1".to_string()),
        })
        .unwrap();
        assert_eq!(form.get("parameters[timezone]"), Some("Etc/UTC"));
        assert_eq!(form.get("parameters[payout]"), None);

        let echoed = serde_json::json!({
            "id": "frr_123",
            "object": "reporting.report_run",
            "parameters": serde_json::to_value(&sent).unwrap(),
            "report_type": "activity.summary.1",
            "status": "pending"
        });
        let run: ReportRun = serde_json::from_value(echoed).unwrap();

        assert_eq!(run.parameters, sent);
    }

    #[test]
    fn test_report_run_paths() {
        let create = get_path(ReportRun::PATHS, ResourceOperation::Create, &[]);
        assert_eq!(create.unwrap().template, "reporting/report_runs");

        let get = get_path(ReportRun::PATHS, ResourceOperation::Get, &["id"]);
        assert_eq!(get.unwrap().template, "reporting/report_runs/{id}");

        assert!(get_path(ReportRun::PATHS, ResourceOperation::Delete, &["id"]).is_none());
    }
}
