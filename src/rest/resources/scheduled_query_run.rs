//! Sigma Scheduled Query Run resource implementation.
//!
//! A [`ScheduledQueryRun`] is one execution of a scheduled SQL query. The
//! results are attached as a file.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{ListParams, RestResource};
//! use stripe_api::rest::resources::ScheduledQueryRun;
//!
//! let run = ScheduledQueryRun::get(&client, "sqr_123", &()).await?;
//! println!("{}: {}", run.title, run.sql);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::resources::common::File;
use crate::rest::{
    Identifiable, ListIter, ListParams, ReadOnlyResource, ResourceOperation, ResourcePath,
    RestResource,
};

/// Outcome of a scheduled query run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScheduledQueryRunStatus {
    /// The run was canceled.
    Canceled,
    /// The results are available.
    Completed,
    /// The query failed; see `error`.
    Failed,
    /// The query ran too long.
    TimedOut,
    /// A status this version of the SDK does not know.
    #[serde(other)]
    Unknown,
}

/// One execution of a scheduled query.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScheduledQueryRun {
    /// Unique identifier, e.g. `sqr_123`.
    pub id: String,

    /// Always `"scheduled_query_run"`.
    pub object: String,

    /// When the run was created.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,

    /// When the data the query ran against was loaded.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub data_load_time: Option<DateTime<Utc>>,

    /// Why the run failed.
    pub error: Option<ScheduledQueryRunError>,

    /// The results file.
    pub file: Option<File>,

    /// Whether the query ran on live data.
    pub livemode: bool,

    /// When the results stop being available.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub result_available_until: Option<DateTime<Utc>>,

    /// The SQL that ran.
    pub sql: String,

    /// Outcome of the run.
    pub status: Option<ScheduledQueryRunStatus>,

    /// Title of the query.
    pub title: String,
}

/// Error details of a failed run.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduledQueryRunError {
    /// What went wrong.
    pub message: String,
}

impl Identifiable for ScheduledQueryRun {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RestResource for ScheduledQueryRun {
    type GetParams = ();
    type ListParams = ListParams;
    type CreateParams = ();

    const NAME: &'static str = "ScheduledQueryRun";
    const OBJECT: &'static str = "scheduled_query_run";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["id"],
            "sigma/scheduled_query_runs/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &[],
            "sigma/scheduled_query_runs",
        ),
    ];
}

impl ReadOnlyResource for ScheduledQueryRun {}

/// Iterator over scheduled query runs.
pub type ScheduledQueryRunIter<'a> = ListIter<'a, ScheduledQueryRun>;
