//! Report row construction from raw GitLab issues.
//!
//! This module is the transformation stage of the pipeline: it projects
//! each typed [`Issue`] into a [`ReportRow`] of ten pre-formatted display
//! values matching the fixed column contract of the exported document.
//! All normalization happens here - list joining, timestamp rendering,
//! duration formatting and defaulting of absent optional data - so the
//! writers and the terminal view only ever deal with plain strings.
//!
//! ## Column Contract
//!
//! The column order and the (bilingual) header labels are a compatibility
//! surface inherited from the reports this tool replaces; consumers of
//! the exported files rely on both. See [`COLUMNS`].

use crate::api::gitlab::Issue;
use crate::libs::formatter::format_seconds;
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed header labels of the report, in column order.
///
/// Preserved verbatim from the legacy reports as a compatibility surface;
/// do not translate or reorder.
pub const COLUMNS: [&str; 10] = [
    "ID del issue",
    "Título del issue",
    "Descripción del issue",
    "Nombre del autor",
    "Estado del issue",
    "Asignados al issue",
    "Etiquetas del issue",
    "Fecha y hora de creación",
    "Tiempo total estimado",
    "Tiempo total gastado",
];

/// Rendered format of the creation timestamp column.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An issue whose data cannot be projected into a report row.
///
/// The typed schema already rejects records with missing required fields
/// when the page body is decoded, so the only malformation left to catch
/// here is a `created_at` value that is not a valid ISO-8601 date-time.
#[derive(Debug, Error)]
#[error("issue #{iid}: created_at '{value}' is not a valid ISO-8601 timestamp")]
pub struct MalformedRecord {
    /// Project-local number of the offending issue
    pub iid: u64,
    /// The raw timestamp value that failed to parse
    pub value: String,
}

/// The display-ready projection of one issue into the fixed column set.
///
/// All fields are pre-formatted scalars. String fields hold exactly what
/// lands in the document cells; `iid` stays numeric so spreadsheet
/// consumers can sort on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    /// Project-local issue number
    pub iid: u64,
    /// Issue title
    pub title: String,
    /// Description, empty string when absent
    pub description: String,
    /// Author display name
    pub author: String,
    /// Workflow state ("opened" / "closed")
    pub state: String,
    /// Assignee names joined with ", ", empty when unassigned
    pub assignees: String,
    /// Labels joined with ", ", empty when unlabeled
    pub labels: String,
    /// Creation timestamp as "YYYY-MM-DD HH:MM:SS" in its own offset
    pub created_at: String,
    /// Formatted time estimate ("0" when none recorded)
    pub time_estimate: String,
    /// Formatted time spent ("0" when none recorded)
    pub time_spent: String,
}

impl ReportRow {
    /// Projects one issue into a report row.
    ///
    /// The creation timestamp is re-rendered in the offset it was encoded
    /// with; no timezone conversion takes place. Missing time statistics
    /// read as zero seconds.
    pub fn from_issue(issue: &Issue) -> Result<Self, MalformedRecord> {
        let assignees = issue.assignees.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ");
        let labels = issue.labels.join(", ");

        let created_at = DateTime::parse_from_rfc3339(&issue.created_at)
            .map_err(|_| MalformedRecord {
                iid: issue.iid,
                value: issue.created_at.clone(),
            })?
            .format(CREATED_AT_FORMAT)
            .to_string();

        let time_stats = issue.time_stats.unwrap_or_default();

        Ok(Self {
            iid: issue.iid,
            title: issue.title.clone(),
            description: issue.description.clone().unwrap_or_default(),
            author: issue.author.name.clone(),
            state: issue.state.to_string(),
            assignees,
            labels,
            created_at,
            time_estimate: format_seconds(time_stats.time_estimate),
            time_spent: format_seconds(time_stats.total_time_spent),
        })
    }

    /// Returns the ten cell values in column order, all as text.
    ///
    /// Used wherever the row is consumed positionally: CSV records,
    /// column width calculation and the terminal table.
    pub fn cells(&self) -> [String; 10] {
        [
            self.iid.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.author.clone(),
            self.state.clone(),
            self.assignees.clone(),
            self.labels.clone(),
            self.created_at.clone(),
            self.time_estimate.clone(),
            self.time_spent.clone(),
        ]
    }
}

/// Transforms a sequence of issues into report rows, preserving order.
///
/// Fails on the first malformed record: a report with silently corrupted
/// rows would be worse than no report, so the whole run aborts instead.
pub fn build_rows(issues: &[Issue]) -> Result<Vec<ReportRow>, MalformedRecord> {
    issues.iter().map(ReportRow::from_issue).collect()
}
