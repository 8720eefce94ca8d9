//! Display implementation for glix application messages.
//!
//! Converts the structured [`Message`] variants into the human-readable
//! text shown in the terminal. Keeping all wording in a single `match`
//! makes the full user-visible vocabulary of the tool reviewable at a
//! glance and leaves the door open for localization later.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleGitLab => "GitLab module configuration".to_string(),
            Message::GitlabNotConfigured => "GitLab is not configured. Run 'glix init' first".to_string(),

            // === FETCH MESSAGES ===
            Message::FetchingIssues => "Fetching issues from GitLab...".to_string(),
            Message::IssuesFetchedSoFar(count) => format!("Fetched {} issues so far...", count),
            Message::IssuesFound(count) => format!("Found {} issues", count),
            Message::NoIssuesFound => "No issues found in the specified date range".to_string(),
            Message::FetchIncomplete(count, cause) => {
                format!("Fetch incomplete: kept {} issues retrieved before the failure ({})", count, cause)
            }

            // === EXPORT MESSAGES ===
            Message::ExportingIssues => "Exporting issues...".to_string(),
            Message::ExportCompleted(path) => format!("Issues exported successfully to: {}", path),
            Message::ExportWriteFailed(path, cause) => format!("Failed to write report to {}: {}", path, cause),

            // === DATE PROMPT MESSAGES ===
            Message::DateRangeHint => "Enter the date range to filter issues (leave blank for no bound)".to_string(),
            Message::InvalidDateFormat => "Invalid date format. Use YYYY-MM-DD (example: 2024-01-15)".to_string(),
        };
        write!(f, "{}", message)
    }
}
