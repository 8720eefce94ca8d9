//! Central catalog of user-facing messages.
//!
//! Every string the application prints passes through this enum, keeping
//! wording in one place and letting call sites stay free of literals.
//! The text itself lives in the `Display` implementation in
//! [`super::display`].

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleGitLab,
    GitlabNotConfigured,

    // === FETCH MESSAGES ===
    FetchingIssues,
    IssuesFetchedSoFar(usize),
    IssuesFound(usize),
    NoIssuesFound,
    FetchIncomplete(usize, String), // records kept, cause

    // === EXPORT MESSAGES ===
    ExportingIssues,
    ExportCompleted(String),          // output path
    ExportWriteFailed(String, String), // output path, cause

    // === DATE PROMPT MESSAGES ===
    DateRangeHint,
    InvalidDateFormat,
}
