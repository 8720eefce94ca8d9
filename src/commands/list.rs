//! Terminal issue listing command.
//!
//! Runs the same fetch-and-transform pipeline as the export command but
//! renders the rows as a table on stdout instead of writing a file.
//! Useful for a quick look at a date window before exporting it.

use crate::{
    api::gitlab::{DateRange, FetchCompletion, GitLab},
    libs::{config::Config, messages::Message, report::build_rows, view::View},
    msg_error_anyhow, msg_info, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

/// Command-line arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only include issues created on or after this date
    #[arg(long, value_name = "YYYY-MM-DD")]
    from: Option<NaiveDate>,

    /// Only include issues created before this date
    #[arg(long, value_name = "YYYY-MM-DD")]
    to: Option<NaiveDate>,
}

/// Executes the list command.
pub async fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(gitlab_config) = config.gitlab else {
        return Err(msg_error_anyhow!(Message::GitlabNotConfigured));
    };

    let range = DateRange {
        created_after: args.from,
        created_before: args.to,
    };

    msg_info!(Message::FetchingIssues);
    let outcome = GitLab::new(&gitlab_config).fetch_issues(&range).await;

    if let FetchCompletion::Partial(err) = &outcome.completion {
        msg_warning!(Message::FetchIncomplete(outcome.issues.len(), err.to_string()));
    }

    if outcome.issues.is_empty() {
        if let FetchCompletion::Partial(err) = outcome.completion {
            return Err(err.into());
        }
        msg_info!(Message::NoIssuesFound);
        return Ok(());
    }

    let rows = build_rows(&outcome.issues)?;
    View::issues(&rows)?;

    Ok(())
}
