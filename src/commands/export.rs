//! Issue export command - the main pipeline driver.
//!
//! Resolves the creation-date window (from flags or interactive
//! prompts), fetches the project's issues page by page, transforms them
//! into report rows and writes the report document.
//!
//! ## Partial Failure Policy
//!
//! A failed page request does not throw away what was already fetched:
//! the partial set is still exported, a warning names the failure, and
//! the command exits with the fetch error so scripts can distinguish a
//! truncated report from a complete one. "No issues found" is only ever
//! reported for a fully completed fetch that returned nothing.

use crate::{
    api::gitlab::{DateRange, FetchCompletion, GitLab},
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        report::build_rows,
    },
    msg_error, msg_error_anyhow, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported report
    #[arg(short, long, value_enum, default_value = "excel")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// When omitted, a timestamped default such as
    /// `gitlab_issues_20250115_143022.xlsx` is generated in the current
    /// directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only include issues created on or after this date
    #[arg(long, value_name = "YYYY-MM-DD")]
    from: Option<NaiveDate>,

    /// Only include issues created before this date
    #[arg(long, value_name = "YYYY-MM-DD")]
    to: Option<NaiveDate>,

    /// Never prompt; an absent date bound means unbounded
    ///
    /// Without this flag the command asks for the date range
    /// interactively when neither --from nor --to is given.
    #[arg(long)]
    no_input: bool,
}

/// Executes the export command.
///
/// Pipeline: resolve date range → fetch all pages → transform records →
/// write the document. Fetching must finish before any row is
/// transformed or written; nothing is streamed.
pub async fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(gitlab_config) = config.gitlab else {
        return Err(msg_error_anyhow!(Message::GitlabNotConfigured));
    };

    let range = resolve_range(&args)?;

    msg_info!(Message::FetchingIssues);
    let outcome = GitLab::new(&gitlab_config).fetch_issues(&range).await;

    let failure = match outcome.completion {
        FetchCompletion::Complete => None,
        FetchCompletion::Partial(err) => Some(err),
    };

    if outcome.issues.is_empty() {
        return match failure {
            None => {
                msg_info!(Message::NoIssuesFound);
                Ok(())
            }
            Some(err) => Err(err.into()),
        };
    }

    match &failure {
        Some(err) => msg_warning!(Message::FetchIncomplete(outcome.issues.len(), err.to_string())),
        None => msg_print!(Message::IssuesFound(outcome.issues.len())),
    }

    msg_info!(Message::ExportingIssues);
    let rows = build_rows(&outcome.issues)?;
    Exporter::new(args.format, args.output).export(&rows)?;

    // The partial set has been written; still fail the run so callers
    // can tell a truncated report from a complete one.
    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Determines the date range from flags or interactive prompts.
///
/// Flags win: as soon as either bound (or --no-input) is given, no
/// prompting happens. Otherwise both bounds are asked for, empty input
/// meaning unbounded.
fn resolve_range(args: &ExportArgs) -> Result<DateRange> {
    if args.from.is_some() || args.to.is_some() || args.no_input {
        return Ok(DateRange {
            created_after: args.from,
            created_before: args.to,
        });
    }

    msg_print!(Message::DateRangeHint);
    Ok(DateRange {
        created_after: prompt_date("Start date (YYYY-MM-DD)")?,
        created_before: prompt_date("End date (YYYY-MM-DD)")?,
    })
}

/// Prompts for one date bound until valid or left empty.
fn prompt_date(prompt: &str) -> Result<Option<NaiveDate>> {
    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            Ok(date) => return Ok(Some(date)),
            Err(_) => msg_error!(Message::InvalidDateFormat),
        }
    }
}
