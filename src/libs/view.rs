use super::report::ReportRow;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn issues(rows: &[ReportRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["IID", "TITLE", "STATE", "ASSIGNEES", "LABELS", "CREATED", "ESTIMATE", "SPENT"]);
        for r in rows {
            table.add_row(row![
                r.iid,
                r.title,
                r.state,
                r.assignees,
                r.labels,
                r.created_at,
                r.time_estimate,
                r.time_spent
            ]);
        }
        table.printstd();

        Ok(())
    }
}
