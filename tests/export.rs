#[cfg(test)]
mod tests {
    use glix::libs::export::{column_widths, default_file_name, ExportFormat, Exporter};
    use glix::libs::report::ReportRow;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn row(iid: u64) -> ReportRow {
        ReportRow {
            iid,
            title: format!("Issue {}", iid),
            description: "Something broke".to_string(),
            author: "Ana García".to_string(),
            state: "opened".to_string(),
            assignees: "Ana, Luis".to_string(),
            labels: "bug".to_string(),
            created_at: "2024-03-05 14:30:00".to_string(),
            time_estimate: "1h 30m 0s".to_string(),
            time_spent: "0".to_string(),
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let rows: Vec<ReportRow> = (1..=137).map(row).collect();

        let output_path = ctx.temp_dir.path().join("issues.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(&rows).unwrap();

        assert!(output_path.exists());

        let content = std::fs::read_to_string(&output_path).unwrap();
        // 1 header line + 137 data lines
        assert_eq!(content.lines().count(), 138);
        assert!(content.starts_with("ID del issue,"));
        assert!(content.contains("Título del issue"));
        assert!(content.contains("Ana, Luis"));
        assert!(content.contains("1h 30m 0s"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let rows: Vec<ReportRow> = (1..=3).map(row).collect();

        let output_path = ctx.temp_dir.path().join("issues.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter.export(&rows).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let parsed: Vec<ReportRow> = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].iid, 1);
        assert_eq!(parsed[2].assignees, "Ana, Luis");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let rows: Vec<ReportRow> = (1..=10).map(row).collect();

        let output_path = ctx.temp_dir.path().join("issues.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(output_path.clone()));
        exporter.export(&rows).unwrap();

        assert!(output_path.exists());
        let metadata = std::fs::metadata(&output_path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_row_set_still_writes_header(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("empty.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(&[]).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_unwritable_destination_is_a_write_error(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("no_such_dir").join("issues.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path));

        let err = exporter.export(&[row(1)]).unwrap_err();
        assert!(err.to_string().contains("Failed to write report"));
    }

    #[test]
    fn test_default_file_name_pattern() {
        let name = default_file_name(ExportFormat::Excel);
        assert!(name.starts_with("gitlab_issues_"));
        assert!(name.ends_with(".xlsx"));
        // gitlab_issues_ + YYYYMMDD_HHMMSS + .xlsx
        assert_eq!(name.len(), "gitlab_issues_".len() + 15 + ".xlsx".len());

        assert!(default_file_name(ExportFormat::Csv).ends_with(".csv"));
        assert!(default_file_name(ExportFormat::Json).ends_with(".json"));
    }

    #[test]
    fn test_column_widths_without_rows_come_from_headers() {
        let widths = column_widths(&[]);

        // "ID del issue" is 12 characters, plus 2 padding
        assert_eq!(widths[0], 14);
        // "Título del issue" is 16 characters (í counts as one), plus 2
        assert_eq!(widths[1], 18);
    }

    #[test]
    fn test_column_widths_grow_with_longest_value_and_cap() {
        let mut long = row(1);
        long.title = "A title that is clearly longer than its header".to_string(); // 46 chars
        long.description = "x".repeat(120);

        let widths = column_widths(&[long]);

        assert_eq!(widths[1], 48); // longest value + 2
        assert_eq!(widths[2], 50); // capped
    }
}
