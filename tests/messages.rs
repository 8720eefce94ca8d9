#[cfg(test)]
mod tests {
    use glix::libs::messages::{self, Message};

    #[test]
    fn test_fetch_failure_and_empty_result_read_differently() {
        // A truncated fetch must never be mistaken for an empty range
        let empty = Message::NoIssuesFound.to_string();
        let partial = Message::FetchIncomplete(42, "HTTP 500".to_string()).to_string();

        assert_ne!(empty, partial);
        assert!(partial.contains("42"));
        assert!(partial.contains("HTTP 500"));
    }

    #[test]
    fn test_progress_and_outcome_messages_carry_counts() {
        assert_eq!(Message::IssuesFetchedSoFar(100).to_string(), "Fetched 100 issues so far...");
        assert_eq!(Message::IssuesFound(137).to_string(), "Found 137 issues");
    }

    #[test]
    fn test_export_messages_name_the_destination() {
        let completed = Message::ExportCompleted("issues.xlsx".to_string()).to_string();
        assert!(completed.contains("issues.xlsx"));

        let failed = Message::ExportWriteFailed("/tmp/out.xlsx".to_string(), "permission denied".to_string()).to_string();
        assert!(failed.contains("/tmp/out.xlsx"));
        assert!(failed.contains("permission denied"));
    }

    #[test]
    fn test_unconfigured_gitlab_points_at_init() {
        assert!(Message::GitlabNotConfigured.to_string().contains("glix init"));
    }

    #[test]
    fn test_severity_prefix_helpers() {
        let msg = Message::ConfigSaved;
        assert!(messages::success(msg.clone()).starts_with("✅"));
        assert!(messages::error(msg.clone()).starts_with("❌"));
        assert!(messages::warning(msg.clone()).starts_with("⚠️"));
        assert!(messages::info(msg).starts_with("ℹ️"));
    }
}
