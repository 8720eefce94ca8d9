#[cfg(test)]
mod tests {
    use glix::api::gitlab::GitLabConfig;
    use glix::libs::config::Config;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(_ctx: &mut ConfigTestContext) {
        // Missing file reads as the default (empty) configuration
        let config = Config::read().unwrap();
        assert!(config.gitlab.is_none());

        // Save a GitLab section and read it back
        let config = Config {
            gitlab: Some(GitLabConfig {
                access_token: "glpat-test-token".to_string(),
                api_url: "https://gitlab.example.com".to_string(),
                project_id: "group%2Fproject".to_string(),
            }),
        };
        config.save().unwrap();

        let restored = Config::read().unwrap();
        let gitlab = restored.gitlab.expect("gitlab section should survive the round trip");
        assert_eq!(gitlab.access_token, "glpat-test-token");
        assert_eq!(gitlab.api_url, "https://gitlab.example.com");
        assert_eq!(gitlab.project_id, "group%2Fproject");

        // Deleting resets to the default on the next read
        Config::delete().unwrap();
        assert!(Config::read().unwrap().gitlab.is_none());
    }
}
