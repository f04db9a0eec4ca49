#[cfg(test)]
mod tests {
    use harvest_cli::libs::config::{render_config, ApiConfig, Config, ConfigError, DEFAULT_BASE_URL, MASKED_TOKEN};
    use harvest_cli::libs::period::YearStart;
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const SAMPLE_CONFIG: &str = r#"{
        "projects": [
            {
                "id": 101,
                "name": "Acme | Platform",
                "tasks": [
                    { "id": 11, "name": "Development" },
                    { "id": 12, "name": "Meetings" }
                ]
            },
            { "id": 202, "name": "Internal", "tasks": [] }
        ],
        "default_project": "Acme | Platform",
        "default_task": "Development",
        "year_start_date": "04-01",
        "monthly_capacity_hours": 150,
        "billable_task_ids": [11],
        "harvest_api": {
            "account_id": "123456",
            "token": "secret-token"
        }
    }"#;

    /// Test context with a temporary directory holding config files.
    /// It also points the home directory at the temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            ConfigTestContext { temp_dir }
        }
    }

    impl ConfigTestContext {
        fn write(&self, name: &str, contents: &str) -> PathBuf {
            let path = self.temp_dir.path().join(name);
            fs::write(&path, contents).unwrap();
            path
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_config(ctx: &mut ConfigTestContext) {
        let path = ctx.write("config.json", SAMPLE_CONFIG);
        let config = Config::read_from(&path).unwrap();

        assert_eq!(config.projects.len(), 2);
        assert_eq!(config.harvest_api.account_id, "123456");
        assert_eq!(config.harvest_api.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.year_start().unwrap(), YearStart::new(4, 1).unwrap());
        assert_eq!(config.capacity_config().unwrap().monthly_capacity_hours(), 150.0);
        assert!(config.billable_tasks().is_billable(11));
        assert!(!config.billable_tasks().is_billable(12));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_minimal_config_uses_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.write("config.json", "{}");
        let config = Config::read_from(&path).unwrap();

        assert!(config.projects.is_empty());
        assert_eq!(config.year_start().unwrap(), YearStart::default());
        assert_eq!(config.capacity_config().unwrap().monthly_capacity_hours(), 160.0);
        assert!(config.billable_tasks().is_empty());
        assert!(config.billable_tasks().is_billable(999));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_year_start_fails_on_load(ctx: &mut ConfigTestContext) {
        let path = ctx.write("config.json", r#"{ "year_start_date": "02-30" }"#);
        assert!(matches!(Config::read_from(&path), Err(ConfigError::Period(_))));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_json(ctx: &mut ConfigTestContext) {
        let path = ctx.write("config.json", "{ not json");
        assert!(matches!(Config::read_from(&path), Err(ConfigError::Parse { .. })));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_locate_first_readable_candidate(ctx: &mut ConfigTestContext) {
        let missing = ctx.temp_dir.path().join("missing.json");
        let second = ctx.write("second.json", "{}");
        let third = ctx.write("third.json", "{}");

        let found = Config::locate_in(&[missing.clone(), second.clone(), third]).unwrap();
        assert_eq!(found, second);

        match Config::locate_in(&[missing.clone()]) {
            Err(ConfigError::NotFound(paths)) => assert_eq!(paths, vec![missing]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_candidate_paths_order(_ctx: &mut ConfigTestContext) {
        let paths = Config::candidate_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from("config.json")));
        assert_eq!(paths.last(), Some(&PathBuf::from("..").join("config.json")));
        assert!(paths.iter().any(|path| path.ends_with(".harvest-config.json")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_project_and_task_lookups(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.write("config.json", SAMPLE_CONFIG)).unwrap();

        let project = config.project_by_name("Acme | Platform").unwrap();
        assert_eq!(project.id, 101);
        assert_eq!(config.project_by_id(202).unwrap().name, "Internal");
        assert_eq!(project.task_by_name("Meetings").unwrap().id, 12);
        assert_eq!(project.task_by_id(11).unwrap().name, "Development");
        assert_eq!(config.project_names(), vec!["Acme | Platform", "Internal"]);

        assert!(matches!(config.require_project("Unknown"), Err(ConfigError::ProjectNotFound(_))));
        assert!(matches!(project.require_task("Unknown"), Err(ConfigError::TaskNotFound { .. })));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_project_and_task(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.write("config.json", SAMPLE_CONFIG)).unwrap();
        let project = config.default_project().unwrap();
        assert_eq!(project.id, 101);
        assert_eq!(config.default_task(project).unwrap().id, 11);

        let empty = Config::default();
        assert!(matches!(empty.default_project(), Err(ConfigError::NoDefaultProject)));
        assert!(matches!(empty.default_task(project), Err(ConfigError::NoDefaultTask)));
    }

    #[test]
    fn test_env_overrides() {
        let overrides: HashMap<&str, &str> = [
            ("HARVEST_ACCOUNT_ID", "999"),
            ("HARVEST_TOKEN", "env-token"),
            ("HARVEST_BASE_URL", ""),
        ]
        .into_iter()
        .collect();

        let config = Config {
            harvest_api: ApiConfig {
                account_id: "123".to_string(),
                token: "file-token".to_string(),
                base_url: Some("https://example.test/v2/".to_string()),
            },
            ..Config::default()
        }
        .with_overrides(|key| overrides.get(key).map(|value| value.to_string()));

        assert_eq!(config.harvest_api.account_id, "999");
        assert_eq!(config.harvest_api.token, "env-token");
        assert_eq!(config.harvest_api.base_url(), "https://example.test/v2");
    }

    #[test]
    fn test_credentials_required() {
        assert!(matches!(ApiConfig::default().ensure_credentials(), Err(ConfigError::MissingCredentials)));
        let api = ApiConfig {
            account_id: "1".to_string(),
            token: "t".to_string(),
            base_url: None,
        };
        assert!(api.ensure_credentials().is_ok());
    }

    #[test]
    fn test_render_config_masks_token() {
        let masked = render_config(SAMPLE_CONFIG, false).unwrap();
        assert!(masked.contains(MASKED_TOKEN));
        assert!(!masked.contains("secret-token"));
        assert!(masked.contains("123456"));

        let shown = render_config(SAMPLE_CONFIG, true).unwrap();
        assert!(shown.contains("secret-token"));
    }
}
