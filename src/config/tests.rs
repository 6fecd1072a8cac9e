use super::*;
use figment::Jail;

/// Point HOME at the jail so no real user config leaks in
fn isolate_home(jail: &mut Jail) {
    let home = jail.directory().display().to_string();
    jail.set_env("HOME", home);
}

#[test]
fn test_config_loads_defaults() {
    Jail::expect_with(|jail| {
        isolate_home(jail);

        let config = GhsearchConfig::load().expect("Should load default config");
        let settings = config.settings().expect("defaults should deserialize");

        assert_eq!(settings.github.api_url, "https://api.github.com");
        assert_eq!(settings.github.token_env, "GITHUB_PERSONAL_ACCESS_TOKEN");
        assert_eq!(settings.github.timeout_secs, 30);
        assert_eq!(
            settings.search,
            SearchSettings {
                default_per_page: 30,
                max_per_page: 100
            }
        );
        assert_eq!(settings.translations.file, "ghsearch-config.json");
        assert_eq!(settings.translations.env_prefix, "GHSEARCH_TEXT_");
        assert!(settings.validate().is_ok());

        assert_eq!(config.get_string("github.user_agent").unwrap(), "ghsearch");
        assert_eq!(config.get_u32("search.max_per_page").unwrap(), 100);
        assert!(config.get_section("github").unwrap().is_object());
        assert!(config.get_full_config().unwrap()["translations"].is_object());

        Ok(())
    });
}

#[test]
fn test_repo_config_overrides_user_config() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_dir(".config/ghsearch")?;
        jail.create_file(
            ".config/ghsearch/config.toml",
            "[search]\ndefault_per_page = 10\nmax_per_page = 50\n",
        )?;
        jail.create_file("ghsearch.yaml", "search:\n  default_per_page: 20\n")?;

        let settings = GhsearchConfig::load().unwrap().settings().unwrap();
        assert_eq!(settings.search.default_per_page, 20);
        assert_eq!(settings.search.max_per_page, 50);

        Ok(())
    });
}

#[test]
fn test_env_overrides_files() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("ghsearch.json", r#"{"github": {"timeout_secs": 5}}"#)?;
        jail.set_env("GHSEARCH_GITHUB__TIMEOUT_SECS", "7");
        jail.set_env("GHSEARCH_GITHUB__API_URL", "http://localhost:9000");
        jail.set_env("GHSEARCH_TEXT_TOOL_SEARCH_USERS_DESCRIPTION", "not config");

        let config = GhsearchConfig::load().unwrap();
        let settings = config.settings().unwrap();
        assert_eq!(settings.github.timeout_secs, 7);
        assert_eq!(settings.github.api_url, "http://localhost:9000");
        assert!(config.get_full_config().unwrap().get("text_tool_search_users_description").is_none());

        Ok(())
    });
}

#[test]
fn test_custom_config_replaces_file_layers() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("ghsearch.toml", "[search]\ndefault_per_page = 11\n")?;
        jail.create_file("custom.conf", "[search]\ndefault_per_page = 12\n")?;

        let settings = GhsearchConfig::load_with_custom_config(Some("custom.conf"))
            .unwrap()
            .settings()
            .unwrap();
        assert_eq!(settings.search.default_per_page, 12);

        Ok(())
    });
}

#[test]
fn test_missing_custom_config_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = GhsearchConfig::load_with_custom_config(Some("non_existent.toml"))
            .err()
            .expect("missing file should fail");
        assert_eq!(err.to_string(), "Config file not found: non_existent.toml");

        Ok(())
    });
}

#[test]
fn test_validate_rejects_bad_limits() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        let mut settings = GhsearchConfig::load().unwrap().settings().unwrap();

        settings.search.max_per_page = 101;
        assert!(settings.validate().is_err());

        settings.search.max_per_page = 20;
        settings.search.default_per_page = 30;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().starts_with("search.default_per_page"));

        settings.search.default_per_page = 20;
        settings.github.api_url = "api.github.com".to_string();
        assert!(settings.validate().is_err());

        Ok(())
    });
}

#[test]
fn test_translation_env_vars_follow_configured_prefix() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("ghsearch.toml", "[translations]\nenv_prefix = \"GHSEARCH_LABEL_\"\n")?;
        jail.set_env("GHSEARCH_LABEL_TOOL_SEARCH_USERS_DESCRIPTION", "Find people");
        jail.set_env("GHSEARCH_SEARCH__DEFAULT_PER_PAGE", "15");

        let config = GhsearchConfig::load().unwrap();
        let full = config.get_full_config().unwrap();
        assert!(full.get("label_tool_search_users_description").is_none());
        assert_eq!(config.get_u32("search.default_per_page").unwrap(), 15);
        assert_eq!(config.settings().unwrap().translations.env_prefix, "GHSEARCH_LABEL_");

        Ok(())
    });
}
