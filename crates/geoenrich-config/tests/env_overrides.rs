//! Integration tests for environment variable overrides.

use figment::Jail;
use geoenrich_config::GeoenrichConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env(
            "GEOENRICH_SERVICE__URL",
            "https://env.example.com/arcgis/rest/services",
        );
        jail.set_env("GEOENRICH_SERVICE__TOKEN", "token_from_env");

        let config = GeoenrichConfig::load().expect("config loads");
        assert_eq!(config.service.url, "https://env.example.com/arcgis/rest/services");
        assert_eq!(config.service.token, "token_from_env");
        assert!(config.service.is_configured());
        Ok(())
    });
}

#[test]
fn env_overrides_nested_http_section() {
    Jail::expect_with(|jail| {
        jail.set_env("GEOENRICH_HTTP__TIMEOUT_SECS", "120");

        let config = GeoenrichConfig::load().expect("config loads");
        assert_eq!(config.http.timeout_secs, 120);
        // untouched fields keep their defaults
        assert_eq!(config.http.connect_timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".geoenrich")?;
        jail.create_file(
            ".geoenrich/config.toml",
            r#"
[report]
default_country = "CA"
"#,
        )?;
        jail.set_env("GEOENRICH_REPORT__DEFAULT_COUNTRY", "DE");

        let config = GeoenrichConfig::load().expect("config loads");
        assert_eq!(config.report.default_country, "DE");
        Ok(())
    });
}
