use serde_json::json;
use suite_domain::config::{BundlerSettings, LogConfig, PagesConfig, SuiteConfig};

#[test]
fn config_defaults_are_sane() {
    let pages = PagesConfig::default();
    assert_eq!(pages.remote, "origin");
    assert_eq!(pages.site_path, "3d-printer-suite");
    assert_eq!(pages.git_binary, "git");

    let bundler = BundlerSettings::default();
    assert_eq!(bundler.output, std::path::PathBuf::from("vite.config.json"));

    let log = LogConfig::default();
    assert_eq!(log.level, "warn");
    assert!(!log.json);
}

#[test]
fn suite_config_deserializes_partial_documents() {
    let raw = json!({
        "pages": { "site_path": "viewer" },
        "log": { "json": true }
    });

    let cfg: SuiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.pages.site_path, "viewer");
    assert_eq!(cfg.pages.remote, "origin");
    assert!(cfg.log.json);
    assert_eq!(cfg.log.level, "warn");
    assert_eq!(cfg.bundler.output, std::path::PathBuf::from("vite.config.json"));
}
