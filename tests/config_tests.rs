use photo_gallery::config::Configuration;
use photo_gallery::services::SettingService;

#[test]
fn flattens_nested_json() {
    let config = Configuration::from_json_str(
        r#"{ "server": { "address": "0.0.0.0:9000" }, "gallery": { "pageSize": 24 }, "database": { "url": null } }"#,
    )
    .unwrap();

    assert_eq!(config.get(Configuration::SERVER_ADDRESS), Some("0.0.0.0:9000"));
    assert_eq!(config.parse::<usize>(Configuration::GALLERY_PAGE_SIZE), Some(24));
    assert_eq!(config.get(Configuration::DATABASE_URL), None);
}

#[test]
fn env_overrides_match_keys_ignoring_case() {
    let mut config = Configuration::from_json_str(r#"{ "base": { "title": "Photos" } }"#).unwrap();

    config.apply_env(vec![
        ("GALLERY_BASE_TITLE".to_string(), "Albums".to_string()),
        ("GALLERY_GALLERY_PAGESIZE".to_string(), "12".to_string()),
        ("GALLERY_CONFIG".to_string(), "other.json".to_string()),
        ("PATH".to_string(), "/bin".to_string()),
    ]);

    assert_eq!(config.get(Configuration::BASE_TITLE), Some("Albums"));
    assert_eq!(config.get(Configuration::GALLERY_PAGE_SIZE), Some("12"));
    assert_eq!(config.get("config"), None);
    assert_eq!(config.get("path"), None);
}

#[test]
fn settings_fall_back_to_defaults() {
    let settings = SettingService::new(Configuration::new());

    assert_eq!(settings.title(), "图库");
    assert_eq!(settings.gallery_page_size(), 10);
    assert_eq!(settings.server_address(), "127.0.0.1:8090");
    assert_eq!(settings.database_url(), None);
}

#[test]
fn settings_ignore_invalid_page_size() {
    let mut config = Configuration::new();
    config.set(Configuration::GALLERY_PAGE_SIZE, "many");
    config.set(Configuration::BASE_TITLE, "  ");

    let settings = SettingService::new(config);

    assert_eq!(settings.gallery_page_size(), 10);
    assert_eq!(settings.title(), "图库");
}

#[test]
fn invalid_json_is_an_error() {
    assert!(Configuration::from_json_str("{ not json").is_err());
}
