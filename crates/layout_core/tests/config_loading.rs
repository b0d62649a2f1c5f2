use layout_core::{
    register_builtin_layouts, ConfigError, LayoutConfig, LayoutRegistry, LayoutRegistryError,
};
use std::io::Write;

#[test]
fn loads_config_file_and_seeds_registry() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "images_url": "https://cdn.example.com/admin/images/",
            "rtl": true,
            "extra_layouts": [
                {{ "id": "landing", "label": "Landing", "types": ["singular"], "default": false }}
            ]
        }}"#
    )
    .expect("config should be written");

    let config = LayoutConfig::from_path(file.path()).expect("config should load");
    let registry = config.build_registry().expect("registry should seed");

    assert_eq!(registry.len(), 7);
    assert_eq!(registry.default_layout("site"), "sidebar-content");
    assert_eq!(
        registry.descriptor("content-sidebar").expect("builtin").image,
        "https://cdn.example.com/admin/images/layouts/cs.gif"
    );
    let landing = registry.get("landing", "singular").expect("landing listed");
    assert_eq!(landing.label, "Landing");
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = LayoutConfig::from_path(dir.path().join("missing.json"))
        .expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn extra_layout_with_empty_types_fails_seeding() {
    let config = LayoutConfig::from_json_str(r#"{ "extra_layouts": [ { "id": "x", "types": [] } ] }"#)
        .expect("config itself is well formed");
    let err = config.build_registry().expect_err("empty types must fail");
    assert!(matches!(
        err,
        ConfigError::Registry(LayoutRegistryError::InvalidType(_))
    ));
}

#[test]
fn extra_default_layout_replaces_builtin_default() {
    let config = LayoutConfig::from_json_str(
        r#"{ "extra_layouts": [ { "id": "wide", "default": true } ] }"#,
    )
    .expect("config should parse");
    let registry = config.build_registry().expect("registry should seed");
    assert_eq!(registry.default_layout("site"), "wide");
    assert!(!registry.descriptor("content-sidebar").expect("builtin").is_default);
}

#[test]
fn seeding_a_plain_registry_uses_config_images_url_for_extras() {
    let config = LayoutConfig::from_json_str(
        r#"{
            "images_url": "https://cdn.example.com/img",
            "extra_layouts": [
                { "id": "plain" },
                { "id": "pictured", "image": "https://cdn.example.com/custom.gif" }
            ]
        }"#,
    )
    .expect("config should parse");
    let mut registry = LayoutRegistry::new();

    register_builtin_layouts(&mut registry, &config).expect("layouts should seed");

    assert_eq!(
        registry.descriptor("content-sidebar").expect("builtin").image,
        "https://cdn.example.com/img/layouts/cs.gif"
    );
    assert_eq!(
        registry.descriptor("plain").expect("extra").image,
        "https://cdn.example.com/img/layouts/none.gif"
    );
    assert_eq!(
        registry.descriptor("pictured").expect("extra").image,
        "https://cdn.example.com/custom.gif"
    );
}
