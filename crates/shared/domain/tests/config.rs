use codr_domain::config::{MetaConfig, ServerConfig, SiteConfig, StorageConfig};
use codr_domain::features::FeatureFlags;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4321);
    assert!(server.ssl.is_none());

    let storage = StorageConfig::default();
    assert_eq!(storage.static_dir, std::path::PathBuf::from("public"));

    let meta = MetaConfig::default();
    assert_eq!(meta.title, "codr.io");

    let cfg = SiteConfig::default();
    assert!(cfg.features.is_empty(), "flags default to off");
}

#[test]
fn site_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "storage": { "static_dir": "/srv/codr/public" },
        "site": { "title": "codr", "description": "d", "author": "a" },
        "features": { "show_header_links": true }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.storage.static_dir, std::path::PathBuf::from("/srv/codr/public"));
    assert_eq!(cfg.site.title, "codr");
    assert!(cfg.features.contains(FeatureFlags::SHOW_HEADER_LINKS));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: SiteConfig = serde_json::from_value(json!({ "server": { "port": 9000 } }))
        .expect("partial config deserialize");

    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.site, MetaConfig::default());
    assert!(cfg.features.is_empty());
}

#[test]
fn clones_share_until_mutated() {
    let original = SiteConfig::default();
    let mut changed = original.clone();
    changed.features = FeatureFlags::ALL;

    assert!(original.features.is_empty());
    assert!(changed.features.contains(FeatureFlags::SHOW_HEADER_LINKS));
}
