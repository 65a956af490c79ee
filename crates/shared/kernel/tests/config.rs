use codr_domain::config::SiteConfig;
use codr_domain::features::FeatureFlags;
use codr_kernel::config::{ConfigError, load_config};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_site_toml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("site.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8088

[storage]
static_dir = "/srv/public"

[site]
title = "codr.io"

[features]
show_header_links = true
"#,
    )?;

    let cfg: SiteConfig = load_config(Some(&path))?;
    assert_eq!(cfg.server.port, 8088);
    assert_eq!(cfg.storage.static_dir, std::path::PathBuf::from("/srv/public"));
    assert!(cfg.features.contains(FeatureFlags::SHOW_HEADER_LINKS));
    Ok(())
}

#[test]
fn file_stem_resolves_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("local.toml"), "[server]\nport = 9001\n")?;

    let cfg: SiteConfig = load_config(Some(dir.path().join("local")))?;
    assert_eq!(cfg.server.port, 9001);
    assert!(cfg.features.is_empty());
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let err = load_config::<SiteConfig>(Some(dir.path().join("absent.toml")))
        .expect_err("file is required");

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().contains("reading"));
}

#[test]
fn malformed_values_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[server]\nport = \"not a port\"\n")?;

    let err = load_config::<SiteConfig>(Some(&path)).expect_err("port must be numeric");
    assert!(err.to_string().contains("deserializing site config"));
    Ok(())
}
