use std::fs;

use computer::{Computer, Config, ConfigError, Variant};
use mmu::Mmu;

const PAGED_CONFIG: &str = r#"
{
    "name": "TinyVM a1",
    "mmu": { "variant": "paged", "size_k": 255 }
}
"#;

const FLAT_CONFIG: &str = r#"
{
    "name": "TinyVM a0",
    "mmu": { "variant": "flat", "size_k": 16 }
}
"#;

#[test]
fn parses_machine_config() {
    let config: Config = serde_json::from_str(PAGED_CONFIG).unwrap();
    assert_eq!(config.name, "TinyVM a1");
    assert_eq!(config.mmu.variant, Variant::Paged);
    assert_eq!(config.mmu.size_k, 255);
}

#[test]
fn builds_the_paged_variant() {
    let config: Config = serde_json::from_str(PAGED_CONFIG).unwrap();
    let computer = Computer::new(config);
    assert_eq!(computer.name(), "TinyVM a1");
    assert_eq!(computer.mmu().name(), "paged");
    // 255 KiB requested, rounded up to whole pages
    assert_eq!(computer.mmu().size(), 256 * 1024);
    assert!(computer.device().paged().is_some());
}

#[test]
fn builds_the_flat_variant() {
    let config: Config = serde_json::from_str(FLAT_CONFIG).unwrap();
    let computer = Computer::new(config);
    assert_eq!(computer.mmu().name(), "flat");
    assert_eq!(computer.mmu().size(), 16 * 1024);
    assert!(computer.device().paged().is_none());

    // the flat engine still serves the shared surface
    computer.mmu().store_u8(0x10, 0xAA);
    assert_eq!(computer.mmu().load_u8(0x10), 0xAA);
}

#[test]
fn loads_a_machine_from_disk() {
    let path = std::env::temp_dir().join("tinyvm_machine_ok.json");
    fs::write(&path, PAGED_CONFIG).unwrap();
    let computer = Computer::from_file(&path).unwrap();
    assert_eq!(computer.name(), "TinyVM a1");
    fs::remove_file(&path).ok();
}

#[test]
fn missing_config_is_a_read_error() {
    let err = Computer::from_file("/nonexistent/machine.json").unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn malformed_config_is_a_parse_error() {
    let path = std::env::temp_dir().join("tinyvm_machine_bad.json");
    fs::write(&path, "{ \"name\": 12 }").unwrap();
    let err = Computer::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    fs::remove_file(&path).ok();
}

#[test]
fn unknown_variant_is_rejected() {
    let err = serde_json::from_str::<Config>(
        r#"{ "name": "x", "mmu": { "variant": "dlopen", "size_k": 1 } }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("variant"));
}
