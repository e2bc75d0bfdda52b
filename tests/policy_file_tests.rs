use std::io::Write;

use rolegate_core::error::AuthzError;
use rolegate_core::{CapabilityResolver, Role, RoleCapabilityMap};

fn write_policy(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp policy file");
    file.write_all(contents.as_bytes()).expect("write temp policy file");
    file
}

#[test]
fn test_load_policy_from_path() {
    let file = write_policy(
        r#"{"roles":{"admin":["full-access","user-management"],"editor":["content-edit"],"viewer":["content-view"]}}"#,
    );
    let map = RoleCapabilityMap::from_path(file.path()).unwrap();
    let resolver = CapabilityResolver::new(map);

    assert!(resolver.has(Role::Admin, "user-management"));
    assert!(!resolver.has(Role::Editor, "content-view"));
    assert_eq!(resolver.capabilities_of(Role::Viewer).len(), 1);
}

#[test]
fn test_saved_defaults_reload_identically() {
    let defaults = RoleCapabilityMap::dashboard_defaults();
    let file = write_policy(&serde_json::to_string_pretty(&defaults).unwrap());
    assert_eq!(RoleCapabilityMap::from_path(file.path()).unwrap(), defaults);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RoleCapabilityMap::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, AuthzError::Config(_)));
}

#[test]
fn test_policy_missing_role_is_rejected() {
    let file = write_policy(r#"{"roles":{"admin":["full-access"],"editor":["content-edit"]}}"#);
    let err = RoleCapabilityMap::from_path(file.path()).unwrap_err();
    assert_eq!(err, AuthzError::InvalidPolicy("role viewer is not defined".to_string()));
}

#[test]
fn test_policy_empty_grants_is_rejected() {
    let file = write_policy(r#"{"roles":{"admin":["full-access"],"editor":[],"viewer":["content-view"]}}"#);
    let err = RoleCapabilityMap::from_path(file.path()).unwrap_err();
    assert_eq!(err, AuthzError::InvalidPolicy("role editor grants no capabilities".to_string()));
}
