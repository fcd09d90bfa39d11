use keymap_loader::{AppPaths, Binding, KeyMap, KeyMapError, KeysManager, Platform};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const APP_NAME: &str = "key-app";

/// Application and user roots laid out in a scratch directory
struct Layout {
    _temp_dir: TempDir,
    paths: AppPaths,
}

impl Layout {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::new(
            temp_dir.path().join("appdata"),
            temp_dir.path().join("userdata"),
            APP_NAME,
        );
        Self {
            _temp_dir: temp_dir,
            paths,
        }
    }

    fn manager(&self, platform: Platform) -> KeysManager<&AppPaths, Platform> {
        KeysManager::new(&self.paths, platform)
    }

    fn write_application(&self, file: &str, contents: &str) -> PathBuf {
        write(&self.paths.application_data_directory, file, contents)
    }

    fn write_user(&self, file: &str, contents: &str) -> PathBuf {
        write(&self.paths.user_data_directory, file, contents)
    }
}

fn write(root: &std::path::Path, file: &str, contents: &str) -> PathBuf {
    let dir = root.join(APP_NAME);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(file);
    fs::write(&path, contents).unwrap();
    path
}

fn key_map(value: serde_json::Value) -> KeyMap {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_application_only() {
    let layout = Layout::new();
    layout.write_application(
        "keys.linux.json",
        r#"{"moveUp": "w", "save": ["ctrl+s", "F2"]}"#,
    );

    let keys = layout.manager(Platform::Unix).retrieve().unwrap();

    assert_eq!(keys, Some(key_map(json!({"moveUp": "w", "save": ["ctrl+s", "F2"]}))));
}

#[test]
fn test_user_only() {
    let layout = Layout::new();
    layout.write_user("keys.linux.json", r#"{"jump": "space"}"#);

    let manager = layout.manager(Platform::Unix);

    assert!(manager.read_application_keys().unwrap().is_none());
    assert_eq!(manager.retrieve().unwrap(), Some(key_map(json!({"jump": "space"}))));
}

#[test]
fn test_user_overrides_application() {
    let layout = Layout::new();
    layout.write_application("keys.linux.json", r#"{"moveUp": "w", "moveDown": "s"}"#);
    layout.write_user("keys.linux.json", r#"{"moveDown": "ArrowDown", "jump": "space"}"#);

    let keys = layout.manager(Platform::Unix).retrieve().unwrap().unwrap();

    assert_eq!(
        keys,
        key_map(json!({"moveUp": "w", "moveDown": "ArrowDown", "jump": "space"}))
    );
    assert_eq!(keys.get("moveDown"), Some(&Binding::from("ArrowDown")));
}

#[test]
fn test_nested_values_are_replaced_not_merged() {
    let layout = Layout::new();
    layout.write_application(
        "keys.linux.json",
        r#"{"macro": {"keys": ["a", "b"], "repeat": 3}, "quit": "q"}"#,
    );
    layout.write_user("keys.linux.json", r#"{"macro": {"keys": ["c"]}}"#);

    let keys = layout.manager(Platform::Unix).retrieve().unwrap().unwrap();

    assert_eq!(keys, key_map(json!({"macro": {"keys": ["c"]}, "quit": "q"})));
}

#[test]
fn test_neither_file_is_none_and_repeatable() {
    let layout = Layout::new();
    let manager = layout.manager(Platform::Unix);

    assert!(manager.retrieve().unwrap().is_none());
    assert!(manager.retrieve().unwrap().is_none());
}

#[test]
fn test_platform_selects_file() {
    let layout = Layout::new();
    layout.write_application("keys.linux.json", r#"{"quit": "ctrl+q"}"#);
    layout.write_application("keys.windows.json", r#"{"quit": "alt+F4"}"#);

    let unix = layout.manager(Platform::Unix).retrieve().unwrap().unwrap();
    let windows = layout.manager(Platform::Windows).retrieve().unwrap().unwrap();

    assert_eq!(unix.get("quit"), Some(&Binding::from("ctrl+q")));
    assert_eq!(windows.get("quit"), Some(&Binding::from("alt+F4")));
}

#[test]
fn test_other_platform_file_is_ignored() {
    let layout = Layout::new();
    layout.write_user("keys.windows.json", r#"{"quit": "alt+F4"}"#);

    assert!(layout.manager(Platform::Unix).retrieve().unwrap().is_none());
}

#[test]
fn test_invalid_user_json_fails_whole_retrieve() {
    let layout = Layout::new();
    layout.write_application("keys.linux.json", r#"{"moveUp": "w"}"#);
    let broken = layout.write_user("keys.linux.json", r#"{"moveUp": "#);

    let err = layout.manager(Platform::Unix).retrieve().unwrap_err();

    assert!(err.is_parse());
    assert_eq!(err.path(), broken.as_path());
}

#[test]
fn test_invalid_application_json_fails_even_with_valid_user_file() {
    let layout = Layout::new();
    let broken = layout.write_application("keys.linux.json", "not json");
    layout.write_user("keys.linux.json", r#"{"jump": "space"}"#);

    let manager = layout.manager(Platform::Unix);

    assert!(matches!(
        manager.retrieve(),
        Err(KeyMapError::Parse { ref path, .. }) if *path == broken
    ));
    assert!(manager.read_user_keys().unwrap().is_some());
}

#[test]
fn test_top_level_array_is_a_parse_error() {
    let layout = Layout::new();
    layout.write_user("keys.linux.json", r#"["w", "s"]"#);

    let err = layout.manager(Platform::Unix).retrieve().unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_null_user_file_falls_back_to_application() {
    let layout = Layout::new();
    layout.write_application("keys.linux.json", r#"{"moveUp": "w"}"#);
    layout.write_user("keys.linux.json", "null");

    let keys = layout.manager(Platform::Unix).retrieve().unwrap();

    assert_eq!(keys, Some(key_map(json!({"moveUp": "w"}))));
}

#[test]
fn test_null_in_both_layers_is_none() {
    let layout = Layout::new();
    layout.write_application("keys.linux.json", " null\n");
    layout.write_user("keys.linux.json", "null");

    assert!(layout.manager(Platform::Unix).retrieve().unwrap().is_none());
}

#[test]
fn test_top_level_scalar_is_a_parse_error() {
    let layout = Layout::new();
    layout.write_application("keys.linux.json", "42");

    let err = layout.manager(Platform::Unix).retrieve().unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_unreadable_file_is_an_io_error() {
    let layout = Layout::new();
    // A directory where the file should be exists but cannot be read as text
    let dir = layout
        .paths
        .application_data_directory
        .join(APP_NAME)
        .join("keys.linux.json");
    fs::create_dir_all(&dir).unwrap();

    let err = layout.manager(Platform::Unix).retrieve().unwrap_err();

    assert!(matches!(err, KeyMapError::Io { .. }));
    assert_eq!(err.path(), dir.as_path());
}

#[test]
fn test_retrieve_sees_file_system_changes() {
    let layout = Layout::new();
    let manager = layout.manager(Platform::Unix);
    assert!(manager.retrieve().unwrap().is_none());

    let path = layout.write_user("keys.linux.json", r#"{"jump": "space"}"#);
    assert_eq!(manager.retrieve().unwrap().unwrap().len(), 1);

    fs::remove_file(path).unwrap();
    assert!(manager.retrieve().unwrap().is_none());
}
