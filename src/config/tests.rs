use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_milkcrate_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MILKCRATE_CONFIG_PATH", "/tmp/milkcrate-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/milkcrate-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("milkcrate")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("milkcrate")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file_and_parse_sort_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[source]
path = "my-albums.json"
load_on_start = false

[ui]
header_text = "hello"

[catalog]
default_sort = "longest-first"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MILKCRATE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MILKCRATE__SOURCE__PATH");

    let s = Settings::load().unwrap();
    assert_eq!(s.source.path, "my-albums.json");
    assert!(!s.source.load_on_start);
    assert_eq!(s.ui.header_text, "hello");
    assert!(matches!(s.catalog.default_sort, DefaultSort::Descending));
}

#[test]
fn settings_default_when_no_file_present() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-config.toml");

    let _g1 = EnvGuard::set("MILKCRATE_CONFIG_PATH", missing.to_str().unwrap());
    let _g2 = EnvGuard::remove("MILKCRATE__SOURCE__PATH");
    let _g3 = EnvGuard::remove("MILKCRATE__SOURCE__LOAD_ON_START");

    let s = Settings::load().unwrap();
    assert_eq!(s.source.path, "albums.json");
    assert!(s.source.load_on_start);
    assert!(matches!(s.catalog.default_sort, DefaultSort::Unsorted));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[source]
path = "from-file.json"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MILKCRATE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MILKCRATE__SOURCE__PATH", "from-env.json");

    let s = Settings::load().unwrap();
    assert_eq!(s.source.path, "from-env.json");
}

#[test]
fn validate_rejects_blank_source_path() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.source.path = "   ".to_string();
    assert!(s.validate().is_err());
}
