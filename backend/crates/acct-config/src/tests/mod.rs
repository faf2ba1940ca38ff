mod config;
mod log_level;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let original = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self { key, original }
    }

    pub(crate) fn unset(key: &'static str) -> Self {
        let original = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Point ACCT_CONFIG_DIR at a fresh temp directory for the duration of a test
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let guard = EnvGuard::set(
        "ACCT_CONFIG_DIR",
        temp.path().to_str().expect("temp path is not UTF-8"),
    );
    (temp, guard)
}
