use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Loading Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults_used() {
    // Given
    let _env = setup_config_dir();
    let _port = EnvGuard::unset("ACCT_SERVER_PORT");
    let _host = EnvGuard::unset("ACCT_SERVER_HOST");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host.as_str(), eq("127.0.0.1"));
    assert_that!(config.server.port, eq(8000));
    assert_that!(config.logging.colored, eq(true));
}

#[test]
#[serial]
fn given_env_override_when_load_then_port_applied() {
    // Given
    let _env = setup_config_dir();
    let _port = EnvGuard::set("ACCT_SERVER_PORT", "9100");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
}

#[test]
#[serial]
fn given_non_numeric_port_when_load_then_default_kept() {
    // Given
    let _env = setup_config_dir();
    let _port = EnvGuard::set("ACCT_SERVER_PORT", "not-a-number");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8000));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_toml_file_when_load_then_values_applied() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _port = EnvGuard::unset("ACCT_SERVER_PORT");
    std::fs::write(
        temp.path().join("config.toml"),
        "[server]\nhost = \"0.0.0.0\"\nport = 9200\n\n[logging]\nlevel = \"debug\"\ncolored = false\n",
    )
    .expect("Failed to write config.toml");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(config.server.port, eq(9200));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_toml_file_and_env_when_load_then_env_wins() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("ACCT_SERVER_PORT", "9300");
    std::fs::write(
        temp.path().join("config.toml"),
        "[server]\nport = 9200\n",
    )
    .expect("Failed to write config.toml");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9300));
}

#[test]
#[serial]
fn given_default_config_when_bind_addr_then_host_and_port_joined() {
    // Given
    let _env = setup_config_dir();
    let _port = EnvGuard::unset("ACCT_SERVER_PORT");
    let _host = EnvGuard::unset("ACCT_SERVER_HOST");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bind_addr().as_str(), eq("127.0.0.1:8000"));
}
