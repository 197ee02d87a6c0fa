//! Environment and working-directory configuration layering
//!
//! Kept in its own test binary with a single test: it mutates process-wide
//! environment variables and the current directory.

use roster_cli::RosterConfig;
use std::env;
use std::fs;
use tempfile::TempDir;

const ENV_VARS: [&str; 3] = [
    "ROSTER_API__BASE_URL",
    "ROSTER_API__TIMEOUT_SECS",
    "ROSTER_UI__SURFACE_ERRORS",
];

#[test]
fn test_layering_file_env_and_flag() {
    for var in ENV_VARS {
        env::remove_var(var);
    }

    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("roster.toml"),
        "[api]\nbase_url = \"http://file.example/users\"\ntimeout_secs = 5\n",
    )
    .unwrap();

    let previous_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();

    // roster.toml in the working directory is picked up without --config
    let from_file = RosterConfig::load(None);

    env::set_var("ROSTER_API__BASE_URL", "http://env.example/users");
    env::set_var("ROSTER_UI__SURFACE_ERRORS", "true");
    let from_env = RosterConfig::load(None);

    for var in ENV_VARS {
        env::remove_var(var);
    }
    env::set_current_dir(previous_dir).unwrap();

    let from_file = from_file.unwrap();
    assert_eq!(from_file.api.base_url, "http://file.example/users");
    assert_eq!(from_file.api.timeout_secs, Some(5));
    assert!(!from_file.ui.surface_errors);

    // Environment wins over the file; untouched keys keep the file value
    let mut config = from_env.unwrap();
    assert_eq!(config.api.base_url, "http://env.example/users");
    assert_eq!(config.api.timeout_secs, Some(5));
    assert!(config.ui.surface_errors);

    // --base-url wins over both
    config.override_base_url(Some("http://flag.example/users".to_string()));
    assert_eq!(config.api.base_url, "http://flag.example/users");
}
