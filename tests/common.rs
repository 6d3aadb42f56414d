use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

#[allow(dead_code)]
pub const FIXTURE_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/catalog.json");

#[allow(dead_code)]
/// Command isolated from the caller's config and environment
pub fn tagpath(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("tagpath");
    cmd.env("TAGPATH_CONFIG_DIR", config_dir)
        .env_remove("TAGPATH_CATALOG")
        .env_remove("TAGPATH_LOG")
        .env_remove("RUST_LOG")
        .current_dir(config_dir);
    cmd
}

/// Command preloaded with the fixture catalog
#[allow(dead_code)]
pub fn tagpath_with_fixture(config_dir: &Path) -> Command {
    let mut cmd = tagpath(config_dir);
    cmd.arg("--catalog").arg(FIXTURE_CATALOG);
    cmd
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
