//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{sample_feed, write_feed};

/// Isolated environment: a temp root holding the data directory and the
/// catalog file the binary is pointed at.
///
/// # Example
/// ```no_run
/// use vitrine_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_catalog();
/// let result = world.run(&["list", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    catalog: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment. No catalog file exists yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".vitrine");
        let catalog = temp_dir.path().join("produtos.json");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            catalog,
            env_vars: HashMap::new(),
        }
    }

    /// Write the standard sample feed as the catalog.
    pub fn with_sample_catalog(self) -> Self {
        self.with_catalog(&sample_feed())
    }

    /// Write `feed` as the catalog.
    pub fn with_catalog(self, feed: &Value) -> Self {
        write_feed(&self.catalog, feed).expect("Failed to write catalog");
        self
    }

    /// Write raw text as the catalog, for malformed-feed tests.
    pub fn with_raw_catalog(self, content: &str) -> Self {
        std::fs::write(&self.catalog, content).expect("Failed to write catalog");
        self
    }

    /// Write `<data-dir>/config.toml`.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Configure a CLI command with this environment's data dir and catalog.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--catalog")
            .arg(&self.catalog);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG").env_remove("VITRINE_PATH");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `vitrine` binary with `args` in this environment.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("vitrine")
            .map_err(|e| anyhow::anyhow!("Failed to find vitrine binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
