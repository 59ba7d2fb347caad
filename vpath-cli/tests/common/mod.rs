//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated working and home directory
//! - Command builder helpers for common patterns
//! - Output helpers for text and JSON results

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads; cleared so the host cannot leak in.
const VPATH_ENV: [&str; 3] = ["VPATH_OS", "VPATH_OUTPUT_FORMAT", "VPATH_LOG_MODE"];

/// Test environment with an isolated working directory.
///
/// The binary runs with its current directory and `HOME` pointing into a
/// fresh temporary directory, so no project or user config is picked up
/// unless a test writes one.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with no `--os` flag.
    ///
    /// Semantics default to the host unless a config file or the
    /// environment selects otherwise.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("vpath").expect("Failed to find vpath binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in VPATH_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder pinned to the given semantics.
    pub fn command(&self, os: &str) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--os").arg(os);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create an empty file, creating parent directories as needed.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, "").expect("Failed to create test file");
        path
    }

    /// Write a project config file `vpath.yaml` in the working directory.
    pub fn write_project_config(&self, yaml: &str) {
        std::fs::write(self.temp_path.join("vpath.yaml"), yaml)
            .expect("Failed to write project config");
    }

    /// Write the user config file under the isolated home directory.
    pub fn write_user_config(&self, yaml: &str) {
        let dir = self.create_dir(".vpath");
        std::fs::write(dir.join("config.yaml"), yaml).expect("Failed to write user config");
    }

    /// Run a command under `os` semantics and return trimmed stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn stdout(&self, os: &str, args: &[&str]) -> String {
        let output = self
            .command(os)
            .args(args)
            .output()
            .expect("Failed to run vpath");

        assert!(
            output.status.success(),
            "vpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end_matches('\n')
            .to_string()
    }

    /// Run a command under `os` semantics with JSON output and parse it.
    pub fn json(&self, os: &str, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        serde_json::from_str(&self.stdout(os, &full)).expect("Output is not valid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
