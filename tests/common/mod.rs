//! Common test utilities for ado-npmrc tests

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Organization-scoped feed
pub const ORG_FEED: &str = "https://pkgs.dev.azure.com/myorg/_packaging/myfeed/npm/registry/";

/// Project-scoped feed
#[allow(dead_code)]
pub const PROJECT_FEED: &str =
    "https://pkgs.dev.azure.com/myorg/myproj/_packaging/myfeed/npm/registry/";

/// Registry key written for [`ORG_FEED`]
#[allow(dead_code)]
pub const ORG_KEY: &str = "//pkgs.dev.azure.com/myorg/_packaging/myfeed/npm/registry/";

/// A well-formed token
pub fn token() -> String {
    "A".repeat(52)
}

/// Scratch directory holding a project and a target .npmrc
pub struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn project_npmrc(&self) -> PathBuf {
        self.path().join("project/.npmrc")
    }

    pub fn target(&self) -> PathBuf {
        self.path().join("home/.npmrc")
    }

    pub fn write_project_npmrc(&self, content: &str) {
        let path = self.project_npmrc();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn write_target(&self, content: &str) {
        let path = self.target();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn read_target(&self) -> String {
        fs::read_to_string(self.target()).expect("read target")
    }

    /// The binary with HOME set to this workspace and no ambient token
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("ado-npmrc").expect("binary builds");
        cmd.env_remove("AZURE_DEVOPS_PAT")
            .env_remove("RUST_LOG")
            .env("HOME", self.path());
        cmd
    }

    /// [`Workspace::bare_command`] with both .npmrc paths pointed into this workspace
    pub fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.arg("--npmrc")
            .arg(self.project_npmrc())
            .arg("--target")
            .arg(self.target());
        cmd
    }
}
