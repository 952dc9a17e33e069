// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides temp-dir fixtures for template and data files

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestSpace {
    dir: TempDir,
}

impl TestSpace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write fixture file");
        path
    }
}
