// tests/common/mod.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

/// Temporary directory of input files, removed on drop.
#[derive(Debug)]
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::Builder::new()
                .prefix("word_freq_")
                .tempdir()
                .unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}

pub fn word_freq() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_word_freq"));
    cmd.env_remove("RUST_LOG");
    cmd
}
