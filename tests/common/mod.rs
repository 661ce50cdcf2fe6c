use std::path::PathBuf;

use assert_cmd::Command;
use assert_fs::TempDir;

pub const BIN_NAME: &str = "tabkeep";

/// A throwaway home directory; the binary keeps its data in `<home>/.tabkeep`.
pub struct TestHome {
    pub home: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.home.path().join(".tabkeep")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
        cmd.env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert()
    }
}
