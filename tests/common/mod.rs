use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

pub fn run_ponto(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

/// Isolated HOME/XDG directories so tests never touch real config or tokens
pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
    api_url: Option<String>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
            api_url: None,
        }
    }

    /// Point the binary at a (mock) backend
    #[allow(dead_code)]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ponto"));
        cmd.args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .env_remove("RUST_LOG");

        match &self.api_url {
            Some(url) => cmd.env("PONTO_API_URL", url),
            None => cmd.env_remove("PONTO_API_URL"),
        };

        cmd.output().expect("failed to execute ponto binary")
    }

    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }

    /// Where the token file lands under this environment's data dir
    #[allow(dead_code)]
    pub fn token_path(&self) -> PathBuf {
        self.data.path().join("ponto").join("auth_token")
    }
}
