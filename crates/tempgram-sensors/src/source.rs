//! Raw snapshot sources.
//!
//! A source only obtains raw bytes; decoding is a separate concern. The
//! trait exists so the daemon can substitute a fixture file for the real
//! `sensors -j` invocation, which is also how the decode pipeline is tested
//! end to end.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Something that can produce one raw sensor payload per call.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Reads one raw sensor payload.
    async fn read_raw(&self) -> Result<Vec<u8>>;
}

/// Runs the lm-sensors utility and captures its JSON output.
#[derive(Debug, Clone)]
pub struct SensorsCommand {
    program: String,
    args: Vec<String>,
}

impl SensorsCommand {
    /// Creates a source that runs `sensors -j`.
    pub fn new() -> Self {
        Self {
            program: "sensors".to_string(),
            args: vec!["-j".to_string()],
        }
    }

    /// Creates a source running an arbitrary program, for non-standard
    /// sensor utility installs.
    pub fn with_command(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Default for SensorsCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotSource for SensorsCommand {
    async fn read_raw(&self) -> Result<Vec<u8>> {
        debug!("Running {} {}", self.program, self.args.join(" "));
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .await?;
        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: self.program.clone(),
                status: output.status,
            });
        }
        Ok(output.stdout)
    }
}

/// Reads a raw sensor payload from a file.
#[derive(Debug, Clone)]
pub struct FixtureFile {
    path: PathBuf,
}

impl FixtureFile {
    /// Creates a source backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotSource for FixtureFile {
    async fn read_raw(&self) -> Result<Vec<u8>> {
        debug!("Reading sensor fixture {}", self.path.display());
        Ok(tokio::fs::read(&self.path).await?)
    }
}
