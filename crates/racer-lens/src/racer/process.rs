use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::{
    config::RacerSettings,
    racer::{RacerBackend, RacerError, RacerQuery},
};

/// Spawns the racer executable once per query.
#[derive(Debug, Clone, Default)]
pub struct RacerProcess {
    settings: RacerSettings,
}

impl RacerProcess {
    pub fn new(settings: RacerSettings) -> Self {
        Self {
            settings,
        }
    }

    fn command(
        &self,
        query: &RacerQuery,
    ) -> Command {
        let mut command = Command::new(&self.settings.command);
        command
            .args(query.arguments())
            .args(&self.settings.extra_args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

impl RacerBackend for RacerProcess {
    async fn run(
        &self,
        query: &RacerQuery,
    ) -> Result<String, RacerError> {
        debug!("Running {} {:?}", self.settings.command, query.arguments());

        let mut child = self.command(query).spawn().map_err(|source| RacerError::Spawn {
            command: self.settings.command.clone(),
            source,
        })?;

        let stdin = child.stdin.take();
        let buffer = query.buffer.as_bytes();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(buffer).await?;
                stdin.shutdown().await?;
            }
            Ok::<(), std::io::Error>(())
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        if let Err(e) = fed {
            // Racer may exit before draining stdin; its exit status decides.
            warn!("Failed to write buffer to racer stdin: {e}");
        }
        let output = output?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(RacerError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/racer/process_tests.rs"]
mod tests;
