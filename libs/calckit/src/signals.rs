//! Process signals that stop the server.

use std::fmt;

use anyhow::Context as _;

/// The signal that ended the serve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
        }
    }
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve with the first of Ctrl+C or SIGTERM. SIGTERM is only watched on unix.
///
/// # Errors
/// Fails when a handler cannot be installed; the caller decides whether that
/// stops the server.
pub async fn wait_for_shutdown() -> anyhow::Result<ShutdownSignal> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate =
            signal(SignalKind::terminate()).context("cannot install SIGTERM handler")?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res.context("cannot listen for Ctrl+C")?;
                Ok(ShutdownSignal::Interrupt)
            }
            _ = terminate.recv() => Ok(ShutdownSignal::Terminate),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .context("cannot listen for Ctrl+C")?;
        Ok(ShutdownSignal::Interrupt)
    }
}
