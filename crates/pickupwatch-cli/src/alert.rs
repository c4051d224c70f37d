//! Desktop notification and audible chime.
//!
//! Both are best effort: a missing notifier or sound player is logged and
//! the watch keeps running.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

/// Gap between the two chime pings.
const CHIME_GAP: Duration = Duration::from_millis(100);
const MAC_CHIME_SOUND: &str = "/System/Library/Sounds/Ping.aiff";

#[derive(Debug, Error)]
pub(crate) enum AlertError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed {
        program: &'static str,
        status: ExitStatus,
    },
}

/// Something that can tell the user stock was found.
pub(crate) trait AlertSink {
    async fn notify(&self, title: &str, message: &str) -> Result<(), AlertError>;
    async fn chime(&self) -> Result<(), AlertError>;
}

/// Raises a notification then plays the chime, logging any failure.
pub(crate) async fn fire_alert<S: AlertSink>(sink: &S, title: &str, message: &str) {
    if let Err(e) = sink.notify(title, message).await {
        tracing::warn!(error = %e, "desktop notification failed");
    }
    if let Err(e) = sink.chime().await {
        tracing::warn!(error = %e, "chime failed");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notifier {
    Osascript,
    NotifySend,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chime {
    Afplay,
    Bell,
    None,
}

/// Alert sink backed by the host's notification and sound tools.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DesktopAlerts {
    notifier: Notifier,
    chime: Chime,
}

impl DesktopAlerts {
    pub(crate) fn for_current_platform() -> Self {
        if cfg!(target_os = "macos") {
            Self {
                notifier: Notifier::Osascript,
                chime: Chime::Afplay,
            }
        } else if cfg!(unix) {
            Self {
                notifier: Notifier::NotifySend,
                chime: Chime::Bell,
            }
        } else {
            Self {
                notifier: Notifier::None,
                chime: Chime::Bell,
            }
        }
    }

    /// Sink that does nothing; used with `--quiet`.
    pub(crate) fn silent() -> Self {
        Self {
            notifier: Notifier::None,
            chime: Chime::None,
        }
    }
}

impl AlertSink for DesktopAlerts {
    async fn notify(&self, title: &str, message: &str) -> Result<(), AlertError> {
        match self.notifier {
            Notifier::Osascript => {
                let script = format!(
                    "display notification \"{}\" with title \"{}\"",
                    escape_applescript(message),
                    escape_applescript(title)
                );
                spawn_detached("osascript", &["-e", &script])
            }
            Notifier::NotifySend => spawn_detached("notify-send", &[title, message]),
            Notifier::None => Ok(()),
        }
    }

    async fn chime(&self) -> Result<(), AlertError> {
        match self.chime {
            Chime::Afplay => {
                play("afplay", MAC_CHIME_SOUND).await?;
                tokio::time::sleep(CHIME_GAP).await;
                play("afplay", MAC_CHIME_SOUND).await
            }
            Chime::Bell => {
                use std::io::Write;

                let mut stdout = std::io::stdout();
                for ping in 0..2 {
                    if ping > 0 {
                        tokio::time::sleep(CHIME_GAP).await;
                    }
                    // Best effort; a closed stdout only loses the bell.
                    let _ = stdout.write_all(b"\x07");
                    let _ = stdout.flush();
                }
                Ok(())
            }
            Chime::None => Ok(()),
        }
    }
}

/// Starts `program` without waiting for it; the notification daemon owns
/// the rest of its lifetime.
fn spawn_detached(program: &'static str, args: &[&str]) -> Result<(), AlertError> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
        .map_err(|source| AlertError::Spawn { program, source })
}

async fn play(program: &'static str, sound: &str) -> Result<(), AlertError> {
    let status = Command::new(program)
        .arg(sound)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|source| AlertError::Spawn { program, source })?;
    if status.success() {
        Ok(())
    } else {
        Err(AlertError::Failed { program, status })
    }
}

/// Escapes a value for use inside an AppleScript string literal.
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
