//! Milestone video playback
//!
//! egui cannot decode video, so playback is delegated to an external program:
//! either a configured player (whose exit is the natural end of playback) or
//! the platform opener, which hands the file to whatever the desktop prefers.

use std::process::{Child, Command};

use tracing::{debug, warn};

use crate::config::VideoSettings;

/// Error type for starting playback
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("Failed to start video player '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No video player available on this platform")]
    Unsupported,
}

/// Surface that plays one milestone video at a time
pub trait MediaPlayer: Send {
    /// Start playing `url` from the beginning
    fn play(&mut self, url: &str) -> Result<(), PlaybackError>;

    /// Whether the current video finished on its own
    fn has_ended(&mut self) -> bool;

    /// Stop playback and rewind
    fn stop(&mut self);
}

/// Plays videos through an external program
pub struct SystemPlayer {
    program: Option<String>,
    args: Vec<String>,
    child: Option<Child>,
}

impl SystemPlayer {
    pub fn new(program: Option<String>, args: Vec<String>) -> Self {
        Self {
            program: program.filter(|p| !p.trim().is_empty()),
            args,
            child: None,
        }
    }

    pub fn from_settings(settings: &VideoSettings) -> Self {
        Self::new(Some(settings.player.clone()), settings.player_args.clone())
    }

    /// Whether the player's exit can be observed as end of playback
    pub fn is_dedicated(&self) -> bool {
        self.program.is_some()
    }

    fn opener_command(url: &str) -> Result<Command, PlaybackError> {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            return Ok(cmd);
        }

        #[cfg(target_os = "linux")]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            return Ok(cmd);
        }

        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            return Ok(cmd);
        }

        #[allow(unreachable_code)]
        {
            let _ = url;
            Err(PlaybackError::Unsupported)
        }
    }
}

impl MediaPlayer for SystemPlayer {
    fn play(&mut self, url: &str) -> Result<(), PlaybackError> {
        self.stop();

        let mut cmd = match &self.program {
            Some(program) => {
                let mut cmd = Command::new(program);
                cmd.args(&self.args).arg(url);
                cmd
            }
            None => Self::opener_command(url)?,
        };

        let program = format!("{:?}", cmd.get_program());
        let child = cmd
            .spawn()
            .map_err(|source| PlaybackError::Spawn { program, source })?;
        debug!("Started video player (pid {}) for {}", child.id(), url);
        self.child = Some(child);
        Ok(())
    }

    fn has_ended(&mut self) -> bool {
        let Some(child) = self.child.as_mut() else {
            return false;
        };

        match child.try_wait() {
            // The platform opener exits as soon as it hands the file over,
            // so only a dedicated player's exit counts as end of playback.
            Ok(Some(_)) if self.program.is_some() => {
                self.child = None;
                true
            }
            Ok(Some(_)) => {
                self.child = None;
                false
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to poll video player: {}", e);
                self.child = None;
                false
            }
        }
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if self.program.is_some() {
                let _ = child.kill();
            }
            let _ = child.wait();
        }
    }
}

impl Drop for SystemPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}
