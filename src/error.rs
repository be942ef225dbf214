//! Crate error type
//!
//! The simulation itself never fails; everything here comes from the
//! terminal, the input thread, or reading a settings file.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Terminal setup, frame commit or restore failed
    #[error("terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    /// The input forwarding thread could not be started
    #[error("failed to spawn input thread: {0}")]
    InputThread(#[source] std::io::Error),

    #[error("failed to read settings from {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
