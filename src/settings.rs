//! Game settings and glyphs
//!
//! Loaded once at startup from an optional JSON file. Never saved.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Glyphs used by the renderer (read-only once a session starts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icons {
    pub player: char,
    pub hazard: char,
    pub pickup: char,
    /// Life counter in the HUD
    pub life: char,
    pub ground: char,
    pub border: char,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            player: '▆',
            hazard: '▣',
            pickup: '♥',
            life: '♥',
            ground: '▒',
            border: '░',
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    pub board_width: i32,
    pub board_height: i32,
    /// Column the player stands in
    pub player_lane: i32,

    // === Timing ===
    /// Clock period in milliseconds
    pub tick_period_ms: u64,
    /// Logo display time on the intro screen
    pub logo_secs: u64,

    // === Spawning ===
    pub pool_size: usize,
    /// Hazards passed before a pickup is injected
    pub pickup_interval: u32,
    /// Fixed RNG seed (random per session when unset)
    pub seed: Option<u64>,

    pub icons: Icons,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            player_lane: PLAYER_LANE,

            tick_period_ms: TICK_PERIOD_MS,
            logo_secs: LOGO_SECS,

            pool_size: POOL_SIZE,
            pickup_interval: PICKUP_INTERVAL,
            seed: None,

            icons: Icons::default(),
        }
    }
}

impl Settings {
    /// Environment variable naming an optional settings file
    pub const ENV_VAR: &'static str = "CROUCH_JUMP_SETTINGS";

    /// Load settings from the file named by `CROUCH_JUMP_SETTINGS`, or defaults
    pub fn load() -> Result<Self> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Parse a JSON settings file; missing fields fall back to defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| GameError::Settings {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings.validated())
    }

    /// Clamp geometry and timing into a playable range
    pub fn validated(mut self) -> Self {
        self.board_width = self.board_width.clamp(16, MAX_BOARD_WIDTH);
        self.board_height = self.board_height.clamp(4, MAX_BOARD_HEIGHT);
        self.player_lane = self.player_lane.clamp(1, self.board_width - 1);
        self.tick_period_ms = self.tick_period_ms.clamp(10, 1000);
        self.logo_secs = self.logo_secs.min(MAX_LOGO_SECS);
        self.pool_size = self.pool_size.clamp(1, MAX_POOL_SIZE);
        self.pickup_interval = self.pickup_interval.max(1);
        self
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Number of clock ticks the logo stays up
    pub fn logo_ticks(&self) -> u64 {
        self.logo_secs
            .saturating_mul(1000)
            .div_ceil(self.tick_period_ms.max(1))
    }
}
