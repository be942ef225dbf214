//! Crouch & Jump - a terminal side-scrolling obstacle game
//!
//! Core modules:
//! - `sim`: Seeded simulation (entities, player, collisions, tick)
//! - `game_loop`: Merges the fixed-rate clock with input events
//! - `session`: High score and the replay/quit supervisory loop
//! - `renderer`: Cell-grid drawing onto an abstract surface
//! - `platform`: Terminal surface and key input via crossterm
//! - `settings`: Board geometry, timing and glyphs

pub mod error;
pub mod game_loop;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{GameError, Result};
pub use game_loop::{Game, QuitReason, SessionOutcome};
pub use session::SessionHandler;
pub use settings::{Icons, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed clock period between simulation ticks
    pub const TICK_PERIOD_MS: u64 = 80;

    /// Board dimensions (cells)
    pub const BOARD_WIDTH: i32 = 40;
    pub const BOARD_HEIGHT: i32 = 6;

    /// Upper bounds accepted from a settings file
    pub const MAX_BOARD_WIDTH: i32 = 1000;
    pub const MAX_BOARD_HEIGHT: i32 = 200;
    pub const MAX_POOL_SIZE: usize = 256;
    pub const MAX_LOGO_SECS: u64 = 60;

    /// Column the player occupies; collisions are checked here
    pub const PLAYER_LANE: i32 = 2;

    /// Lives at session start, also the cap for pickups
    pub const MAX_LIVES: u8 = 3;

    /// Entities created at session start
    pub const POOL_SIZE: usize = 8;
    /// Every Nth pool slot starts as a pickup
    pub const POOL_PICKUP_STRIDE: usize = 4;
    /// Hazards passed between injected pickups
    pub const PICKUP_INTERVAL: u32 = 10;

    /// Vertical offsets: low hazards sit at the feet, high ones at the head
    pub const LOW_OFFSET: u8 = 1;
    pub const HIGH_OFFSET: u8 = 2;

    /// Jump apex height (rises to this, then falls back with no hang)
    pub const JUMP_PEAK: u8 = 2;
    /// Ticks a crouch lasts
    pub const CROUCH_TICKS: u8 = 3;

    /// How long the logo is shown before the intro text
    pub const LOGO_SECS: u64 = 3;
}
