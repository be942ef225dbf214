//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Driven one tick at a time by the game loop
//! - Seeded RNG only (spawn delays and heights)
//! - Stable iteration order (entity pool order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Contact, check_contact, resolve_collisions};
pub use entity::{Advance, Entity, EntityKind, spawn_pool};
pub use player::{Player, VerticalState};
pub use state::{Board, GameEvent, GamePhase, GameState, SessionStats};
pub use tick::{Command, apply_command, tick};
