//! Session state and core simulation types
//!
//! Everything one play-through owns lives here. Nothing is shared between
//! sessions except the high score the handler passes in.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Entity, spawn_pool};
use super::player::Player;
use crate::consts::MAX_LIVES;
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Logo and controls, waiting for a key
    Intro,
    /// Active gameplay
    Running,
    /// Run ended (terminal)
    GameOver,
}

/// Gameplay events produced by a tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    HazardPassed { score: u64 },
    HazardHit { lives: u8 },
    PickupCollected { lives: u8 },
    /// A recycled hazard came back as a pickup
    PickupInjected,
    GameOver { score: u64 },
}

/// Score and lives bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// Hazards passed; never decreases
    pub score: u64,
    /// Always within `0..=MAX_LIVES`
    pub lives: u8,
    /// Hazards passed since the last injected pickup
    pub spawn_counter: u32,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            score: 0,
            lives: MAX_LIVES,
            spawn_counter: 0,
        }
    }
}

/// Board geometry in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the spawn RNG was built from
    pub seed: u64,
    pub rng: Pcg32,
    pub board: Board,
    pub phase: GamePhase,
    pub player: Player,
    /// Fixed pool, iterated in order
    pub entities: Vec<Entity>,
    pub stats: SessionStats,
    /// Best score seen by this process, updated at game over
    pub high_score: u64,
    /// Hazards passed between injected pickups
    pub pickup_interval: u32,
    /// Next hazard to recycle becomes a pickup
    pub pickup_pending: bool,
    /// Simulation ticks while running
    pub time_ticks: u64,
    /// Clock ticks spent on the intro screen
    pub intro_ticks: u64,
}

impl GameState {
    /// Create a new session with a fresh entity pool
    pub fn new(settings: &Settings, seed: u64, high_score: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let board = Board {
            width: settings.board_width,
            height: settings.board_height,
        };
        let entities = spawn_pool(board.width, settings.pool_size, &mut rng);

        Self {
            seed,
            rng,
            board,
            phase: GamePhase::Intro,
            player: Player::new(settings.player_lane),
            entities,
            stats: SessionStats::default(),
            high_score,
            pickup_interval: settings.pickup_interval.max(1),
            pickup_pending: false,
            time_ticks: 0,
            intro_ticks: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let settings = Settings::default();
        let state = GameState::new(&settings, 42, 17);
        assert_eq!(state.phase, GamePhase::Intro);
        assert_eq!(state.stats.lives, MAX_LIVES);
        assert_eq!(state.stats.score, 0);
        assert_eq!(state.high_score, 17);
        assert_eq!(state.entities.len(), settings.pool_size);
        assert_eq!(state.player.lane, settings.player_lane);
        assert!(state.player.is_grounded());
    }

    #[test]
    fn test_same_seed_same_pool() {
        let settings = Settings::default();
        let a = GameState::new(&settings, 99, 0);
        let b = GameState::new(&settings, 99, 0);
        assert_eq!(a.entities, b.entities);
    }
}
