//! Fixed-period simulation tick
//!
//! One tick: advance every entity, run the player's timers, then resolve
//! contacts in the player's lane. Input commands are applied between ticks.

use super::collision::resolve_collisions;
use super::entity::EntityKind;
use super::state::{GameEvent, GamePhase, GameState};

/// Player commands derived from key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    Crouch,
}

/// Apply a command to the player. Returns false if it was dropped.
///
/// Only a running session accepts commands, and the player must be grounded.
pub fn apply_command(state: &mut GameState, command: Command) -> bool {
    if !state.is_running() {
        return false;
    }
    match command {
        Command::Jump => state.player.jump(),
        Command::Crouch => state.player.crouch(),
    }
}

/// Advance the session by one tick, returning what happened.
///
/// Does nothing unless the session is running.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;

    let width = state.board.width;
    for entity in state.entities.iter_mut() {
        let advance = entity.advance(width, &mut state.rng);
        if !advance.recycled {
            continue;
        }

        if advance.scored {
            state.stats.score += 1;
            state.stats.spawn_counter += 1;
            events.push(GameEvent::HazardPassed {
                score: state.stats.score,
            });
            if state.stats.spawn_counter >= state.pickup_interval {
                state.stats.spawn_counter = 0;
                state.pickup_pending = true;
            }
        }

        if state.pickup_pending && entity.kind == EntityKind::Hazard {
            entity.inject_pickup();
            state.pickup_pending = false;
            events.push(GameEvent::PickupInjected);
        }
    }

    state.player.tick();

    resolve_collisions(state, &mut events);

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{HIGH_OFFSET, LOW_OFFSET, MAX_LIVES};
    use crate::settings::Settings;
    use crate::sim::entity::Entity;

    fn running(entities: Vec<Entity>) -> GameState {
        let mut state = GameState::new(&Settings::default(), 12345, 0);
        state.phase = GamePhase::Running;
        state.entities = entities;
        state
    }

    #[test]
    fn test_tick_ignored_outside_running() {
        let mut state = GameState::new(&Settings::default(), 12345, 0);
        let before = state.entities.clone();
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.entities, before);
        assert_eq!(state.time_ticks, 0);
        assert!(!apply_command(&mut state, Command::Jump));
    }

    #[test]
    fn test_jump_over_low_hazard_scores() {
        // Hazard reaches lane 2 on the second tick
        let mut state = running(vec![Entity::new(EntityKind::Hazard, 4, LOW_OFFSET, 0)]);
        tick(&mut state);
        assert!(apply_command(&mut state, Command::Jump));
        let events = tick(&mut state);
        assert_eq!(state.entities[0].x, 2);
        assert!(events.is_empty());
        assert_eq!(state.stats.lives, MAX_LIVES);

        // Let it scroll off: x 1, 0, then recycle
        let mut passed = Vec::new();
        for _ in 0..3 {
            passed.extend(tick(&mut state));
        }
        assert_eq!(state.entities[0].x, 40);
        assert_eq!(state.stats.score, 1);
        assert_eq!(passed, vec![GameEvent::HazardPassed { score: 1 }]);
    }

    #[test]
    fn test_grounded_player_hit_by_low_hazard() {
        let mut state = running(vec![Entity::new(EntityKind::Hazard, 3, LOW_OFFSET, 0)]);
        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::HazardHit { lives: 2 }]);
        assert_eq!(state.stats.lives, 2);

        // Struck hazard does not score on the way out
        for _ in 0..3 {
            tick(&mut state);
        }
        assert_eq!(state.stats.score, 0);
    }

    #[test]
    fn test_crouch_under_high_hazard() {
        let mut state = running(vec![Entity::new(EntityKind::Hazard, 3, HIGH_OFFSET, 0)]);
        assert!(apply_command(&mut state, Command::Crouch));
        let events = tick(&mut state);
        assert!(events.is_empty());
        assert_eq!(state.stats.lives, MAX_LIVES);
    }

    #[test]
    fn test_pickup_restores_life_and_leaves_board() {
        let mut state = running(vec![Entity::new(EntityKind::Pickup, 3, LOW_OFFSET, 0)]);
        state.stats.lives = 2;
        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::PickupCollected { lives: 3 }]);
        assert!(state.entities[0].x < 0);

        // Recycled on the next tick, not collected twice
        let events = tick(&mut state);
        assert!(events.is_empty());
        assert_eq!(state.entities[0].x, 40);
    }

    #[test]
    fn test_pickup_injected_after_interval() {
        let mut settings = Settings::default();
        settings.pickup_interval = 2;
        let mut state = GameState::new(&settings, 5, 0);
        state.phase = GamePhase::Running;
        state.entities = vec![
            Entity::new(EntityKind::Hazard, 0, HIGH_OFFSET, 0),
            Entity::new(EntityKind::Hazard, 0, HIGH_OFFSET, 0),
            Entity::new(EntityKind::Hazard, 10, HIGH_OFFSET, 0),
        ];

        let events = tick(&mut state);
        assert_eq!(
            events,
            vec![
                GameEvent::HazardPassed { score: 1 },
                GameEvent::HazardPassed { score: 2 },
                GameEvent::PickupInjected,
            ]
        );
        // The hazard that completed the interval is the next spawn converted
        assert_eq!(state.entities[1].kind, EntityKind::Pickup);
        assert!(state.entities[1].injected);
        assert_eq!(state.entities[0].kind, EntityKind::Hazard);
        assert_eq!(state.stats.spawn_counter, 0);
    }

    #[test]
    fn test_last_life_lost_ends_session() {
        let mut state = running(vec![
            Entity::new(EntityKind::Hazard, 3, LOW_OFFSET, 0),
            Entity::new(EntityKind::Hazard, 10, LOW_OFFSET, 0),
        ]);
        state.stats.lives = 1;
        state.stats.score = 4;
        let events = tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, 4);
        assert_eq!(events.last(), Some(&GameEvent::GameOver { score: 4 }));

        // No further simulation once over
        let frozen = state.entities.clone();
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.entities, frozen);
    }
}
