//! Player contact with hazards and pickups
//!
//! Runs once per tick after entities and player timers have advanced.
//! Only entities standing in the player's lane are considered.

use super::entity::{Entity, EntityKind};
use super::player::Player;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::MAX_LIVES;

/// Outcome of an entity meeting the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Hazard in the lane but cleared by a jump or crouch
    Avoided,
    /// Hazard struck the player
    Hit,
    /// Pickup collected
    Collected,
}

/// Check a single entity against the player (pure)
pub fn check_contact(player: &Player, entity: &Entity) -> Option<Contact> {
    if !entity.is_active() || entity.x != player.lane {
        return None;
    }

    match entity.kind {
        EntityKind::Pickup => Some(Contact::Collected),
        EntityKind::Hazard => {
            // High hazards pass over a crouching player
            if player.is_crouching() && entity.is_high() {
                return Some(Contact::Avoided);
            }
            if i32::from(player.height()) <= i32::from(entity.vertical_offset) - 1 {
                Some(Contact::Hit)
            } else {
                Some(Contact::Avoided)
            }
        }
    }
}

/// Resolve every contact in pool order, updating lives and phase.
///
/// Stops at the hit that takes the last life; later entities in the pool are
/// not examined once the session is over.
pub fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for entity in state.entities.iter_mut() {
        let Some(contact) = check_contact(&state.player, entity) else {
            continue;
        };

        match contact {
            Contact::Avoided => {}
            Contact::Hit => {
                entity.struck = true;
                state.stats.lives = state.stats.lives.saturating_sub(1);
                events.push(GameEvent::HazardHit {
                    lives: state.stats.lives,
                });
                if state.stats.lives == 0 {
                    state.phase = GamePhase::GameOver;
                    if state.stats.score > state.high_score {
                        state.high_score = state.stats.score;
                    }
                    events.push(GameEvent::GameOver {
                        score: state.stats.score,
                    });
                    break;
                }
            }
            Contact::Collected => {
                state.stats.lives = (state.stats.lives + 1).min(MAX_LIVES);
                entity.deactivate();
                events.push(GameEvent::PickupCollected {
                    lives: state.stats.lives,
                });
            }
        }
    }
}
