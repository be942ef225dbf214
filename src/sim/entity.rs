//! Hazards and pickups scrolling in from the right edge
//!
//! Entities are never removed. Once one scrolls past the left edge it is
//! reset to the right edge with a fresh delay and height.

use rand::Rng;

use crate::consts::{HIGH_OFFSET, LOW_OFFSET, POOL_PICKUP_STRIDE};

/// Entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Costs a life on contact, scores a point when it leaves the board
    Hazard,
    /// Restores a life on contact
    Pickup,
}

/// A moving object on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub kind: EntityKind,
    /// Board column; negative means inactive
    pub x: i32,
    /// Height above the ground line, fixed until the next recycle
    pub vertical_offset: u8,
    /// Ticks to wait before moving
    pub delay_ticks: u32,
    /// Hit the player on this pass (no score when it recycles)
    pub struck: bool,
    /// Hazard converted into a pickup; reverts on recycle
    pub injected: bool,
}

/// What happened to an entity during one `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Advance {
    pub recycled: bool,
    pub scored: bool,
}

impl Entity {
    pub fn new(kind: EntityKind, x: i32, vertical_offset: u8, delay_ticks: u32) -> Self {
        Self {
            kind,
            x,
            vertical_offset,
            delay_ticks,
            struck: false,
            injected: false,
        }
    }

    /// On the board and visible
    #[inline]
    pub fn is_active(&self) -> bool {
        self.x >= 0
    }

    /// Placed at head height (avoidable by crouching)
    #[inline]
    pub fn is_high(&self) -> bool {
        self.vertical_offset > LOW_OFFSET
    }

    /// Take the entity off the board; the next moving advance recycles it
    pub fn deactivate(&mut self) {
        self.x = -1;
        self.delay_ticks = 0;
    }

    /// Move one tick, recycling to the right edge once past the left edge
    pub fn advance<R: Rng>(&mut self, board_width: i32, rng: &mut R) -> Advance {
        if self.delay_ticks > 0 {
            self.delay_ticks -= 1;
            return Advance::default();
        }

        self.x -= 1;
        if self.x >= 0 {
            return Advance::default();
        }

        let scored = self.kind == EntityKind::Hazard && !self.struck;
        self.x = board_width;
        self.delay_ticks = rng.random_range(0..board_width.max(1) as u32);
        self.vertical_offset = random_offset(rng);
        self.struck = false;
        if self.injected {
            self.kind = EntityKind::Hazard;
            self.injected = false;
        }

        Advance {
            recycled: true,
            scored,
        }
    }

    /// Turn a freshly recycled hazard into a one-off pickup
    pub fn inject_pickup(&mut self) {
        if self.kind == EntityKind::Hazard {
            self.kind = EntityKind::Pickup;
            self.injected = true;
        }
    }
}

/// Low or high placement, uniformly
pub fn random_offset<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(LOW_OFFSET..=HIGH_OFFSET)
}

/// Create the initial entity pool, all waiting at the right edge.
///
/// Pairs of entities share a delay so arrivals are staggered by half a
/// board width; every `POOL_PICKUP_STRIDE`th slot is a pickup.
pub fn spawn_pool<R: Rng>(board_width: i32, count: usize, rng: &mut R) -> Vec<Entity> {
    (0..count)
        .map(|i| {
            let kind = if i % POOL_PICKUP_STRIDE == POOL_PICKUP_STRIDE - 1 {
                EntityKind::Pickup
            } else {
                EntityKind::Hazard
            };
            let stagger = u32::try_from(i / 2).unwrap_or(u32::MAX);
            let delay = stagger.saturating_mul((board_width / 2).max(0) as u32);
            Entity::new(kind, board_width, random_offset(rng), delay)
        })
        .collect()
}
