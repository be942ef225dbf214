//! Player vertical state machine
//!
//! The player never moves horizontally. Jumps rise one cell per tick to
//! `JUMP_PEAK` and fall straight back; a crouch lasts `CROUCH_TICKS`.
//! Commands are only accepted while grounded and are dropped otherwise.

use crate::consts::{CROUCH_TICKS, JUMP_PEAK};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalState {
    #[default]
    Grounded,
    Jumping { height: u8, rising: bool },
    Crouching { ticks_left: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Fixed column, also the collision lane
    pub lane: i32,
    pub state: VerticalState,
}

impl Player {
    pub fn new(lane: i32) -> Self {
        Self {
            lane,
            state: VerticalState::Grounded,
        }
    }

    /// Current height above the ground (0 unless jumping)
    pub fn height(&self) -> u8 {
        match self.state {
            VerticalState::Jumping { height, .. } => height,
            _ => 0,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.state == VerticalState::Grounded
    }

    pub fn is_crouching(&self) -> bool {
        matches!(self.state, VerticalState::Crouching { .. })
    }

    /// Start a jump. Returns false (and does nothing) unless grounded.
    pub fn jump(&mut self) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.state = VerticalState::Jumping {
            height: 1,
            rising: JUMP_PEAK > 1,
        };
        true
    }

    /// Start a crouch. Returns false (and does nothing) unless grounded.
    pub fn crouch(&mut self) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.state = VerticalState::Crouching {
            ticks_left: CROUCH_TICKS,
        };
        true
    }

    /// Run the jump/crouch timers for one tick
    pub fn tick(&mut self) {
        self.state = match self.state {
            VerticalState::Grounded => VerticalState::Grounded,
            VerticalState::Jumping {
                height,
                rising: true,
            } => {
                let height = height + 1;
                VerticalState::Jumping {
                    height,
                    rising: height < JUMP_PEAK,
                }
            }
            VerticalState::Jumping {
                height,
                rising: false,
            } => match height {
                0 | 1 => VerticalState::Grounded,
                h => VerticalState::Jumping {
                    height: h - 1,
                    rising: false,
                },
            },
            VerticalState::Crouching { ticks_left } => match ticks_left {
                0 | 1 => VerticalState::Grounded,
                t => VerticalState::Crouching { ticks_left: t - 1 },
            },
        };
    }
}
