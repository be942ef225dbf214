//! Session control loop
//!
//! Merges the fixed-rate clock, the input channel and the quit signal into one
//! ordered stream. The loop is the only code touching the session state and
//! the surface, so none of it is locked. Each message is handled to
//! completion before the next `select!`.

use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, select};

use crate::error::Result;
use crate::input::{InputEvent, Key};
use crate::renderer::{Surface, draw_frame, draw_intro};
use crate::settings::{Icons, Settings};
use crate::sim::{GameEvent, GamePhase, GameState, apply_command, tick};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitReason {
    /// Lives ran out
    GameOver,
    /// Player pressed Escape; the whole application should exit
    Escape,
}

/// Final report of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub score: u64,
    /// Simulation ticks played
    pub ticks: u64,
    pub reason: QuitReason,
}

/// One-shot quit signal for a session.
///
/// Raising consumes the sender, so a second raise is a no-op.
struct QuitSignal {
    tx: Option<Sender<QuitReason>>,
    rx: Receiver<QuitReason>,
}

impl QuitSignal {
    fn new() -> Self {
        let (tx, rx) = crossbeam_channel::bounded(1);
        Self { tx: Some(tx), rx }
    }

    fn raise(&mut self, reason: QuitReason) {
        if let Some(tx) = self.tx.take() {
            // Capacity 1 and a single send: never blocks
            let _ = tx.send(reason);
        }
    }
}

/// A single session: state, glyphs and the intro timing
pub struct Game {
    pub state: GameState,
    icons: Icons,
    logo_ticks: u64,
    quit: QuitSignal,
}

impl Game {
    pub fn new(settings: &Settings, seed: u64, high_score: u64) -> Self {
        Self {
            state: GameState::new(settings, seed, high_score),
            icons: settings.icons,
            logo_ticks: settings.logo_ticks(),
            quit: QuitSignal::new(),
        }
    }

    /// Run until the player runs out of lives or presses Escape.
    ///
    /// `ticks` is the clock (normally `crossbeam_channel::tick`), `input` the
    /// forwarder's channel. A closed input channel ends the session as if
    /// Escape had been pressed.
    pub fn run<S: Surface>(
        &mut self,
        surface: &mut S,
        ticks: &Receiver<Instant>,
        input: &Receiver<InputEvent>,
    ) -> Result<SessionOutcome> {
        log::info!("Session starting (seed {})", self.state.seed);
        draw_intro(&self.state, &self.icons, self.logo_ticks, surface)?;

        let quit = self.quit.rx.clone();
        let reason = loop {
            // A raised quit wins over anything else that is ready
            if let Ok(reason) = quit.try_recv() {
                break reason;
            }

            select! {
                recv(quit) -> reason => {
                    if let Ok(reason) = reason {
                        break reason;
                    }
                }
                recv(ticks) -> _ => self.on_tick(surface)?,
                recv(input) -> event => match event {
                    Ok(event) => self.on_input(event),
                    Err(_) => {
                        log::warn!("Input channel closed");
                        self.quit.raise(QuitReason::Escape);
                    }
                },
            }
        };

        let outcome = SessionOutcome {
            score: self.state.stats.score,
            ticks: self.state.time_ticks,
            reason,
        };
        log::info!(
            "Session ended: {:?}, score {} after {} ticks",
            outcome.reason,
            outcome.score,
            outcome.ticks
        );
        Ok(outcome)
    }

    fn on_tick<S: Surface>(&mut self, surface: &mut S) -> Result<()> {
        match self.state.phase {
            GamePhase::Intro => {
                self.state.intro_ticks += 1;
                draw_intro(&self.state, &self.icons, self.logo_ticks, surface)
            }
            GamePhase::Running => {
                for event in tick(&mut self.state) {
                    log_event(event);
                }
                if self.state.is_over() {
                    self.quit.raise(QuitReason::GameOver);
                }
                draw_frame(&self.state, &self.icons, surface)
            }
            GamePhase::GameOver => Ok(()),
        }
    }

    fn on_input(&mut self, event: InputEvent) {
        let InputEvent::Key(key) = event else {
            return;
        };

        if key == Key::Escape {
            self.quit.raise(QuitReason::Escape);
            return;
        }

        match self.state.phase {
            GamePhase::Intro => {
                log::debug!("Intro dismissed");
                self.state.phase = GamePhase::Running;
            }
            GamePhase::Running => {
                if let Some(command) = key.command() {
                    if !apply_command(&mut self.state, command) {
                        log::trace!("{command:?} dropped (player not grounded)");
                    }
                }
            }
            GamePhase::GameOver => {}
        }
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::HazardPassed { score } => log::debug!("Hazard passed, score {score}"),
        GameEvent::HazardHit { lives } => log::debug!("Hazard hit, {lives} lives left"),
        GameEvent::PickupCollected { lives } => log::debug!("Pickup collected, {lives} lives"),
        GameEvent::PickupInjected => log::debug!("Pickup injected"),
        GameEvent::GameOver { score } => log::info!("Game over with score {score}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LOW_OFFSET;
    use crate::renderer::FrameBuffer;
    use crate::sim::{Entity, EntityKind};

    fn game() -> Game {
        let settings = Settings {
            logo_secs: 0,
            ..Default::default()
        };
        Game::new(&settings, 77, 0)
    }

    #[test]
    fn test_escape_on_intro_quits_application() {
        let mut game = game();
        let mut fb = FrameBuffer::new(60, 20);
        let (_tick_tx, ticks) = crossbeam_channel::unbounded();
        let (input_tx, input) = crossbeam_channel::unbounded();
        input_tx.send(InputEvent::Key(Key::Escape)).unwrap();

        let outcome = game.run(&mut fb, &ticks, &input).unwrap();
        assert_eq!(outcome.reason, QuitReason::Escape);
        assert_eq!(outcome.score, 0);
        assert_eq!(game.state.phase, GamePhase::Intro);
        // Intro drawn once on entry
        assert_eq!(fb.commits(), 1);
    }

    #[test]
    fn test_key_starts_running_and_commands_apply() {
        let mut game = game();
        game.on_input(InputEvent::Other);
        assert_eq!(game.state.phase, GamePhase::Intro);
        game.on_input(InputEvent::Key(Key::Other));
        assert_eq!(game.state.phase, GamePhase::Running);

        game.on_input(InputEvent::Key(Key::Up));
        assert_eq!(game.state.player.height(), 1);
        // Crouch while airborne is dropped
        game.on_input(InputEvent::Key(Key::Down));
        assert!(!game.state.player.is_crouching());
    }

    #[test]
    fn test_intro_ticks_do_not_simulate() {
        let mut game = game();
        let mut fb = FrameBuffer::new(60, 20);
        let before = game.state.entities.clone();
        game.on_tick(&mut fb).unwrap();
        game.on_tick(&mut fb).unwrap();
        assert_eq!(game.state.entities, before);
        assert_eq!(game.state.intro_ticks, 2);
        assert_eq!(game.state.time_ticks, 0);
        assert_eq!(fb.commits(), 2);
    }

    #[test]
    fn test_last_life_ends_session_from_tick() {
        let mut game = game();
        game.state.phase = GamePhase::Running;
        game.state.entities = vec![Entity::new(EntityKind::Hazard, 3, LOW_OFFSET, 0)];
        game.state.stats.lives = 1;
        game.state.stats.score = 12;

        let mut fb = FrameBuffer::new(60, 20);
        let (tick_tx, ticks) = crossbeam_channel::unbounded();
        let (_input_tx, input) = crossbeam_channel::unbounded::<InputEvent>();
        for _ in 0..5 {
            tick_tx.send(Instant::now()).unwrap();
        }

        let outcome = game.run(&mut fb, &ticks, &input).unwrap();
        assert_eq!(
            outcome,
            SessionOutcome {
                score: 12,
                ticks: 1,
                reason: QuitReason::GameOver
            }
        );
        assert_eq!(game.state.phase, GamePhase::GameOver);
        assert_eq!(game.state.high_score, 12);
        // Remaining ticks were never consumed
        assert_eq!(ticks.len(), 4);
        // Intro frame plus the final gameplay frame
        assert_eq!(fb.commits(), 2);
    }

    #[test]
    fn test_closed_input_channel_quits() {
        let mut game = game();
        let mut fb = FrameBuffer::new(60, 20);
        let (_tick_tx, ticks) = crossbeam_channel::unbounded();
        let (input_tx, input) = crossbeam_channel::unbounded::<InputEvent>();
        drop(input_tx);
        let outcome = game.run(&mut fb, &ticks, &input).unwrap();
        assert_eq!(outcome.reason, QuitReason::Escape);
    }

    #[test]
    fn test_quit_signal_raises_once() {
        let mut quit = QuitSignal::new();
        quit.raise(QuitReason::GameOver);
        quit.raise(QuitReason::Escape);
        assert_eq!(quit.rx.try_recv(), Ok(QuitReason::GameOver));
        assert!(quit.rx.try_recv().is_err());
    }
}
