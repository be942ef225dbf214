//! Session handler: high score and the replay loop
//!
//! The high score lives only as long as the handler; it is never written to
//! disk. The handler keeps starting sessions until one ends with Escape.

use crossbeam_channel::Receiver;

use crate::error::Result;
use crate::game_loop::{Game, QuitReason, SessionOutcome};
use crate::input::InputEvent;
use crate::renderer::Surface;
use crate::settings::Settings;

#[derive(Debug, Default)]
pub struct SessionHandler {
    high_score: u64,
    sessions_played: u32,
    /// Application-level quit, distinct from a session's own quit
    done: bool,
}

impl SessionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn sessions_played(&self) -> u32 {
        self.sessions_played
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Build a fresh session seeded with the current high score
    pub fn new_session(&self, settings: &Settings, seed: u64) -> Game {
        Game::new(settings, seed, self.high_score)
    }

    /// Record a final score. Returns true if it set a new high score.
    pub fn report_result(&mut self, final_score: u64) -> bool {
        if final_score > self.high_score {
            log::info!("New high score: {} (was {})", final_score, self.high_score);
            self.high_score = final_score;
            true
        } else {
            false
        }
    }

    /// Book-keep a finished session; Escape ends the application
    pub fn finish(&mut self, outcome: &SessionOutcome) -> bool {
        self.sessions_played += 1;
        if outcome.reason == QuitReason::Escape {
            self.done = true;
        }
        self.report_result(outcome.score)
    }

    /// Play sessions back to back until the player quits.
    ///
    /// `open_surface` is called once per session; the surface is dropped
    /// (releasing the terminal) before the score summary is printed.
    pub fn run<S, F>(
        &mut self,
        settings: &Settings,
        input: &Receiver<InputEvent>,
        mut open_surface: F,
    ) -> Result<()>
    where
        S: Surface,
        F: FnMut(&Settings) -> Result<S>,
    {
        while !self.done {
            let seed = settings.seed.unwrap_or_else(rand::random);
            let mut game = self.new_session(settings, seed);

            let outcome = {
                let mut surface = open_surface(settings)?;
                let ticks = crossbeam_channel::tick(settings.tick_period());
                game.run(&mut surface, &ticks, input)?
            };

            let new_best = self.finish(&outcome);
            println!("Game over! Your score: {}", outcome.score);
            if new_best {
                println!("New high score!");
            }
        }

        println!(
            "Thanks for playing! Sessions: {}, high score: {}",
            self.sessions_played, self.high_score
        );
        Ok(())
    }
}
