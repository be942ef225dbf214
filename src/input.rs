//! Input events and the forwarding thread
//!
//! A single background thread blocks on the input source and hands each event
//! to the game loop over a rendezvous channel. The thread is blocked until the
//! loop takes the previous event, so nothing is dropped or reordered.

use std::thread;

use crossbeam_channel::{Receiver, Sender};

use crate::error::{GameError, Result};
use crate::sim::Command;

/// Logical keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Terminal resize, focus change, mouse, ... (ignored by the game)
    Other,
}

impl Key {
    /// Player command for this key, if any
    pub fn command(self) -> Option<Command> {
        match self {
            Key::Up => Some(Command::Jump),
            Key::Down => Some(Command::Crouch),
            Key::Escape | Key::Other => None,
        }
    }
}

/// A blocking, endless source of input events
pub trait InputSource {
    fn next_event(&mut self) -> std::io::Result<InputEvent>;
}

/// Start the forwarding thread and return the receiving end.
///
/// The thread exits when the source fails or the receiver is dropped.
pub fn spawn_input_forwarder<I>(source: I) -> Result<Receiver<InputEvent>>
where
    I: InputSource + Send + 'static,
{
    let (tx, rx) = crossbeam_channel::bounded(0);
    thread::Builder::new()
        .name("input-forwarder".into())
        .spawn(move || forward(source, tx))
        .map_err(GameError::InputThread)?;
    Ok(rx)
}

fn forward<I: InputSource>(mut source: I, tx: Sender<InputEvent>) {
    loop {
        let event = match source.next_event() {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Input source failed: {e}");
                return;
            }
        };
        if tx.send(event).is_err() {
            log::info!("Input receiver closed, stopping forwarder");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;

    /// Replays a fixed script, then fails
    struct Scripted(VecDeque<InputEvent>);

    impl InputSource for Scripted {
        fn next_event(&mut self) -> io::Result<InputEvent> {
            self.0
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script done"))
        }
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(Key::Up.command(), Some(Command::Jump));
        assert_eq!(Key::Down.command(), Some(Command::Crouch));
        assert_eq!(Key::Escape.command(), None);
        assert_eq!(Key::Other.command(), None);
    }

    #[test]
    fn test_forwarder_preserves_order() {
        let script = vec![
            InputEvent::Key(Key::Up),
            InputEvent::Other,
            InputEvent::Key(Key::Down),
            InputEvent::Key(Key::Escape),
        ];
        let rx = spawn_input_forwarder(Scripted(script.clone().into())).unwrap();
        assert_eq!(rx.capacity(), Some(0));
        let received: Vec<_> = rx.iter().collect();
        assert_eq!(received, script);
    }
}
