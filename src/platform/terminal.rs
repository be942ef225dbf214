//! crossterm terminal surface and key input
//!
//! The surface owns the terminal for the lifetime of one session: raw mode,
//! alternate screen and hidden cursor are set up in `open` and undone on drop.

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{
        self, BeginSynchronizedUpdate, DisableLineWrap, EnableLineWrap, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};

use crate::error::{GameError, Result};
use crate::input::{InputEvent, InputSource, Key};
use crate::renderer::{FrameBuffer, Surface};
use crate::settings::Settings;

pub struct TerminalSurface {
    out: Stdout,
    frame: FrameBuffer,
    /// Terminal size at open; output is clipped to it
    cols: u16,
    rows: u16,
}

impl TerminalSurface {
    /// Take over the terminal. Fails if raw mode or the alternate screen
    /// cannot be set up.
    pub fn open(settings: &Settings) -> Result<Self> {
        let (cols, rows) = terminal::size().map_err(GameError::Terminal)?;
        // The frame always holds the board plus its border; `present` clips
        // it to the terminal
        let width = (cols as usize).max(settings.board_width as usize + 1);
        let height = (rows as usize).max(settings.board_height as usize + 2);

        terminal::enable_raw_mode().map_err(GameError::Terminal)?;
        let mut out = stdout();
        if let Err(e) = execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            terminal::Clear(terminal::ClearType::All)
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(GameError::Terminal(e));
        }
        log::debug!("Terminal surface opened ({width}x{height})");

        Ok(Self {
            out,
            frame: FrameBuffer::new(width, height),
            cols,
            rows,
        })
    }

    fn present(&mut self) -> io::Result<()> {
        let width = self.frame.width();
        let (cols, rows) = (self.cols, self.rows);
        let cells = self.frame.swap();
        queue!(self.out, BeginSynchronizedUpdate)?;
        for (y, line) in visible_lines(cells, width, cols, rows) {
            queue!(self.out, cursor::MoveTo(0, y), Print(line))?;
        }
        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

/// Rows of a frame that fit a `cols` x `rows` terminal, each cut to `cols`
fn visible_lines(
    cells: &[char],
    width: usize,
    cols: u16,
    rows: u16,
) -> impl Iterator<Item = (u16, String)> + '_ {
    cells
        .chunks(width.max(1))
        .take(rows as usize)
        .zip(0..rows)
        .map(move |(row, y)| (y, row.iter().take(cols as usize).collect()))
}

impl Surface for TerminalSurface {
    fn set_cell(&mut self, x: i32, y: i32, glyph: char) {
        self.frame.set_cell(x, y, glyph);
    }

    fn commit_frame(&mut self) -> Result<()> {
        self.present().map_err(GameError::Terminal)
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, EnableLineWrap, cursor::Show, LeaveAlternateScreen) {
            log::warn!("Failed to restore terminal screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to disable raw mode: {e}");
        }
    }
}

/// Blocking key reader over crossterm's event queue
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

fn map_event(event: Event) -> InputEvent {
    match event {
        Event::Key(k) if k.kind == KeyEventKind::Press => InputEvent::Key(match k.code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }),
        _ => InputEvent::Other,
    }
}

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        event::read().map(map_event)
    }
}
