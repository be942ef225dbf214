//! Cell-grid rendering module
//!
//! The game draws into any [`Surface`]: a grid of character cells that is
//! filled cell by cell and then committed as one whole frame.

pub mod draw;
pub mod frame;

pub use draw::{draw_frame, draw_intro};
pub use frame::FrameBuffer;

use crate::error::Result;

/// A cell-addressable display
pub trait Surface {
    /// Write one glyph into the pending frame; out-of-range cells are ignored
    fn set_cell(&mut self, x: i32, y: i32, glyph: char);

    /// Present the pending frame and start a blank one
    fn commit_frame(&mut self) -> Result<()>;
}
