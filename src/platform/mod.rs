//! Platform layer
//!
//! Terminal-backed implementations of the renderer's [`Surface`] and the
//! input module's [`InputSource`], both built on crossterm.
//!
//! [`Surface`]: crate::renderer::Surface
//! [`InputSource`]: crate::input::InputSource

pub mod terminal;

pub use terminal::{TerminalInput, TerminalSurface};
