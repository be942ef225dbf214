//! In-memory frame buffer
//!
//! Backs the terminal surface and doubles as a headless surface in tests.

use super::Surface;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<char>,
    /// Last committed frame
    committed: Vec<char>,
    commits: u64,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
            committed: vec![' '; width * height],
            commits: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Glyph in the pending (uncommitted) frame
    pub fn pending(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Glyph in the last committed frame
    pub fn cell(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|i| self.committed[i])
    }

    /// One committed row as a string (trailing blanks kept)
    pub fn row(&self, y: usize) -> String {
        self.committed
            .chunks(self.width.max(1))
            .nth(y)
            .map(|row| row.iter().collect())
            .unwrap_or_default()
    }

    /// Number of frames committed so far
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Swap the pending frame into the committed slot and blank the next one
    pub fn swap(&mut self) -> &[char] {
        std::mem::swap(&mut self.cells, &mut self.committed);
        self.cells.fill(' ');
        self.commits += 1;
        &self.committed
    }
}

impl Surface for FrameBuffer {
    fn set_cell(&mut self, x: i32, y: i32, glyph: char) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = glyph;
        }
    }

    fn commit_frame(&mut self) -> Result<()> {
        self.swap();
        Ok(())
    }
}
