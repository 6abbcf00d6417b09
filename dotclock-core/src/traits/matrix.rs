//! LED matrix display trait

use crate::mask::DirtyMask;

/// Font used by `MatrixDisplay::load_numeric`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// Seconds digits
    Small,
    Normal,
    Big,
    Extra,
}

/// Transition used when the back buffer is swapped in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Changed columns scroll in from the top
    ScrollDown,
    /// Changed columns scroll in from the bottom
    ScrollUp,
    /// Old content scrolls out, new content scrolls in
    ScrollBoth,
}

/// Double-buffered LED matrix with a column cursor
///
/// Text and numbers are drawn into the back buffer at the cursor, which
/// advances past each glyph. Nothing is visible until `swap_buffers`.
/// Text is raw font codes; bytes above 0x7F select special glyphs.
pub trait MatrixDisplay {
    /// Move the drawing cursor to column `col`
    fn set_cursor_x(&mut self, col: u8);

    /// Draw text in the standard font
    fn load_text(&mut self, text: &[u8]);

    /// Draw digits in the given font
    fn load_numeric(&mut self, digits: &[u8], font: FontSize);

    /// Overwrite one column with a raw bit pattern
    fn write_column(&mut self, pos: u8, bits: u8);

    /// Show the back buffer, rewriting only the columns covered by `mask`
    fn swap_buffers(&mut self, mask: DirtyMask, effect: Effect);

    /// Blank everything from the cursor to the end of the buffer
    fn clear_trailing_columns(&mut self);

    /// Start continuous horizontal scrolling of the buffer
    fn start_scroll(&mut self);

    /// Stop scrolling immediately
    fn stop_scroll(&mut self);

    /// Check if a scroll is still running
    fn scroll_active(&self) -> bool;

    /// Set matrix brightness level
    fn set_brightness(&mut self, level: u8);

    /// Rotate the screen orientation
    fn rotate_screen(&mut self);
}
