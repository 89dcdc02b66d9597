//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full repaint from the top-left corner. The grid is small
//! and fixed in size, so there is no diffing against the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::LifeError;
use crate::fb::{CellStyle, FrameBuffer};

/// Worst case per cell: 24-bit foreground and background plus a 4-byte
/// UTF-8 glyph.
const MAX_CELL_BYTES: usize = 48;

/// Colour reset and newline at the end of every row.
const MAX_ROW_END_BYTES: usize = 8;

/// Cursor-home prefix.
const MAX_FRAME_PREFIX_BYTES: usize = 16;

/// Upper bound on the encoded size of a `width x height` frame, or `None`
/// when it does not fit in `usize`.
pub fn frame_bytes_upper_bound(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)?
        .checked_mul(MAX_CELL_BYTES)?
        .checked_add(height.checked_mul(MAX_ROW_END_BYTES)?)?
        .checked_add(MAX_FRAME_PREFIX_BYTES)
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Clear the screen and hide the cursor.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    /// Reset colours and attributes and show the cursor again.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()
    }

    /// Reserve room for encoding `width x height` frames up front, so
    /// painting never has to grow the buffer.
    pub fn reserve_frame(&mut self, width: usize, height: usize) -> Result<()> {
        let cells = width.saturating_mul(height);
        let bytes = frame_bytes_upper_bound(width, height)
            .ok_or(LifeError::ResourceExhaustion { cells })?;
        self.buf
            .try_reserve(bytes.saturating_sub(self.buf.len()))
            .map_err(|_| LifeError::ResourceExhaustion { cells })?;
        Ok(())
    }

    /// Paint a whole frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_full_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Starts at the top-left corner, then writes each row left to right followed
/// by a colour reset and a newline. This builds a sequence of crossterm
/// commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    for y in 0..fb.height() {
        let mut current_style: Option<CellStyle> = None;
        for cell in fb.row(y) {
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(Print('\n'))?;
    }

    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(style.fg))?;
    out.queue(SetBackgroundColor(style.bg))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;
    use crossterm::style::Color;

    fn encode(fb: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_full_into(fb, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn frame_starts_at_home_and_ends_rows_with_newline() {
        let fb = FrameBuffer::new(3, 2);
        let text = encode(&fb);

        assert!(text.starts_with("\x1b[1;1H"), "{text:?}");
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.ends_with("\x1b[0m\n"), "{text:?}");
    }

    #[test]
    fn style_is_emitted_once_per_run() {
        let red = CellStyle::bg(Color::DarkRed);
        let mut fb = FrameBuffer::new(4, 1);
        for x in 0..4 {
            fb.set(x, 0, Cell { ch: 'A', style: red });
        }

        let mut out = Vec::new();
        apply_style_into(&mut out, red).unwrap();
        let style_seq = String::from_utf8(out).unwrap();

        let text = encode(&fb);
        assert_eq!(text.matches(style_seq.as_str()).count(), 1);
        assert!(text.contains("AAAA"));
    }

    #[test]
    fn reserve_frame_covers_worst_case_frame() {
        // Alternate styles on every cell so each one re-emits its colours.
        let styles = [
            CellStyle::new(
                Color::Rgb { r: 255, g: 255, b: 255 },
                Color::Rgb { r: 200, g: 200, b: 200 },
            ),
            CellStyle::new(Color::AnsiValue(100), Color::Rgb { r: 255, g: 128, b: 0 }),
        ];
        let mut fb = FrameBuffer::new(17, 5);
        for y in 0..5 {
            for x in 0..17 {
                let style = styles[(x + y) % 2];
                fb.set(x, y, Cell { ch: '\u{1F331}', style });
            }
        }

        let mut term = TerminalRenderer::with_writer(Vec::new());
        term.reserve_frame(17, 5).unwrap();
        let reserved = term.buf.capacity();
        term.draw(&fb).unwrap();

        assert!(term.buf.len() <= frame_bytes_upper_bound(17, 5).unwrap());
        assert_eq!(term.buf.capacity(), reserved);
    }

    #[test]
    fn reserve_frame_reports_exhaustion() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let err = term.reserve_frame(usize::MAX / 8, 2).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LifeError>(),
            Some(LifeError::ResourceExhaustion { .. })
        ));
        assert!(term.reserve_frame(usize::MAX / 64, 1).is_err());
    }

    #[test]
    fn exit_resets_colour_and_shows_cursor() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        term.exit().unwrap();
        let text = String::from_utf8(term.into_inner()).unwrap();
        assert!(text.contains("\x1b[0m"));
        assert!(text.contains("\x1b[?25h"));
    }
}
