//! # Screen
//!
//! ANSI drawing surface: cursor addressing, highlight, the board
//! border, and modal message boxes.
//!
//! A `Screen` is a thin handle over a write sink. Actors each own one
//! and draw only while holding the session lock, so interleaved
//! escape sequences cannot occur. Headless mode swaps stdout for
//! `io::sink()` so sessions can run under tests without a terminal.

use std::io::{self, Write};

use basilisk_shared::Cell;

/// Where a screen sends its bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenMode {
    /// Draw to stdout (the real terminal).
    Interactive,
    /// Discard all output (tests and simulations).
    Headless,
}

/// ANSI drawing surface.
pub struct Screen {
    out: Box<dyn Write + Send>,
}

impl Screen {
    /// Creates a screen for the given mode.
    #[must_use]
    pub fn new(mode: ScreenMode) -> Self {
        let out: Box<dyn Write + Send> = match mode {
            ScreenMode::Interactive => Box::new(io::stdout()),
            ScreenMode::Headless => Box::new(io::sink()),
        };
        Self { out }
    }

    /// Clears the whole screen and homes the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x1b[1;1H\x1b[2J")?;
        self.out.flush()
    }

    /// Moves the cursor to `cell` (1-based row/column).
    pub fn move_to(&mut self, cell: Cell) -> io::Result<()> {
        write!(self.out, "\x1b[{};{}f", cell.row, cell.col)
    }

    /// Draws one glyph at `cell`.
    pub fn put(&mut self, cell: Cell, glyph: char) -> io::Result<()> {
        self.move_to(cell)?;
        write!(self.out, "{glyph}")
    }

    /// Switches to highlighted text (dark on light).
    pub fn highlight(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x1b[30m\x1b[47m")
    }

    /// Switches back to normal text.
    pub fn normal(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x1b[39m\x1b[49m")
    }

    /// Writes a string at the current cursor position.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    /// Flushes buffered output so it actually reaches the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Draws the rectangular board border: `+` corners, `-` and `|`
    /// edges, rows 1..=height and columns 1..=width.
    pub fn draw_border(&mut self, width: i16, height: i16) -> io::Result<()> {
        let horizontal: String = "-".repeat(usize::from(width as u16).saturating_sub(2));

        self.move_to(Cell::new(1, 1))?;
        write!(self.out, "+{horizontal}+")?;

        for row in 2..height {
            self.put(Cell::new(row, 1), '|')?;
            self.put(Cell::new(row, width), '|')?;
        }

        self.move_to(Cell::new(height, 1))?;
        write!(self.out, "+{horizontal}+")?;
        self.flush()
    }

    /// Draws a highlighted modal box centered on the board, one `+`
    /// framed border around the given lines.
    ///
    /// All lines are padded to the width of the first line, matching
    /// the box frame. The caller is responsible for waiting on the
    /// confirm key afterwards.
    pub fn message_box(
        &mut self,
        board_width: i16,
        board_height: i16,
        lines: &[&str],
    ) -> io::Result<()> {
        let line_len = lines.first().map_or(0, |line| line.len());
        let left = (board_width - line_len as i16) / 2 - 2;
        let mut top = (board_height - lines.len() as i16) / 2;

        self.highlight()?;

        let horizontal: String = "-".repeat(line_len + 4);
        self.move_to(Cell::new(top, left))?;
        write!(self.out, "+{horizontal}+")?;
        top += 1;

        for line in lines {
            self.move_to(Cell::new(top, left))?;
            write!(self.out, "|  {line:<line_len$}  |")?;
            top += 1;
        }

        self.move_to(Cell::new(top, left))?;
        write!(self.out, "+{horizontal}+")?;

        self.normal()?;
        self.flush()
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen").finish_non_exhaustive()
    }
}
