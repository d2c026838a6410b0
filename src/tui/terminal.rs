use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture,
    },
    execute, queue,
    style::Print,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::{self, Stdout, Write};
use tracing::warn;

use crate::error::{PeopleSearchError, Result};
use crate::view::Frame;

fn terminal_error(context: &str, err: io::Error) -> PeopleSearchError {
    PeopleSearchError::Terminal(format!("{context}: {err}"))
}

/// Raw-mode, alternate-screen terminal with mouse, focus and paste reporting
///
/// Dropping the guard restores the terminal, including on early returns
/// and panics unwinding through the event loop.
pub struct TerminalGuard {
    stdout: Stdout,
    width: u16,
    height: u16,
}

impl TerminalGuard {
    /// Switch the terminal into widget mode
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| terminal_error("Failed to enable raw mode", e))?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            EnableBracketedPaste
        ) {
            let _ = disable_raw_mode();
            return Err(terminal_error("Failed to set up terminal", e));
        }

        let (width, height) = terminal::size().unwrap_or((80, 24));
        Ok(Self {
            stdout,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Paint `frame` over the whole screen
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        queue!(self.stdout, Hide, MoveTo(0, 0), Clear(ClearType::All))?;
        for (row, line) in frame.lines().iter().enumerate() {
            queue!(self.stdout, MoveTo(0, row as u16), Print(line))?;
        }
        if let Some((col, row)) = frame.cursor() {
            queue!(self.stdout, MoveTo(col, row), Show)?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(
            self.stdout,
            DisableBracketedPaste,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen,
            Show
        ) {
            warn!("Failed to restore terminal: {}", e);
        }
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {}", e);
        }
    }
}
