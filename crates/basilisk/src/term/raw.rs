//! # Raw Mode & Signals
//!
//! Switches stdin to non-canonical, no-echo mode for the duration of
//! the game and guarantees the terminal is restored on every exit
//! path: normal return (guard drop), and SIGINT/SIGTERM (handler
//! restores, then exits the process immediately - session teardown is
//! intentionally skipped because the process is ending).

// termios and signal(2) need the raw C interface.
#![allow(unsafe_code)]

use std::io::{self, Write};
use std::mem;

/// Escape sequence that re-enables the cursor.
const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

/// Escape sequence that hides the cursor.
const HIDE_CURSOR: &[u8] = b"\x1b[?25l";

/// Guard holding the terminal in raw mode.
///
/// Created once at startup; dropping it restores the saved termios
/// state and re-shows the cursor. Creating a second guard while one
/// is alive would save already-raw state, so the binary keeps exactly
/// one.
pub struct RawMode {
    saved: libc::termios,
}

impl RawMode {
    /// Enables raw mode on stdin and hides the cursor.
    ///
    /// # Errors
    ///
    /// Returns the OS error when stdin is not a terminal or the
    /// termios calls fail.
    pub fn enable() -> io::Result<Self> {
        // SAFETY: tcgetattr/tcsetattr only write into the termios
        // struct we hand them.
        let saved = unsafe {
            let mut current: libc::termios = mem::zeroed();
            if libc::tcgetattr(libc::STDIN_FILENO, &mut current) != 0 {
                return Err(io::Error::last_os_error());
            }
            let saved = current;

            // Non-canonical, no echo: bytes arrive unbuffered and the
            // terminal stops printing them.
            current.c_lflag &= !(libc::ICANON | libc::ECHO);
            if libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &current) != 0 {
                return Err(io::Error::last_os_error());
            }
            saved
        };

        let mut out = io::stdout();
        out.write_all(HIDE_CURSOR)?;
        out.flush()?;

        Ok(Self { saved })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        // SAFETY: restoring the termios state captured in enable().
        unsafe {
            let _ = libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &self.saved);
        }
        let mut out = io::stdout();
        let _ = out.write_all(SHOW_CURSOR);
        let _ = out.flush();
    }
}

/// Installs SIGINT and SIGTERM handlers that restore the terminal and
/// exit immediately.
pub fn install_signal_handlers() {
    // SAFETY: the handler only calls async-signal-safe functions
    // (tcgetattr, tcsetattr, write, _exit).
    unsafe {
        let handler = on_terminating_signal as *const () as libc::sighandler_t;
        libc::signal(libc::SIGINT, handler);
        libc::signal(libc::SIGTERM, handler);
    }
}

/// Restores cooked mode and exits with the conventional 128+signal
/// status. Runs in signal context: async-signal-safe calls only.
extern "C" fn on_terminating_signal(signal: libc::c_int) {
    unsafe {
        let mut current: libc::termios = mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut current) == 0 {
            current.c_lflag |= libc::ICANON | libc::ECHO;
            let _ = libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &current);
        }
        let _ = libc::write(
            libc::STDOUT_FILENO,
            SHOW_CURSOR.as_ptr().cast(),
            SHOW_CURSOR.len(),
        );
        libc::_exit(128 + signal);
    }
}
