//! # Keyboard Pump
//!
//! One process-wide thread reads raw bytes from stdin and publishes
//! them on a bounded channel. The menu and the per-session input
//! actor are the consumers; at any moment exactly one of them is
//! receiving, so keys never race between screens.
//!
//! The pump owns no game state - it may outlive any session and keeps
//! serving the menu after a game ends. It exits when stdin closes or
//! every receiver is gone.

use std::io::{self, Read};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};

use crate::error::{GameError, GameResult};

/// Buffered key events before the pump blocks.
const PUMP_CAPACITY: usize = 64;

/// Receiving end of the keyboard pump.
///
/// Cloning hands the same underlying stream to another consumer; a
/// key is delivered to exactly one receiver.
#[derive(Clone)]
pub struct KeyStream {
    receiver: Receiver<u8>,
}

impl KeyStream {
    /// Spawns the stdin pump thread and returns its stream.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Terminal`] when the OS refuses to spawn
    /// the thread.
    pub fn spawn_pump() -> GameResult<Self> {
        let (sender, receiver) = bounded(PUMP_CAPACITY);

        // Deliberately detached: the pump holds no game state and
        // dies with the process or when stdin closes.
        let _pump = thread::Builder::new()
            .name("key-pump".to_string())
            .spawn(move || {
                let mut byte = [0u8; 1];
                loop {
                    match io::stdin().read(&mut byte) {
                        // EOF: terminal went away, stop pumping.
                        Ok(0) => break,
                        Ok(_) => {
                            if sender.send(byte[0]).is_err() {
                                break;
                            }
                        }
                        Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                        Err(error) => {
                            tracing::warn!(%error, "keyboard pump stopping");
                            break;
                        }
                    }
                }
            })?;

        Ok(Self { receiver })
    }

    /// Creates a stream that replays `keys` and then reports
    /// disconnection. For headless sessions and tests.
    #[must_use]
    pub fn scripted(keys: &[u8]) -> Self {
        let (sender, receiver) = bounded(keys.len().max(1));
        for &key in keys {
            // Capacity covers every scripted key.
            let _ = sender.send(key);
        }
        // Dropping the sender ends the stream after the last key.
        Self { receiver }
    }

    /// Blocks until the next key arrives.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InputClosed`] when the pump is gone.
    pub fn wait(&self) -> GameResult<u8> {
        self.receiver.recv().map_err(|_| GameError::InputClosed)
    }

    /// Waits up to `timeout` for a key.
    ///
    /// `Ok(None)` means the timeout elapsed - the caller gets a
    /// chance to poll the termination flag and come back.
    pub fn wait_timeout(&self, timeout: Duration) -> GameResult<Option<u8>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(key) => Ok(Some(key)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(GameError::InputClosed),
        }
    }

    /// Discards every key that arrived before `target`, then returns.
    ///
    /// Used by modal boxes: "press SPACE to continue".
    pub fn wait_for(&self, target: u8) -> GameResult<()> {
        loop {
            if self.wait()? == target {
                return Ok(());
            }
        }
    }
}

impl std::fmt::Debug for KeyStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStream")
            .field("pending", &self.receiver.len())
            .finish()
    }
}
