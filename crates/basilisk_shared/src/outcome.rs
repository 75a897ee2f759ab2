//! Session outcome codes.

use serde::{Deserialize, Serialize};

/// Status byte meaning "the session is still running".
///
/// Published on the session flag alongside the [`Outcome`] codes.
pub const RUNNING: u8 = 0;

/// How a finished session ended.
///
/// Encoded as a single status byte so it can be published on a
/// lock-free flag: `0` is reserved for the running state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Outcome {
    /// The snake hit a wall or itself.
    Defeat = 1,
    /// The snake reached the target length.
    Victory = 2,
}

impl Outcome {
    /// Returns the status byte for this outcome.
    #[inline]
    #[must_use]
    pub const fn as_flag(self) -> u8 {
        self as u8
    }

    /// Decodes a status byte; `RUNNING` and unknown bytes map to
    /// `None`.
    #[inline]
    #[must_use]
    pub const fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            1 => Some(Self::Defeat),
            2 => Some(Self::Victory),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_round_trip() {
        assert_eq!(Outcome::from_flag(Outcome::Defeat.as_flag()), Some(Outcome::Defeat));
        assert_eq!(Outcome::from_flag(Outcome::Victory.as_flag()), Some(Outcome::Victory));
        assert_eq!(Outcome::from_flag(RUNNING), None);
        assert_eq!(Outcome::from_flag(200), None);
    }
}
