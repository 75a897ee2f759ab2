//! # Game Constants
//!
//! Default board geometry, timing, keys, and queue tuning.
//!
//! These are the built-in defaults; the game config file can override
//! the geometry and timing at startup.

// =============================================================================
// BOARD GEOMETRY
// =============================================================================

/// Board width in columns, border included.
pub const BOARD_WIDTH: i16 = 64;

/// Board height in rows, border included.
pub const BOARD_HEIGHT: i16 = 16;

/// Snake length that wins the session.
pub const WIN_LENGTH: usize = 32;

// =============================================================================
// TIMING
// =============================================================================

/// Milliseconds between automatic snake steps.
pub const TICK_MS: u64 = 200;

/// How long the input actor waits on the key channel before polling
/// the termination flag again.
pub const INPUT_POLL_MS: u64 = 50;

// =============================================================================
// KEYS
// =============================================================================

/// Move up.
pub const KEY_UP: u8 = b'w';

/// Move down.
pub const KEY_DOWN: u8 = b's';

/// Move left.
pub const KEY_LEFT: u8 = b'a';

/// Move right.
pub const KEY_RIGHT: u8 = b'd';

/// Confirm / select (space).
pub const KEY_CONFIRM: u8 = b' ';

// =============================================================================
// GLYPHS
// =============================================================================

/// Snake head glyph.
pub const GLYPH_HEAD: char = '@';

/// Snake body glyph.
pub const GLYPH_BODY: char = '#';

/// Food glyph.
pub const GLYPH_FOOD: char = '$';

// =============================================================================
// QUEUE TUNING (in records)
// =============================================================================

/// Snake queue growth increment.
pub const SNAKE_GROW_STEP: usize = 4;

/// Snake queue front slack that triggers compaction.
pub const SNAKE_SHRINK_AT: usize = 16;

/// Pre-allocated capacity of the food candidate pool.
pub const FOOD_POOL_CAPACITY: usize = 128;

/// Food candidate pool growth increment.
pub const FOOD_POOL_GROW_STEP: usize = 16;
