//! # Game Session
//!
//! One session = one snake queue, one lock, two actors:
//!
//! - the **tick actor** (the calling thread) steps the snake when no
//!   input-driven step happened within the tick period
//! - the **input actor** (spawned) turns accepted key presses into an
//!   immediate step
//!
//! Both actors funnel every compound mutation - inspect the head,
//! derive the next cell, conditionally append/evict - through the
//! same [`Guarded`] critical section, and neither ever sleeps or
//! blocks on input while holding it. Drawing for a mutation happens
//! inside that same critical section, so the screen can never show a
//! half-applied step.
//!
//! Termination is cooperative: the mutation that detects a terminal
//! condition publishes the outcome on the status flag; both actors
//! poll the flag (a one-iteration-stale read is harmless) and return
//! normally, and the session joins the input actor before tearing
//! shared state down.

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use basilisk_core::{ElasticQueue, Guarded, StatusFlag};
use basilisk_shared::constants::{GLYPH_BODY, GLYPH_FOOD, GLYPH_HEAD, INPUT_POLL_MS};
use basilisk_shared::{outcome, Cell, Direction, Outcome};

use crate::config::GameConfig;
use crate::error::GameResult;
use crate::gameplay::{self, StepReport};
use crate::input::KeyStream;
use crate::term::{Screen, ScreenMode};

/// Everything the two actors mutate, behind the lock.
struct SessionState {
    /// The snake body; queue front = tail, queue back = head.
    snake: ElasticQueue<Cell>,
    /// Current food position.
    food: Cell,
    /// Current heading. Written by the input actor, read by both.
    direction: Direction,
    /// Set by the mutation that detected a terminal condition.
    over: Option<Outcome>,
    /// When the last step was applied; paces the tick actor.
    last_step: Instant,
    /// Food placement randomness.
    rng: StdRng,
}

/// Shared handle: the lock-guarded state plus the polled status flag.
///
/// Lives for exactly one session; created when the session starts and
/// dropped after both actors have returned.
struct SessionShared {
    state: Guarded<SessionState>,
    status: StatusFlag,
    config: GameConfig,
}

/// Runs one game session to completion.
///
/// Draws the board, spawns the input actor, runs the tick loop on the
/// calling thread, joins the input actor, and returns the outcome.
///
/// # Errors
///
/// Fails on terminal I/O errors; the input actor's own draw errors
/// terminate the session through the status flag.
pub fn run(config: &GameConfig, keys: &KeyStream, mode: ScreenMode) -> GameResult<Outcome> {
    let snake = gameplay::initial_snake(config);
    let mut rng = seeded_rng();
    let food = gameplay::spawn_food(&snake, config, &mut rng).unwrap_or(gameplay::FOOD_PARKED);

    let mut screen = Screen::new(mode);
    draw_initial(&mut screen, config, &snake, food)?;

    let shared = Arc::new(SessionShared {
        state: Guarded::new(SessionState {
            snake,
            food,
            direction: Direction::Left,
            over: None,
            last_step: Instant::now(),
            rng,
        }),
        status: StatusFlag::new(outcome::RUNNING),
        config: config.clone(),
    });

    tracing::info!(
        width = config.board_width,
        height = config.board_height,
        tick_ms = config.tick_ms,
        "session started"
    );

    let input_actor = {
        let shared = Arc::clone(&shared);
        let keys = keys.clone();
        let screen = Screen::new(mode);
        thread::Builder::new()
            .name("input-actor".to_string())
            .spawn(move || input_loop(&shared, &keys, screen))?
    };

    let result = tick_loop(&shared, Screen::new(mode));

    // The input actor exits once the flag is published; a tick-actor
    // error must publish too or the join below would hang.
    if result.is_err() {
        shared
            .state
            .with(|state| terminate(state, &shared, Outcome::Defeat));
    }
    input_actor
        .join()
        .expect("input actor panicked");

    let final_outcome = result?;
    tracing::info!(outcome = ?final_outcome, "session finished");
    Ok(final_outcome)
}

/// The periodic actor: steps the snake once per tick of quiet.
///
/// An input-driven step resets `last_step`, postponing the next
/// automatic one - holding a direction key therefore speeds the snake
/// up instead of double-stepping it.
fn tick_loop(shared: &SessionShared, mut screen: Screen) -> GameResult<Outcome> {
    let tick = Duration::from_millis(shared.config.tick_ms);

    loop {
        if let Some(outcome) = Outcome::from_flag(shared.status.poll()) {
            return Ok(outcome);
        }

        // Measure outside the critical section, never sleep inside it.
        let pending = {
            let state = shared.state.lock();
            tick.saturating_sub(state.last_step.elapsed())
        };
        if !pending.is_zero() {
            thread::sleep(pending);
            continue;
        }

        let mut state = shared.state.lock();
        if state.over.is_none() && state.last_step.elapsed() >= tick {
            apply_step(&mut state, shared, &mut screen)?;
        }
    }
}

/// The event-driven actor: one accepted key press, one step.
///
/// Blocks on the key channel with a bounded timeout so the
/// termination flag is polled at least every poll interval.
fn input_loop(shared: &SessionShared, keys: &KeyStream, mut screen: Screen) {
    let poll = Duration::from_millis(INPUT_POLL_MS);

    while shared.status.poll() == outcome::RUNNING {
        let key = match keys.wait_timeout(poll) {
            Ok(Some(key)) => key,
            Ok(None) => continue,
            Err(_) => {
                // Keyboard gone: nobody can steer anymore, but the
                // tick actor still drives the session to its natural
                // end. Just stop this actor.
                tracing::warn!("keyboard stream closed mid-session");
                break;
            }
        };
        let Some(requested) = Direction::from_key(key) else {
            continue;
        };

        let mut state = shared.state.lock();
        if state.over.is_some() {
            break;
        }
        if !gameplay::accepts_turn(state.direction, requested) {
            continue;
        }

        state.direction = requested;
        tracing::debug!(?requested, "direction accepted");
        if let Err(error) = apply_step(&mut state, shared, &mut screen) {
            tracing::warn!(%error, "input actor draw failed");
            terminate(&mut state, shared, Outcome::Defeat);
            break;
        }
    }
}

/// One compound mutation plus its presentation, entirely inside the
/// caller's critical section.
fn apply_step(
    state: &mut SessionState,
    shared: &SessionShared,
    screen: &mut Screen,
) -> io::Result<()> {
    let direction = state.direction;
    let report = gameplay::advance(
        &mut state.snake,
        &mut state.food,
        direction,
        &shared.config,
        &mut state.rng,
    );
    state.last_step = Instant::now();

    if report.food_respawned.is_some() {
        let stats = state.snake.stats();
        tracing::debug!(
            length = state.snake.len(),
            grows = stats.grows,
            shrinks = stats.shrinks,
            "snake grew"
        );
    }

    // Publish the outcome before presentation: a failing draw must
    // not un-detect a terminal condition.
    if let Some(outcome) = report.outcome {
        terminate(state, shared, outcome);
    }

    draw_step(screen, &report)
}

/// Records the outcome and publishes it on the status flag. Must be
/// called while holding the state lock; the first terminal condition
/// wins, later calls are ignored.
fn terminate(state: &mut SessionState, shared: &SessionShared, outcome: Outcome) {
    if state.over.is_none() {
        state.over = Some(outcome);
        shared.status.publish(outcome.as_flag());
    }
}

/// Draws the border, the initial snake, and the first food.
fn draw_initial(
    screen: &mut Screen,
    config: &GameConfig,
    snake: &ElasticQueue<Cell>,
    food: Cell,
) -> io::Result<()> {
    screen.clear()?;
    screen.draw_border(config.board_width, config.board_height)?;

    for i in 0..snake.len() {
        if let Some(&cell) = snake.get(i) {
            let glyph = if i + 1 == snake.len() {
                GLYPH_HEAD
            } else {
                GLYPH_BODY
            };
            screen.put(cell, glyph)?;
        }
    }

    screen.put(food, GLYPH_FOOD)?;
    screen.flush()
}

/// Applies a step report to the screen.
fn draw_step(screen: &mut Screen, report: &StepReport) -> io::Result<()> {
    screen.put(report.demoted_head, GLYPH_BODY)?;
    if let Some(tail) = report.tail_cleared {
        screen.put(tail, ' ')?;
    }
    if let Some(food) = report.food_respawned {
        screen.put(food, GLYPH_FOOD)?;
    }
    screen.put(report.new_head, GLYPH_HEAD)?;
    screen.flush()
}

/// Seeds the food RNG from wall-clock time, one seed per session.
fn seeded_rng() -> StdRng {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64);
    StdRng::seed_from_u64(seed)
}
