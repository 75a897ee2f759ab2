//! # Gameplay Rules
//!
//! Pure game logic over the snake queue: stepping, growth, collision
//! detection, and food placement. Nothing here touches the terminal
//! or the lock - the session calls these inside its critical section
//! and draws from the returned report.
//!
//! The snake lives in an [`ElasticQueue`]: the queue front is the
//! tail of the snake (oldest cell, evicted on a normal step) and the
//! queue back is the head (newest cell, appended every step).

use rand::rngs::StdRng;
use rand::Rng;

use basilisk_core::ElasticQueue;
use basilisk_shared::constants::{FOOD_POOL_CAPACITY, FOOD_POOL_GROW_STEP};
use basilisk_shared::{Cell, Direction, Outcome};

use crate::config::GameConfig;

/// Food position used when no free cell exists. Inside the border
/// ring, so it can never be reached or collide with gameplay.
pub const FOOD_PARKED: Cell = Cell::new(0, 0);

/// What one snake step changed, for the caller to draw.
#[derive(Clone, Copy, Debug)]
pub struct StepReport {
    /// Tail cell evicted by the step; `None` when the snake grew.
    pub tail_cleared: Option<Cell>,
    /// Previous head cell, now part of the body.
    pub demoted_head: Cell,
    /// New head cell.
    pub new_head: Cell,
    /// Freshly placed food; `None` when nothing was eaten.
    pub food_respawned: Option<Cell>,
    /// Terminal condition detected by this step, if any.
    pub outcome: Option<Outcome>,
}

/// Builds the initial three-cell snake, centered, heading left.
///
/// The queue is populated tail-first so the queue back is the head.
#[must_use]
pub fn initial_snake(config: &GameConfig) -> ElasticQueue<Cell> {
    let row = config.board_height / 2;
    let col = config.board_width / 2;

    ElasticQueue::from_slice(
        &[
            Cell::new(row, col + 1),
            Cell::new(row, col),
            Cell::new(row, col - 1),
        ],
        config.queue.grow_step,
        config.queue.shrink_at,
    )
}

/// Returns `true` when `cell` lies outside the playable interior.
///
/// The playable interior is rows `2..=height-2` by columns
/// `2..=width-2`; the border ring and the cells flush against it are
/// lethal.
#[inline]
#[must_use]
pub fn hits_wall(cell: Cell, config: &GameConfig) -> bool {
    cell.row < 2
        || cell.row > config.board_height - 2
        || cell.col < 2
        || cell.col > config.board_width - 2
}

/// Returns `true` when the head overlaps any body cell.
///
/// The head itself sits at the queue back and is excluded from the
/// scan.
#[must_use]
pub fn bites_itself(snake: &ElasticQueue<Cell>) -> bool {
    let Some(&head) = snake.back() else {
        return false;
    };
    snake
        .position_of(&head)
        .is_some_and(|first| first + 1 < snake.len())
}

/// Checks the terminal conditions after a step, target length first.
#[must_use]
pub fn detect_outcome(snake: &ElasticQueue<Cell>, config: &GameConfig) -> Option<Outcome> {
    let &head = snake.back()?;

    if snake.len() >= config.win_length {
        return Some(Outcome::Victory);
    }
    if hits_wall(head, config) || bites_itself(snake) {
        return Some(Outcome::Defeat);
    }
    None
}

/// Whether a direction change request is accepted.
///
/// A request equal to the current heading is a no-op and a request
/// equal to its opposite would reverse through the body, so both are
/// rejected.
#[inline]
#[must_use]
pub fn accepts_turn(current: Direction, requested: Direction) -> bool {
    requested != current && requested != current.opposite()
}

/// Picks a food cell uniformly among free interior cells.
///
/// Collects every interior cell not occupied by the snake into a
/// scratch queue, then indexes it at random. Returns `None` when the
/// snake covers the whole interior.
#[must_use]
pub fn spawn_food(
    snake: &ElasticQueue<Cell>,
    config: &GameConfig,
    rng: &mut StdRng,
) -> Option<Cell> {
    let mut candidates: ElasticQueue<Cell> =
        ElasticQueue::new(FOOD_POOL_CAPACITY, FOOD_POOL_GROW_STEP, 0);

    for row in 2..=config.board_height - 2 {
        for col in 2..=config.board_width - 2 {
            let cell = Cell::new(row, col);
            if !snake.contains(&cell) {
                candidates.push_back(cell);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }
    candidates.get(rng.gen_range(0..candidates.len())).copied()
}

/// Advances the snake one cell in `direction`.
///
/// Eating food skips the tail eviction (the snake grows by one) and
/// places new food. The terminal check runs on the post-step snake;
/// publishing the result is the caller's job.
pub fn advance(
    snake: &mut ElasticQueue<Cell>,
    food: &mut Cell,
    direction: Direction,
    config: &GameConfig,
    rng: &mut StdRng,
) -> StepReport {
    let demoted_head = *snake
        .back()
        .expect("a live session snake always has a head");
    let new_head = demoted_head.stepped(direction);

    let ate = new_head == *food;
    let tail_cleared = if ate { None } else { snake.pop_front() };

    snake.push_back(new_head);

    let food_respawned = if ate {
        let placed = spawn_food(snake, config, rng).unwrap_or(FOOD_PARKED);
        *food = placed;
        Some(placed)
    } else {
        None
    };

    StepReport {
        tail_cleared,
        demoted_head,
        new_head,
        food_respawned,
        outcome: detect_outcome(snake, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn small_config() -> GameConfig {
        GameConfig {
            board_width: 12,
            board_height: 12,
            win_length: 6,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_initial_snake_shape() {
        let config = GameConfig::default();
        let snake = initial_snake(&config);

        assert_eq!(snake.len(), 3);
        // Queue back is the head, one column left of center.
        assert_eq!(snake.back(), Some(&Cell::new(8, 31)));
        assert_eq!(snake.front(), Some(&Cell::new(8, 33)));
        assert!(detect_outcome(&snake, &config).is_none());
    }

    #[test]
    fn test_turn_acceptance() {
        assert!(accepts_turn(Direction::Left, Direction::Up));
        assert!(accepts_turn(Direction::Left, Direction::Down));
        assert!(!accepts_turn(Direction::Left, Direction::Left));
        assert!(!accepts_turn(Direction::Left, Direction::Right));
    }

    #[test]
    fn test_wall_detection() {
        let config = small_config();
        assert!(hits_wall(Cell::new(1, 5), &config));
        assert!(hits_wall(Cell::new(11, 5), &config));
        assert!(hits_wall(Cell::new(5, 1), &config));
        assert!(hits_wall(Cell::new(5, 11), &config));
        assert!(!hits_wall(Cell::new(2, 2), &config));
        assert!(!hits_wall(Cell::new(10, 10), &config));
    }

    #[test]
    fn test_step_moves_without_growing() {
        let config = small_config();
        let mut snake = initial_snake(&config);
        let mut food = Cell::new(2, 2);
        let mut rng = test_rng();

        let report = advance(&mut snake, &mut food, Direction::Left, &config, &mut rng);

        assert_eq!(snake.len(), 3);
        assert_eq!(report.new_head, Cell::new(6, 4));
        assert_eq!(report.tail_cleared, Some(Cell::new(6, 7)));
        assert_eq!(report.food_respawned, None);
        assert!(report.outcome.is_none());
    }

    #[test]
    fn test_eating_grows_and_respawns_food() {
        let config = small_config();
        let mut snake = initial_snake(&config);
        let mut rng = test_rng();
        // Food directly in the snake's path.
        let mut food = snake.back().expect("head").stepped(Direction::Left);

        let report = advance(&mut snake, &mut food, Direction::Left, &config, &mut rng);

        assert_eq!(snake.len(), 4);
        assert_eq!(report.tail_cleared, None);
        let placed = report.food_respawned.expect("food was eaten");
        assert_eq!(placed, food);
        assert!(!snake.contains(&placed), "food spawned on the snake");
        assert!(!hits_wall(placed, &config), "food spawned on a wall");
    }

    #[test]
    fn test_wall_hit_is_defeat() {
        let config = small_config();
        let mut food = Cell::new(9, 9);
        let mut rng = test_rng();
        // Head one cell away from the lethal left column.
        let mut snake = ElasticQueue::from_slice(
            &[Cell::new(5, 4), Cell::new(5, 3), Cell::new(5, 2)],
            4,
            16,
        );

        let report = advance(&mut snake, &mut food, Direction::Left, &config, &mut rng);
        assert_eq!(report.outcome, Some(Outcome::Defeat));
    }

    #[test]
    fn test_self_bite_is_defeat() {
        let config = small_config();
        // A hook: stepping up from (5,5) lands back on the body.
        let snake = ElasticQueue::from_slice(
            &[
                Cell::new(4, 5),
                Cell::new(4, 6),
                Cell::new(5, 6),
                Cell::new(5, 5),
                Cell::new(4, 5),
            ],
            4,
            16,
        );
        assert!(bites_itself(&snake));
        assert_eq!(detect_outcome(&snake, &config), Some(Outcome::Defeat));
    }

    #[test]
    fn test_reaching_target_length_is_victory() {
        let config = small_config();
        let cells: Vec<Cell> = (0..6).map(|i| Cell::new(5, 2 + i)).collect();
        let snake = ElasticQueue::from_slice(&cells, 4, 16);
        assert_eq!(detect_outcome(&snake, &config), Some(Outcome::Victory));
    }

    #[test]
    fn test_food_never_spawns_on_snake() {
        let config = small_config();
        let snake = initial_snake(&config);
        let mut rng = test_rng();

        for _ in 0..200 {
            let food = spawn_food(&snake, &config, &mut rng).expect("free cells exist");
            assert!(!snake.contains(&food));
            assert!(!hits_wall(food, &config));
        }
    }

    #[test]
    fn test_full_board_parks_food() {
        let config = small_config();
        let mut rng = test_rng();
        // Snake covering the entire interior leaves no candidates.
        let mut cells = Vec::new();
        for row in 2..=config.board_height - 2 {
            for col in 2..=config.board_width - 2 {
                cells.push(Cell::new(row, col));
            }
        }
        let snake = ElasticQueue::from_slice(&cells, 4, 16);
        assert_eq!(spawn_food(&snake, &config, &mut rng), None);
    }
}
