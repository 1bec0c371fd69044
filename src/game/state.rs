use super::direction::Direction;
use super::food::place_food;
use super::grid::{Cell, Grid};
use super::snake::Snake;
use rand::Rng;
use std::fmt;

/// The complete state of one game: the snake, the food, the score, and where
/// the game is in its lifecycle
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    grid: Grid,
    snake: Snake,
    /// `None` before the first start and once the board is full
    food: Option<Cell>,
    score: u32,
    /// The direction the snake moved in on the last tick
    direction: Direction,
    /// Direction change requested since the last tick
    intent: Option<Direction>,
    status: GameStatus,
}

impl GameState {
    /// Create an idle game on `grid`.  Nothing moves until
    /// [`GameState::start()`] is called.
    pub(crate) fn new(grid: Grid) -> GameState {
        GameState {
            grid,
            snake: Snake::new(grid.center()),
            food: None,
            score: 0,
            direction: Direction::East,
            intent: None,
            status: GameStatus::Idle,
        }
    }

    /// Reset everything for a fresh game and set it running.  This is also
    /// how a finished game is restarted.
    pub(crate) fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.snake = Snake::new(self.grid.center());
        self.score = 0;
        self.direction = Direction::East;
        self.intent = None;
        self.food = place_food(rng, self.grid, &self.snake.occupied());
        self.status = GameStatus::Running;
    }

    /// Request that the snake turn to face `direction` on the next tick.
    ///
    /// Returns `false` and leaves everything unchanged if the game is not
    /// running or if `direction` would make the snake reverse into itself.
    /// Later requests made before the next tick override earlier ones.
    pub(crate) fn steer(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running || direction == self.direction.reverse() {
            return false;
        }
        self.intent = Some(direction);
        true
    }

    /// Advance the game by one tick
    pub(crate) fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }
        if let Some(direction) = self.intent.take() {
            self.direction = direction;
        }
        let new_head = self.snake.head().offset(self.direction);
        if !self.grid.in_bounds(new_head) {
            return self.end(EndReason::Wall);
        }
        if self.snake.contains(new_head) {
            return self.end(EndReason::SelfCollision);
        }
        self.snake.push_head(new_head);
        if self.food == Some(new_head) {
            self.score += 1;
            self.food = place_food(rng, self.grid, &self.snake.occupied());
            if self.food.is_none() {
                return self.end(EndReason::BoardFilled);
            }
            TickOutcome::Ate
        } else {
            self.snake.pop_tail();
            TickOutcome::Moved
        }
    }

    fn end(&mut self, reason: EndReason) -> TickOutcome {
        self.status = GameStatus::Over(reason);
        TickOutcome::Ended(reason)
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            snake: self.snake.segments().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
        }
    }

    pub(crate) fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameStatus {
    /// Waiting for the first start
    Idle,
    Running,
    Over(EndReason),
}

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EndReason {
    /// The snake's head left the grid
    Wall,
    /// The snake's head ran into its body
    SelfCollision,
    /// The snake covers every cell, leaving nowhere to put food
    BoardFilled,
}

impl EndReason {
    /// Whether the game ended with the snake's head crashing into something
    pub(crate) fn is_collision(self) -> bool {
        matches!(self, EndReason::Wall | EndReason::SelfCollision)
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Wall => write!(f, "hit a wall"),
            EndReason::SelfCollision => write!(f, "ran into itself"),
            EndReason::BoardFilled => write!(f, "the board is full"),
        }
    }
}

/// What happened during a call to [`GameState::update()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    /// The game was not running, so nothing happened
    Skipped,
    Moved,
    /// The snake moved onto the food and grew
    Ate,
    Ended(EndReason),
}

/// An immutable copy of everything needed to draw a game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) grid: Grid,
    /// The snake's segments, head first
    pub(crate) snake: Vec<Cell>,
    pub(crate) food: Option<Cell>,
    pub(crate) score: u32,
    pub(crate) status: GameStatus,
}
