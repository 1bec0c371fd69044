//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Number of cells along each side of the (square) playing field
pub(crate) const GRID_SIZE: u16 = 20;

/// Time between movements of the snake when the score is zero
pub(crate) const BASE_TICK_PERIOD: Duration = Duration::from_millis(150);

/// How much shorter the tick period becomes for each point scored
pub(crate) const SPEEDUP_PER_POINT: Duration = Duration::from_millis(5);

/// Upper limit on the total reduction of the tick period
pub(crate) const MAX_SPEEDUP: Duration = Duration::from_millis(100);

/// The tick period never drops below this
pub(crate) const MIN_TICK_PERIOD: Duration = Duration::from_millis(50);

/// How many random cells to try when placing food before falling back to
/// choosing from the list of free cells
pub(crate) const FOOD_SAMPLE_ATTEMPTS: usize = 32;

/// Number of terminal columns used to draw a single grid cell.  Terminal cells
/// are about twice as tall as they are wide, so this keeps the board roughly
/// square.
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '@';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);
