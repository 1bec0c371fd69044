use super::grid::{Cell, Grid};
use super::state::{GameStatus, Snapshot};
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Return the size of the bordered board for `grid`
fn board_size(grid: Grid) -> Size {
    Size {
        width: grid
            .size()
            .saturating_mul(consts::CELL_WIDTH)
            .saturating_add(2),
        height: grid.size().saturating_add(2),
    }
}

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = board_size(self.grid);
        let display = center_rect(
            area,
            Size {
                width: board.width,
                height: board.height.saturating_add(2),
            },
        );
        let [board_area, msg1_area, msg2_area] =
            Layout::vertical([board.height, 1, 1]).areas(display);

        Block::bordered()
            .title(format!(" Score: {} ", self.score))
            .render(board_area, buf);
        let mut canvas = Canvas {
            area: board_area.inner(Margin::new(1, 1)),
            buf,
        };
        if let Some(food) = self.food {
            canvas.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        for &cell in self.snake.iter().skip(1) {
            canvas.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, if it's a collision, it's drawn over
        // whatever it's colliding with
        if let Some(&head) = self.snake.first() {
            if matches!(self.status, GameStatus::Over(reason) if reason.is_collision()) {
                canvas.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                canvas.draw_cell(head, consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_STYLE);
            }
        }

        match self.status {
            GameStatus::Idle => {
                Line::from_iter([
                    Span::raw(" Press "),
                    Span::styled("Enter", consts::KEY_STYLE),
                    Span::raw(" to start"),
                ])
                .render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
            GameStatus::Running => (),
            GameStatus::Over(reason) => {
                Line::from(format!(" Game over: {reason}")).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Restart ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(")  Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

/// The interior of the board, addressed in grid cells
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let (Ok(cx), Ok(cy)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
            return;
        };
        let Some(x) = cx
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(cy) else {
            return;
        };
        let pos = Position::new(x, y);
        if !self.area.contains(pos) {
            return;
        }
        if let Some(c) = self.buf.cell_mut(pos) {
            c.set_char(symbol);
            c.set_style(style);
        }
    }
}
