use crate::game::Game;
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    state: AppState,
}

impl App {
    pub(crate) fn new(game: Game) -> App {
        App {
            state: AppState::Playing(game),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.state {
            AppState::Playing(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            AppState::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        match self.state {
            AppState::Playing(ref mut game) => {
                if let Some(state) = game.process_input()? {
                    self.state = state;
                }
            }
            AppState::Quit => (),
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.state, AppState::Quit)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum AppState {
    Playing(Game),
    Quit,
}
