mod direction;
mod food;
mod grid;
mod render;
mod scheduler;
mod snake;
mod state;
use self::direction::Direction;
use self::grid::Grid;
use self::scheduler::{tick_interval, TickScheduler};
use self::state::{GameState, GameStatus, Snapshot, TickOutcome};
use crate::app::AppState;
use crate::command::Command;
use crate::consts;
use crossterm::event::{poll, read, Event};
use rand::{rngs::StdRng, Rng};
use ratatui::Frame;
use std::io;
use std::time::Instant;

/// A game of snake together with the clock that drives it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = StdRng> {
    rng: R,
    state: GameState,
    scheduler: TickScheduler,
}

impl<R: Rng> Game<R> {
    /// Create an idle game that draws its randomness from `rng`
    pub(crate) fn new(rng: R) -> Game<R> {
        Game {
            rng,
            state: GameState::new(Grid::new(consts::GRID_SIZE)),
            scheduler: TickScheduler::new(),
        }
    }

    /// Wait for either the next key event or the next tick, whichever comes
    /// first, and handle it
    pub(crate) fn process_input(&mut self) -> io::Result<Option<AppState>> {
        if let Some(wait) = self.scheduler.time_until_due(Instant::now()) {
            if wait.is_zero() || !poll(wait)? {
                let _ = self.tick(Instant::now());
                return Ok(None);
            }
        }
        Ok(self.handle_event(read()?))
    }

    /// (Re)start the game, abandoning any game in progress.  The first tick is
    /// scheduled one tick period after `now`.
    pub(crate) fn start(&mut self, now: Instant) {
        if let Some(id) = self.scheduler.cancel() {
            log::debug!("Cancelled pending tick {id}");
        }
        match self.state.status() {
            GameStatus::Idle => log::info!("Starting game"),
            _ => log::info!("Restarting game"),
        }
        self.state.start(&mut self.rng);
        let id = self
            .scheduler
            .schedule(now, tick_interval(self.state.score()));
        log::debug!("Scheduled first tick {id}");
    }

    /// Run the pending tick if it is due at `now`, then schedule the next one
    /// if the game is still running.  Returns `None` if no tick was due.
    pub(crate) fn tick(&mut self, now: Instant) -> Option<TickOutcome> {
        let id = self.scheduler.take_due(now)?;
        let outcome = self.state.update(&mut self.rng);
        log::trace!("Tick {id}: {outcome:?}");
        if self.state.running() {
            let _ = self
                .scheduler
                .schedule(now, tick_interval(self.state.score()));
        } else if let TickOutcome::Ended(reason) = outcome {
            log::info!(
                "Game over: snake {reason}; final score {}, length {}",
                self.state.score(),
                self.state.snake().len()
            );
        }
        Some(outcome)
    }

    fn handle_event(&mut self, event: Event) -> Option<AppState> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        self.handle_command(cmd, Instant::now())
    }

    fn handle_command(&mut self, cmd: Command, now: Instant) -> Option<AppState> {
        match cmd {
            Command::Quit | Command::Q | Command::Esc => return Some(AppState::Quit),
            Command::Up => self.steer(Direction::North),
            Command::Down => self.steer(Direction::South),
            Command::Left => self.steer(Direction::West),
            Command::Right => self.steer(Direction::East),
            Command::Enter | Command::Space => {
                if !self.state.running() {
                    self.start(now);
                }
            }
            Command::R => {
                if matches!(self.state.status(), GameStatus::Over(_)) {
                    self.start(now);
                }
            }
        }
        None
    }

    fn steer(&mut self, direction: Direction) {
        if self.state.running() && !self.state.steer(direction) {
            log::debug!("Ignoring request to reverse direction to {direction:?}");
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(&self.snapshot(), frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::grid::Cell;
    use super::state::EndReason;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game() -> Game<ChaCha12Rng> {
        Game::new(ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn idle_until_started() {
        let mut game = new_game();
        let t0 = Instant::now();
        assert_eq!(game.snapshot().status, GameStatus::Idle);
        assert_eq!(game.scheduler.pending(), None);
        assert_eq!(game.tick(t0 + ms(1000)), None);
        assert_eq!(game.snapshot().status, GameStatus::Idle);
    }

    #[test]
    fn first_tick_after_one_period() {
        let mut game = new_game();
        let t0 = Instant::now();
        assert!(game.handle_command(Command::Enter, t0).is_none());
        let snap = game.snapshot();
        assert_eq!(snap.status, GameStatus::Running);
        assert_eq!(snap.snake, [Cell::new(10, 10)]);
        assert_eq!(snap.score, 0);
        assert_eq!(game.tick(t0 + ms(149)), None);
        let outcome = game.tick(t0 + ms(150));
        assert!(matches!(
            outcome,
            Some(TickOutcome::Moved | TickOutcome::Ate)
        ));
        assert_eq!(game.snapshot().snake[0], Cell::new(11, 10));
        assert!(game.scheduler.pending().is_some());
    }

    #[test]
    fn steer_between_ticks() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        assert!(game.handle_command(Command::Down, t0).is_none());
        let _ = game.tick(t0 + ms(150));
        assert_eq!(game.snapshot().snake[0], Cell::new(10, 11));
        // Reversal is ignored
        assert!(game.handle_command(Command::Up, t0).is_none());
        let next = t0 + ms(150) + tick_interval(game.snapshot().score);
        let _ = game.tick(next);
        assert_eq!(game.snapshot().snake[0], Cell::new(10, 12));
    }

    /// Drive the game eastwards into the wall, firing each tick when it's due
    fn run_into_wall(game: &mut Game<ChaCha12Rng>, t0: Instant) -> Instant {
        let mut now = t0;
        for _ in 0..50 {
            let Some(pending) = game.scheduler.pending() else {
                break;
            };
            now = pending.due;
            let _ = game.tick(now);
        }
        now
    }

    #[test]
    fn game_over_stops_ticking() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        let now = run_into_wall(&mut game, t0);
        let snap = game.snapshot();
        assert_eq!(snap.status, GameStatus::Over(EndReason::Wall));
        assert_eq!(snap.snake[0], Cell::new(19, 10));
        assert_eq!(game.scheduler.pending(), None);
        assert_eq!(game.tick(now + ms(1000)), None);
        assert_eq!(game.snapshot(), snap);
    }

    #[test]
    fn restart_after_game_over() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        let now = run_into_wall(&mut game, t0);
        assert!(matches!(game.snapshot().status, GameStatus::Over(_)));
        assert!(game.handle_command(Command::R, now).is_none());
        let snap = game.snapshot();
        assert_eq!(snap.status, GameStatus::Running);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.snake, [Cell::new(10, 10)]);
        let pending = game.scheduler.pending().unwrap();
        assert_eq!(pending.due, now + ms(150));
    }

    #[test]
    fn restart_cancels_pending_tick() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        let old = game.scheduler.pending().unwrap();
        game.start(t0 + ms(100));
        let new = game.scheduler.pending().unwrap();
        assert_ne!(new.id, old.id);
        assert_eq!(new.due, t0 + ms(250));
        // The old tick's due time passes without anything happening
        assert_eq!(game.tick(old.due), None);
        assert_eq!(game.snapshot().snake, [Cell::new(10, 10)]);
        assert!(game.tick(new.due).is_some());
        assert_eq!(game.snapshot().snake[0], Cell::new(11, 10));
    }

    #[test]
    fn restart_keys_ignored_while_running() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        let pending = game.scheduler.pending();
        assert!(game.handle_command(Command::R, t0 + ms(10)).is_none());
        assert!(game.handle_command(Command::Enter, t0 + ms(10)).is_none());
        assert_eq!(game.scheduler.pending(), pending);
    }

    #[test]
    fn r_does_not_start_idle_game() {
        let mut game = new_game();
        assert!(game.handle_command(Command::R, Instant::now()).is_none());
        assert_eq!(game.snapshot().status, GameStatus::Idle);
    }

    #[test]
    fn quit() {
        let mut game = new_game();
        for cmd in [Command::Quit, Command::Q, Command::Esc] {
            assert_eq!(
                game.handle_command(cmd, Instant::now()),
                Some(AppState::Quit)
            );
        }
    }
}
