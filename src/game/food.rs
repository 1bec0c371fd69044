use super::grid::{Cell, Grid};
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// Choose a cell of `grid` not in `occupied`, uniformly at random.  Returns
/// `None` if every cell is occupied.
///
/// Random cells are tried first, which is fast while the board is mostly
/// empty.  After [`FOOD_SAMPLE_ATTEMPTS`][consts::FOOD_SAMPLE_ATTEMPTS] misses,
/// the choice is made from an explicit list of the free cells instead, so a
/// crowded board still resolves promptly.
pub(crate) fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    occupied: &HashSet<Cell>,
) -> Option<Cell> {
    if grid.is_empty() {
        return None;
    }
    for _ in 0..consts::FOOD_SAMPLE_ATTEMPTS {
        let cell = grid.random_cell(rng);
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
    log::debug!(
        "No free cell after {} samples with {} of {} cells occupied; choosing from free cells",
        consts::FOOD_SAMPLE_ATTEMPTS,
        occupied.len(),
        grid.cell_count()
    );
    grid.cells()
        .filter(|c| !occupied.contains(c))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn avoids_occupied() {
        let grid = Grid::new(5);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let occupied = grid
            .cells()
            .filter(|c| c.x < 3)
            .collect::<HashSet<_>>();
        for _ in 0..100 {
            let food = place_food(&mut rng, grid, &occupied).unwrap();
            assert!(grid.in_bounds(food));
            assert!(!occupied.contains(&food));
        }
    }

    #[test]
    fn single_free_cell() {
        let grid = Grid::new(20);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let free = Cell::new(7, 13);
        let occupied = grid.cells().filter(|&c| c != free).collect::<HashSet<_>>();
        assert_eq!(place_food(&mut rng, grid, &occupied), Some(free));
    }

    #[test]
    fn full_board() {
        let grid = Grid::new(3);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let occupied = grid.cells().collect::<HashSet<_>>();
        assert_eq!(place_food(&mut rng, grid, &occupied), None);
    }

    #[test]
    fn empty_grid() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(place_food(&mut rng, Grid::new(0), &HashSet::new()), None);
    }

    #[test]
    fn reaches_every_free_cell() {
        let grid = Grid::new(3);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let occupied = HashSet::from([Cell::new(1, 1)]);
        let seen = (0..500)
            .filter_map(|_| place_food(&mut rng, grid, &occupied))
            .collect::<HashSet<_>>();
        assert_eq!(seen.len(), grid.cell_count() - 1);
    }
}
