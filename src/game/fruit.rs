use super::grid::Grid;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;
use std::collections::HashSet;

/// The fruit that the snake is chasing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Fruit {
    position: Position,
}

impl Fruit {
    /// Place a new fruit on a random cell of `grid` not in `occupied`.
    /// Returns `None` if every cell is occupied.
    pub(crate) fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        grid: Grid,
        occupied: &HashSet<Position>,
    ) -> Option<Fruit> {
        random_free_cell(rng, grid, occupied).map(|position| Fruit { position })
    }

    #[cfg(test)]
    pub(crate) fn at(position: Position) -> Fruit {
        Fruit { position }
    }

    pub(crate) fn position(self) -> Position {
        self.position
    }

    /// Move the fruit to a random cell of `grid` not in `occupied` and return
    /// the new position.  If every cell is occupied, the fruit is left where
    /// it is and `None` is returned.
    pub(crate) fn relocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: Grid,
        occupied: &HashSet<Position>,
    ) -> Option<Position> {
        let position = random_free_cell(rng, grid, occupied)?;
        self.position = position;
        Some(position)
    }
}

/// Draw cells uniformly from `grid` until one not in `occupied` turns up.
/// After `grid.area()` misses in a row, pick uniformly from the cells that
/// are actually free instead, so that a nearly-full board still resolves
/// quickly.
fn random_free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    occupied: &HashSet<Position>,
) -> Option<Position> {
    if grid.area() == 0 {
        return None;
    }
    for _ in 0..grid.area() {
        let pos = Position::new(
            rng.random_range(0..grid.width),
            rng.random_range(0..grid.height),
        );
        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }
    grid.positions()
        .filter(|p| !occupied.contains(p))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn never_lands_on_snake() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(20, 20);
        let occupied = grid
            .positions()
            .filter(|p| p.y < 10)
            .collect::<HashSet<_>>();
        let mut fruit = Fruit::spawn(&mut rng, grid, &occupied).expect("board has free cells");
        for _ in 0..500 {
            let pos = fruit
                .relocate(&mut rng, grid, &occupied)
                .expect("board has free cells");
            assert!(grid.contains(pos));
            assert!(!occupied.contains(&pos));
            assert_eq!(fruit.position(), pos);
        }
    }

    #[test]
    fn finds_last_free_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(20, 20);
        let hole = Position::new(13, 17);
        let occupied = grid
            .positions()
            .filter(|&p| p != hole)
            .collect::<HashSet<_>>();
        for _ in 0..20 {
            let fruit = Fruit::spawn(&mut rng, grid, &occupied);
            assert_eq!(fruit.map(Fruit::position), Some(hole));
        }
    }

    #[test]
    fn full_board() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(3, 3);
        let occupied = grid.positions().collect::<HashSet<_>>();
        let mut fruit = Fruit::at(Position::new(1, 1));
        assert_eq!(fruit.relocate(&mut rng, grid, &occupied), None);
        assert_eq!(fruit.position(), Position::new(1, 1));
        assert_eq!(Fruit::spawn(&mut rng, grid, &occupied), None);
    }

    #[test]
    fn spreads_over_free_cells() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(4, 4);
        let occupied = HashSet::from([Position::new(0, 0), Position::new(1, 0)]);
        let seen = (0..2000)
            .filter_map(|_| Fruit::spawn(&mut rng, grid, &occupied))
            .map(Fruit::position)
            .collect::<HashSet<_>>();
        assert_eq!(seen.len(), grid.area() - occupied.len());
    }
}
