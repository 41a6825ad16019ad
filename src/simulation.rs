use crate::{
    grid::{Buffer, Grid, GridError},
    rules::Rules,
    seed::seed,
};

/// A seeded board together with the rules that drive it.
///
/// This is the whole surface a renderer needs: build it once with [`Simulation::initialize`],
/// call [`Simulation::advance`] once per tick and read cells back with [`Simulation::alive`] and
/// [`Simulation::age`].
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    rules: Rules,
    generation: u64,
}

impl Simulation {
    /// Allocates a `width * height` grid and seeds its interior from `rng`.
    pub fn initialize(
        width: usize,
        height: usize,
        rules: Rules,
        rng: &mut fastrand::Rng,
    ) -> Result<Self, GridError> {
        let mut grid = Grid::new(width, height)?;
        seed(&mut grid, rng);
        Ok(Self {
            grid,
            rules,
            generation: 0,
        })
    }

    /// Wraps an already prepared grid without touching its cells.
    #[cfg(test)]
    pub(crate) fn from_grid(grid: Grid, rules: Rules) -> Self {
        Self {
            grid,
            rules,
            generation: 0,
        }
    }

    /// Moves the board forward exactly one generation.
    pub fn advance(&mut self) {
        self.rules.step(&mut self.grid);
        self.generation += 1;
    }

    /// Re-rolls every interior cell and restarts the generation counter.
    pub fn reseed(&mut self, rng: &mut fastrand::Rng) {
        seed(&mut self.grid, rng);
        self.generation = 0;
    }

    /// Whether the cell is alive in the current generation. Out of range cells are dead.
    #[inline]
    pub fn alive(&self, x: usize, y: usize) -> bool {
        self.grid
            .cell_at(Buffer::Current, x, y)
            .is_some_and(|cell| cell.alive)
    }

    /// Age of the cell in the current generation, 0 for out of range cells.
    #[inline]
    pub fn age(&self, x: usize, y: usize) -> u8 {
        self.grid
            .cell_at(Buffer::Current, x, y)
            .map_or(0, |cell| cell.age)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Generations advanced since the last (re)seed.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[cfg(test)]
    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn initialize_validates_size() {
        let mut rng = fastrand::Rng::with_seed(0);
        assert_eq!(
            GridError::TooSmall {
                width: 1,
                height: 50
            },
            Simulation::initialize(1, 50, Rules::default(), &mut rng).unwrap_err()
        );
    }

    #[test]
    fn initialize_seeds_interior_only() {
        let mut rng = fastrand::Rng::with_seed(42);
        let sim = Simulation::initialize(50, 50, Rules::default(), &mut rng).unwrap();
        assert_eq!(0, sim.generation());
        assert!(sim.population() > 0);

        for i in 0..50 {
            for (x, y) in [(i, 0), (i, 49), (0, i), (49, i)] {
                assert!(!sim.alive(x, y));
                assert_eq!(0, sim.age(x, y));
            }
        }
        for (x, y) in sim.grid().interior() {
            assert_eq!(sim.alive(x, y), sim.age(x, y) == 1);
        }
    }

    #[test]
    fn advance_counts_generations() {
        let mut grid = Grid::new(5, 5).unwrap();
        for (x, y) in [(2, 1), (2, 2), (2, 3)] {
            grid.set_cell(Buffer::Current, x, y, Cell::NEWBORN).unwrap();
        }
        let mut sim = Simulation::from_grid(grid, Rules::default());

        sim.advance();
        assert_eq!(1, sim.generation());
        assert!(sim.alive(1, 2) && sim.alive(2, 2) && sim.alive(3, 2));
        assert!(!sim.alive(2, 1) && !sim.alive(2, 3));
        assert_eq!(3, sim.population());

        sim.advance();
        assert_eq!(2, sim.generation());
        assert!(sim.alive(2, 1) && sim.alive(2, 2) && sim.alive(2, 3));
    }

    #[test]
    fn out_of_range_reads_are_dead() {
        let mut rng = fastrand::Rng::with_seed(5);
        let sim = Simulation::initialize(10, 8, Rules::default(), &mut rng).unwrap();
        assert!(!sim.alive(10, 0));
        assert!(!sim.alive(0, 8));
        assert_eq!(0, sim.age(usize::MAX, usize::MAX));
    }

    #[test]
    fn border_stays_dead_over_many_generations() {
        let mut rng = fastrand::Rng::with_seed(2024);
        let mut sim = Simulation::initialize(24, 16, Rules::default(), &mut rng).unwrap();
        for _ in 0..200 {
            sim.advance();
            for x in 0..24 {
                assert!(!sim.alive(x, 0) && !sim.alive(x, 15));
                assert_eq!(0, sim.age(x, 0) + sim.age(x, 15));
            }
            for y in 0..16 {
                assert!(!sim.alive(0, y) && !sim.alive(23, y));
                assert_eq!(0, sim.age(0, y) + sim.age(23, y));
            }
        }
    }

    #[test]
    fn same_seed_same_history() {
        let init = || {
            let mut rng = fastrand::Rng::with_seed(8);
            Simulation::initialize(32, 32, Rules::default(), &mut rng).unwrap()
        };
        let (mut a, mut b) = (init(), init());
        for _ in 0..50 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn reseed_restarts_generation() {
        let mut rng = fastrand::Rng::with_seed(11);
        let mut sim = Simulation::initialize(16, 16, Rules::default(), &mut rng).unwrap();
        sim.advance();
        sim.advance();
        sim.reseed(&mut rng);
        assert_eq!(0, sim.generation());
        assert_eq!(&Rules::default(), sim.rules());
    }
}
