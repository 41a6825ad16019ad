use crate::grid::{Cell, Grid};

/// Birth and survival thresholds, counted over the 8 surrounding cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// exact neighbour count that brings a dead cell to life
    pub born: u8,
    /// inclusive lower bound of the survival band
    pub min_survive: u8,
    /// inclusive upper bound of the survival band
    pub max_survive: u8,
}

impl Default for Rules {
    /// B3/S23
    fn default() -> Self {
        Self {
            born: 3,
            min_survive: 2,
            max_survive: 3,
        }
    }
}

impl Rules {
    /// Computes the next state of `cell` given its live neighbour count.
    ///
    /// The first matching branch wins:
    /// 1. dead with exactly `born` neighbours: a newborn of age 1, whatever age it had before
    /// 2. neighbours outside `min_survive..=max_survive`: dead, age 0
    /// 3. otherwise the cell is carried over unchanged, age included
    #[inline]
    pub fn transition(&self, cell: Cell, neighbours: u8) -> Cell {
        if !cell.alive && neighbours == self.born {
            Cell::NEWBORN
        } else if neighbours < self.min_survive || neighbours > self.max_survive {
            Cell::DEAD
        } else {
            cell
        }
    }

    /// Advances `grid` by one generation.
    ///
    /// Every interior cell is evaluated from the current buffer into the next one, then the
    /// buffers are swapped. Border cells are neither read as centers nor written.
    pub fn step(&self, grid: &mut Grid) {
        let width = grid.width();
        let height = grid.height();
        let (current, next) = grid.split();

        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let idx = y * width + x;
                let neighbours = neighbour_count(current, width, idx);
                next[idx] = self.transition(current[idx], neighbours);
            }
        }

        grid.swap();
    }
}

/// Live cells in the 3x3 window around `idx`, center excluded. `idx` must be interior.
#[inline]
fn neighbour_count(cells: &[Cell], width: usize, idx: usize) -> u8 {
    let above = idx - width;
    let below = idx + width;
    [
        above - 1,
        above,
        above + 1,
        idx - 1,
        idx + 1,
        below - 1,
        below,
        below + 1,
    ]
    .into_iter()
    .map(|i| cells[i].alive as u8)
    .sum()
}
