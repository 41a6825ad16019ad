use crate::grid::{Buffer, Cell, Grid};

/// Fills the interior of the current buffer with newborn or dead cells, a fair coin flip from
/// `rng` per cell. The border is left as it is.
pub fn seed(grid: &mut Grid, rng: &mut fastrand::Rng) {
    let width = grid.width();
    let height = grid.height();
    let current = grid.buffer_mut(Buffer::Current);

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            current[y * width + x] = if rng.bool() {
                Cell::NEWBORN
            } else {
                Cell::DEAD
            };
        }
    }
}
