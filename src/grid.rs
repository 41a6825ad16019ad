use thiserror::Error;

/// Smallest allowed extent on either axis: one border cell on each side and at least one
/// interior cell in between.
pub const MIN_DIMENSION: usize = 3;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid of {width}x{height} cells has no interior, both sides must be at least 3")]
    TooSmall { width: usize, height: usize },

    #[error("cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// A single cell of the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    /// generations since birth, saturating at `u8::MAX`
    pub age: u8,
}

impl Cell {
    pub const DEAD: Cell = Cell {
        alive: false,
        age: 0,
    };

    /// A freshly born cell.
    pub const NEWBORN: Cell = Cell {
        alive: true,
        age: 1,
    };
}

/// Selects one of the two buffers owned by a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    Current,
    Next,
}

/// Fixed size, double buffered board.
///
/// Both buffers are stored row-major (`y * width + x`). The outermost ring of cells is the
/// border: it is never written by the simulation and stays dead, so every interior cell has a
/// full 3x3 window without any bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Allocates two dead buffers of `width * height` cells.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(GridError::TooSmall { width, height });
        }

        Ok(Self {
            width,
            height,
            current: vec![Cell::DEAD; width * height],
            next: vec![Cell::DEAD; width * height],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Exchanges the current and next buffers. Only the two vector handles move.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    pub fn cell_at(&self, buffer: Buffer, x: usize, y: usize) -> Option<Cell> {
        let idx = self.idx(x, y)?;
        Some(self.buffer(buffer)[idx])
    }

    pub fn set_cell(
        &mut self,
        buffer: Buffer,
        x: usize,
        y: usize,
        value: Cell,
    ) -> Result<(), GridError> {
        let idx = self.idx(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.buffer_mut(buffer)[idx] = value;
        Ok(())
    }

    /// Whether `(x, y)` lies on the outer ring of the grid.
    #[inline]
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    /// Coordinates of every interior cell, row by row.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> {
        let (width, height) = (self.width, self.height);
        (1..height - 1).flat_map(move |y| (1..width - 1).map(move |x| (x, y)))
    }

    /// Count of live cells in the current buffer.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.alive).count()
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    #[inline]
    pub(crate) fn buffer(&self, buffer: Buffer) -> &[Cell] {
        match buffer {
            Buffer::Current => &self.current,
            Buffer::Next => &self.next,
        }
    }

    #[inline]
    pub(crate) fn buffer_mut(&mut self, buffer: Buffer) -> &mut [Cell] {
        match buffer {
            Buffer::Current => &mut self.current,
            Buffer::Next => &mut self.next,
        }
    }

    /// Borrows the current buffer for reading and the next buffer for writing at the same time.
    #[inline]
    pub(crate) fn split(&mut self) -> (&[Cell], &mut [Cell]) {
        (&self.current, &mut self.next)
    }
}
