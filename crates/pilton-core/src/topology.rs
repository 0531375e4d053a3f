//! Toroidal grid arithmetic.

use crate::error::{Error, Result};
use crate::types::{Direction, Position};
use serde::Serialize;
use std::fmt;

/// Column count of the reference universe.
pub const CELL_COLS: i32 = 7;
/// Row count of the reference universe.
pub const CELL_ROWS: i32 = 7;

/// Mathematical modulo: the result always lies in `[0, divisor)`, also for negative dividends.
///
/// `divisor` must be positive.
pub fn wrapped_modulo(dividend: i64, divisor: i64) -> i64 {
    debug_assert!(divisor > 0, "wrapped_modulo divisor must be positive");
    dividend.rem_euclid(divisor)
}

/// True iff `b` sits exactly one wrapped step left/right of `a` in the same row, or one
/// wrapped step up/down in the same column. Diagonal cells are never adjacent.
pub fn is_axis_adjacent(a: Position, b: Position, dims: GridDimensions) -> bool {
    let left = dims.wrap_x(i64::from(a.x) - 1);
    let right = dims.wrap_x(i64::from(a.x) + 1);
    let above = dims.wrap_y(i64::from(a.y) - 1);
    let below = dims.wrap_y(i64::from(a.y) + 1);

    ((b.x == left || b.x == right) && b.y == a.y) || ((b.y == above || b.y == below) && b.x == a.x)
}

/// Size of a rectangular torus. Both dimensions are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridDimensions {
    cols: i32,
    rows: i32,
}

impl GridDimensions {
    /// The 7x7 universe of the original model.
    pub const REFERENCE: GridDimensions = GridDimensions {
        cols: CELL_COLS,
        rows: CELL_ROWS,
    };

    pub fn new(cols: i32, rows: i32) -> Result<Self> {
        if cols <= 0 || rows <= 0 {
            return Err(Error::Validation(format!(
                "grid dimensions must be positive, got {}x{}",
                cols, rows
            )));
        }
        Ok(Self { cols, rows })
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Wrap an arbitrary column value onto the torus.
    pub fn wrap_x(&self, x: i64) -> i32 {
        // Result is below `cols`, so it always fits.
        wrapped_modulo(x, i64::from(self.cols)) as i32
    }

    /// Wrap an arbitrary row value onto the torus.
    pub fn wrap_y(&self, y: i64) -> i32 {
        wrapped_modulo(y, i64::from(self.rows)) as i32
    }

    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(self.wrap_x(i64::from(pos.x)), self.wrap_y(i64::from(pos.y)))
    }

    /// Whether a position is already in canonical `[0, cols) x [0, rows)` form.
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.cols).contains(&pos.x) && (0..self.rows).contains(&pos.y)
    }

    /// The four side neighbors of `pos`, wrapped. On very narrow grids some of them coincide.
    pub fn side_neighbors(&self, pos: Position) -> [Position; 4] {
        Direction::SIDES.map(|dir| self.wrap(pos.step(dir)))
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}
