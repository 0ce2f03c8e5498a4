//! Pieces module - Tetromino shapes and matrix rotation
//!
//! Every piece is a tight boolean occupancy matrix (no empty edge rows or
//! columns). Rotation is a plain 90° clockwise transpose-and-reverse of that
//! matrix; there is no kick table, so a rotation that collides is simply
//! rejected by the caller.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, SPAWN_ROW};

/// Largest edge of any shape matrix (the I piece)
pub const MAX_EDGE: usize = 4;

/// Board coordinates (column, row) of the four minos of a piece
pub type Cells = ArrayVec<(i16, i16), 4>;

/// Occupancy matrix of a piece in its current rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_EDGE]; MAX_EDGE],
}

const fn matrix<const R: usize, const C: usize>(grid: [[u8; C]; R]) -> Shape {
    let mut cells = [[false; MAX_EDGE]; MAX_EDGE];
    let mut r = 0;
    while r < R {
        let mut c = 0;
        while c < C {
            cells[r][c] = grid[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    Shape {
        rows: R as u8,
        cols: C as u8,
        cells,
    }
}

const I_SHAPE: Shape = matrix([[1, 1, 1, 1]]);
const O_SHAPE: Shape = matrix([[1, 1], [1, 1]]);
const T_SHAPE: Shape = matrix([[0, 1, 0], [1, 1, 1]]);
const S_SHAPE: Shape = matrix([[0, 1, 1], [1, 1, 0]]);
const Z_SHAPE: Shape = matrix([[1, 1, 0], [0, 1, 1]]);
const J_SHAPE: Shape = matrix([[1, 0, 0], [1, 1, 1]]);
const L_SHAPE: Shape = matrix([[0, 0, 1], [1, 1, 1]]);

/// Get the spawn-orientation shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

impl Shape {
    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (row, col) is filled. Out of range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Rotate 90° clockwise: `new[i][j] = old[rows - 1 - j][i]`.
    pub fn rotate_cw(&self) -> Shape {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_EDGE]; MAX_EDGE];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Filled (row, col) positions in row-major order.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r, c))
        })
    }

    /// Board cells covered by this shape with its top-left corner at (x, y).
    pub fn cells_at(&self, x: i16, y: i16) -> Cells {
        let mut out = Cells::new();
        for (r, c) in self.filled() {
            out.push((x + c as i16, y + r as i16));
        }
        out
    }
}

/// Spawn column that centres a shape on a board of the given width
pub fn spawn_column(shape: &Shape, board_width: u16) -> i16 {
    (board_width as i16 - shape.cols as i16) / 2
}

/// A falling piece: fixed kind, mutable position and orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    x: i16,
    y: i16,
    shape: Shape,
    /// Quarter turns applied since spawn (0..=3)
    rotation: u8,
}

impl Piece {
    /// Create a piece in spawn orientation with its top-left corner at (x, y)
    pub fn spawn(kind: PieceKind, x: i16, y: i16) -> Self {
        Self {
            kind,
            x,
            y,
            shape: get_shape(kind),
            rotation: 0,
        }
    }

    /// Create a piece at the standard spawn coordinate for a board width
    pub fn spawn_for(kind: PieceKind, board_width: u16) -> Self {
        let shape = get_shape(kind);
        Self::spawn(kind, spawn_column(&shape, board_width), SPAWN_ROW)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Candidate matrix for a clockwise rotation. The piece is not changed.
    pub fn rotated(&self) -> Shape {
        self.shape.rotate_cw()
    }

    /// Commit a rotation previously produced by [`Piece::rotated`].
    pub fn apply_rotation(&mut self, shape: Shape) {
        self.shape = shape;
        self.rotation = (self.rotation + 1) % 4;
    }

    /// Shift the piece. No bounds checking: validate against the board first.
    pub fn translate(&mut self, dx: i16, dy: i16) {
        self.x += dx;
        self.y += dy;
    }

    /// Board cells occupied by this piece
    pub fn occupied_cells(&self) -> Cells {
        self.shape.cells_at(self.x, self.y)
    }

    /// Board cells this piece would occupy after moving by (dx, dy)
    pub fn cells_offset(&self, dx: i16, dy: i16) -> Cells {
        self.shape.cells_at(self.x + dx, self.y + dy)
    }
}
