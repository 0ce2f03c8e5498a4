//! Read-only view of a session for front-ends.
//!
//! A snapshot owns its data, so a renderer can hold it while the engine keeps
//! running. [`GameState::snapshot_into`](crate::GameState::snapshot_into)
//! reuses the board buffer of an existing snapshot between frames.

use crate::pieces::{get_shape, Cells, Piece, Shape};
use crate::types::{Cell, GameStatus, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i16,
    pub y: i16,
    pub rotation: u8,
    /// Board cells covered by the piece, some possibly above row 0
    pub cells: Cells,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            x: piece.x(),
            y: piece.y(),
            rotation: piece.rotation(),
            cells: piece.occupied_cells(),
        }
    }
}

/// Preview of the upcoming piece in spawn orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl From<&Piece> for NextSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            shape: get_shape(piece.kind()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Locked cells, row-major
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<NextSnapshot>,
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub high_score: u32,
    pub sound_enabled: bool,
}

impl GameSnapshot {
    /// Locked cell at (x, y); out of range reads as empty.
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .flatten()
    }

    /// Whether the active piece covers (x, y)
    pub fn active_covers(&self, x: u16, y: u16) -> bool {
        self.active.as_ref().is_some_and(|a| {
            a.cells
                .iter()
                .any(|&(cx, cy)| cx == x as i16 && cy == y as i16)
        })
    }
}
