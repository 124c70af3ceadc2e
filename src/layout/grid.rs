//! Shaped grid masks.
//!
//! A mask is a rectangle of cells where `true` marks a card slot. Slots are
//! numbered row-major, and deck position `i` goes to slot `i`.
//!
//! ```
//! use memory_match::layout::GridMask;
//!
//! let heart = GridMask::heart();
//! assert_eq!(heart.width(), 8);
//! assert_eq!(heart.height(), 6);
//! assert_eq!(heart.slots()[0].col, 1);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::CardId;
use crate::game::Game;

/// Invalid mask input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
}

/// A cell position, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
}

/// A card assigned to a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub card: CardId,
    pub slot: Slot,
}

/// Rectangular mask of card slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMask {
    width: usize,
    cells: Vec<bool>,
}

const HEART: [[u8; 8]; 6] = [
    [0, 1, 1, 0, 0, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
];

impl GridMask {
    /// Build a mask from rows of 0/1 cells. Any non-zero cell is a slot.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, LayoutError> {
        let width = rows.first().ok_or(LayoutError::Empty)?.as_ref().len();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, cols) in rows.iter().enumerate() {
            let cols = cols.as_ref();
            if cols.len() != width {
                return Err(LayoutError::Ragged {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend(cols.iter().map(|&c| c != 0));
        }
        Ok(Self { width, cells })
    }

    /// The 8×6 heart with 32 slots.
    #[must_use]
    pub fn heart() -> Self {
        Self {
            width: 8,
            cells: HEART.iter().flatten().map(|&c| c != 0).collect(),
        }
    }

    /// Columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    #[must_use]
    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.cells.len() / self.width
        }
    }

    /// Is the cell at `(row, col)` a slot? Out of range is not.
    #[must_use]
    pub fn is_slot(&self, row: usize, col: usize) -> bool {
        col < self.width && self.cells.get(row * self.width + col).copied().unwrap_or(false)
    }

    /// Slots in row-major order.
    #[must_use]
    pub fn slots(&self) -> Vec<Slot> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(|(i, _)| Slot {
                row: i / self.width,
                col: i % self.width,
            })
            .collect()
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Assign the game's cards to slots in deck order. Cards past the last
    /// slot are left unplaced.
    #[must_use]
    pub fn place(&self, game: &Game) -> Vec<Placement> {
        game.deck()
            .iter()
            .zip(self.slots())
            .map(|(card, slot)| Placement { card: card.id, slot })
            .collect()
    }
}
