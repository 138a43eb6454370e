//! Ship definitions and damage tracking.

use crate::common::GameError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along columns from the origin.
    Horizontal,
    /// Extends along rows from the origin.
    Vertical,
}

impl Orientation {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }

    /// Cell `offset` steps from `(row, col)` along this orientation.
    pub(crate) fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A single vessel. Damage only grows and saturates at the ship's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    hit_count: usize,
}

impl Ship {
    /// Create an undamaged ship. A zero length is a caller bug.
    pub fn new(length: usize) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::InvalidLength { length });
        }
        Ok(Ship {
            length,
            hit_count: 0,
        })
    }

    /// Register one hit. No-op once the ship is sunk.
    pub fn hit(&mut self) {
        if self.hit_count < self.length {
            self.hit_count += 1;
        }
    }

    /// Check if the ship is sunk (every segment hit).
    pub fn is_sunk(&self) -> bool {
        self.hit_count == self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }
}
