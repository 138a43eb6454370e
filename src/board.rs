//! One player's grid: ship occupancy, shot history and sunk bookkeeping.
//!
//! Ships live in an arena (`Vec<Ship>`) and each occupied cell stores the
//! `ShipId` of its ship, so every segment of a ship observes the same damage.

use alloc::vec::Vec;
use core::fmt;

use log::trace;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{GameError, GuessResult};
use crate::config::{AUTO_ATTEMPT_CAP, BOARD_SIZE, GRID, NUM_SHIPS};
use crate::ship::{Orientation, Ship};

/// Bitboard sized for the standard grid.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Index of a ship in its board's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Why a placement was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    OffGrid,
    Overlap,
    FleetFull,
}

#[derive(Debug, Clone)]
pub struct Board {
    ships: Vec<Ship>,
    cells: [[Option<ShipId>; GRID]; GRID],
    ship_map: BB,
    shots: BB,
    sunk: usize,
}

impl Board {
    /// Create an empty board (no ships, no shots).
    pub fn new() -> Self {
        Board {
            ships: Vec::with_capacity(NUM_SHIPS),
            cells: [[None; GRID]; GRID],
            ship_map: BB::new(),
            shots: BB::new(),
            sunk: 0,
        }
    }

    /// Place a new ship of `length` with its first segment at (`row`, `col`).
    ///
    /// Returns `Ok(false)` without touching the board when the run leaves the
    /// grid, crosses another ship, or the fleet is already complete. A start
    /// coordinate outside the grid or a zero length is an error.
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<bool, GameError> {
        check_coord(row, col)?;
        let ship = Ship::new(length)?;
        let mask = match self.check_run(row, col, length, orientation) {
            Ok(mask) => mask,
            Err(reason) => {
                trace!(
                    "placement of length {} at ({}, {}) {:?} rejected: {:?}",
                    length,
                    row,
                    col,
                    orientation,
                    reason
                );
                return Ok(false);
            }
        };

        let id = ShipId(self.ships.len());
        self.ships.push(ship);
        for (r, c) in mask.iter_set() {
            self.cells[r][c] = Some(id);
        }
        self.ship_map |= mask;
        Ok(true)
    }

    /// Validate a run without committing it, returning its occupancy mask.
    fn check_run(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<BB, Rejection> {
        if self.ships.len() >= NUM_SHIPS {
            return Err(Rejection::FleetFull);
        }
        let start = if orientation.is_horizontal() { col } else { row };
        if length > GRID - start {
            return Err(Rejection::OffGrid);
        }
        let mask = BB::from_cells((0..length).map(|i| orientation.step(row, col, i)))
            .map_err(|_| Rejection::OffGrid)?;
        if !(self.ship_map & mask).is_empty() {
            return Err(Rejection::Overlap);
        }
        Ok(mask)
    }

    /// Shoot at (`row`, `col`), reporting miss, hit, or the sinking hit.
    ///
    /// Shooting a cell twice is harmless: the mark stays set and the ship's
    /// damage saturates at its length.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<GuessResult, GameError> {
        self.shots.set(row, col)?;
        let Some(id) = self.cells[row][col] else {
            return Ok(GuessResult::Miss);
        };
        let ship = &mut self.ships[id.0];
        let was_sunk = ship.is_sunk();
        ship.hit();
        if !was_sunk && ship.is_sunk() {
            self.sunk += 1;
            Ok(GuessResult::Sink(ship.length()))
        } else {
            Ok(GuessResult::Hit)
        }
    }

    /// Process an attack, returning `true` iff a ship occupied the cell.
    pub fn receive_attack(&mut self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.attack(row, col)?.is_hit())
    }

    /// `true` once at least one ship exists and every placed ship is sunk.
    pub fn are_all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// `true` once the full standard fleet is on the board.
    pub fn are_all_ships_placed(&self) -> bool {
        self.ships.len() == NUM_SHIPS
    }

    pub fn is_shot(&self, row: usize, col: usize) -> Result<bool, GameError> {
        self.shots.get(row, col)
    }

    pub fn has_ship(&self, row: usize, col: usize) -> Result<bool, GameError> {
        self.ship_map.get(row, col)
    }

    /// The ship occupying (`row`, `col`), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Result<Option<&Ship>, GameError> {
        check_coord(row, col)?;
        Ok(self.cells[row][col].map(|id| &self.ships[id.0]))
    }

    /// Arena id of the ship occupying (`row`, `col`), if any.
    pub fn ship_id_at(&self, row: usize, col: usize) -> Result<Option<ShipId>, GameError> {
        check_coord(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Ships in placement order; `ShipId::index` indexes this slice.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ships_placed(&self) -> usize {
        self.ships.len()
    }

    pub fn ships_sunk(&self) -> usize {
        self.sunk
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Every cell shot at so far.
    pub fn shots(&self) -> BB {
        self.shots
    }

    /// Pick a legal (row, col, orientation) for a ship of `length`.
    ///
    /// Draws uniformly random positions up to `AUTO_ATTEMPT_CAP` times, then
    /// scans the grid in row-major order. `Ok(None)` means no legal position
    /// exists.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Option<(usize, usize, Orientation)>, GameError> {
        Ship::new(length)?;
        for _ in 0..AUTO_ATTEMPT_CAP {
            let row = rng.random_range(0..GRID);
            let col = rng.random_range(0..GRID);
            let orientation = Orientation::from_horizontal(rng.random());
            match self.check_run(row, col, length, orientation) {
                Ok(_) => return Ok(Some((row, col, orientation))),
                Err(Rejection::FleetFull) => return Ok(None),
                Err(_) => {}
            }
        }
        trace!("random placement of length {} fell back to a scan", length);
        for row in 0..GRID {
            for col in 0..GRID {
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    if self.check_run(row, col, length, orientation).is_ok() {
                        return Ok(Some((row, col, orientation)));
                    }
                }
            }
        }
        Ok(None)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `.` water, `#` ship, `X` hit, `o` miss.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID {
            for c in 0..GRID {
                let shot = self.shots.get(r, c).unwrap_or(false);
                let glyph = match (self.cells[r][c].is_some(), shot) {
                    (true, true) => 'X',
                    (true, false) => '#',
                    (false, true) => 'o',
                    (false, false) => '.',
                };
                write!(f, "{} ", glyph)?;
            }
            if r + 1 < GRID {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

pub(crate) fn check_coord(row: usize, col: usize) -> Result<(), GameError> {
    if row >= GRID || col >= GRID {
        Err(GameError::OutOfRange { row, col })
    } else {
        Ok(())
    }
}
