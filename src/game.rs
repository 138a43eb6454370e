//! Match orchestration: two boards, two players, placement then combat.

use log::{debug, info, trace};

use crate::{
    board::{check_coord, Board},
    common::{GameError, GuessResult},
    config::{ship_type_for_length, FLEET_LENGTHS, NUM_SHIPS},
    player::{Player, Side},
    ship::Orientation,
};

/// Phase of a match. Transitions only move forward:
/// `Placing -> InProgress -> Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placing,
    InProgress,
    Ended,
}

/// Who shoots next after a resolved move that did not end the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnRule {
    /// The turn passes after every move, hit or miss.
    #[default]
    Alternate,
    /// House rule: a hit lets the shooter fire again.
    ExtraTurnOnHit,
}

/// What became of a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game is not in combat; nothing changed.
    NotInCombat,
    /// The cell was already shot; nothing changed.
    AlreadyShot,
    /// The shot landed on the opponent's board.
    Resolved(GuessResult),
}

impl MoveOutcome {
    /// `true` only for a resolved hit or sink.
    pub fn is_hit(&self) -> bool {
        matches!(self, MoveOutcome::Resolved(r) if r.is_hit())
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    boards: [Board; 2],
    players: [Player; 2],
    current: Side,
    // One flag per fleet slot, per side.
    placed: [[bool; NUM_SHIPS]; 2],
    phase: Phase,
    turn_rule: TurnRule,
    moves: usize,
}

impl Game {
    /// Start a match in the placement phase with `player1` to move first.
    pub fn new(player1: Player, player2: Player) -> Self {
        Self::with_turn_rule(player1, player2, TurnRule::default())
    }

    pub fn with_turn_rule(player1: Player, player2: Player, turn_rule: TurnRule) -> Self {
        Self {
            boards: [Board::new(), Board::new()],
            players: [player1, player2],
            current: Side::First,
            placed: [[false; NUM_SHIPS]; 2],
            phase: Phase::Placing,
            turn_rule,
            moves: 0,
        }
    }

    /// Place a ship for `side`.
    ///
    /// Returns `Ok(false)` with no effect outside the placement phase, when
    /// `side` has no open fleet slot of this length, or when the board rejects
    /// the run. Once both fleets are complete the game enters combat.
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
        side: Side,
    ) -> Result<bool, GameError> {
        check_coord(row, col)?;
        if length == 0 {
            return Err(GameError::InvalidLength { length });
        }
        if self.phase != Phase::Placing {
            trace!("placement ignored in phase {:?}", self.phase);
            return Ok(false);
        }
        let Some(slot) = self.open_slot(side, length) else {
            trace!("{:?} has no open slot for length {}", side, length);
            return Ok(false);
        };
        if !self.boards[side.index()].place_ship(row, col, length, orientation)? {
            return Ok(false);
        }

        self.placed[side.index()][slot] = true;
        debug!(
            "{} placed {} (length {}) at ({}, {}) {:?}",
            self.players[side.index()],
            ship_type_for_length(length).map_or("ship", |t| t.name()),
            length,
            row,
            col,
            orientation
        );
        if Side::BOTH.iter().all(|&s| self.fleet_complete(s)) {
            self.phase = Phase::InProgress;
            info!(
                "fleets complete, {} fires first",
                self.players[self.current.index()]
            );
        }
        Ok(true)
    }

    fn open_slot(&self, side: Side, length: usize) -> Option<usize> {
        let placed = &self.placed[side.index()];
        FLEET_LENGTHS
            .iter()
            .enumerate()
            .position(|(i, &l)| l == length && !placed[i])
    }

    /// Fire the active player's shot at (`row`, `col`) on the opponent's board.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        check_coord(row, col)?;
        if self.phase != Phase::InProgress {
            trace!("move ignored in phase {:?}", self.phase);
            return Ok(MoveOutcome::NotInCombat);
        }
        let shooter = self.current;
        let target = &mut self.boards[shooter.opponent().index()];
        if target.is_shot(row, col)? {
            trace!("({}, {}) already shot", row, col);
            return Ok(MoveOutcome::AlreadyShot);
        }

        let result = target.attack(row, col)?;
        self.moves += 1;
        debug!(
            "{} fires at ({}, {}): {:?}",
            self.players[shooter.index()],
            row,
            col,
            result
        );

        if target.are_all_ships_sunk() {
            self.phase = Phase::Ended;
            info!(
                "{} wins after {} moves",
                self.players[shooter.index()],
                self.moves
            );
        } else if !(self.turn_rule == TurnRule::ExtraTurnOnHit && result.is_hit()) {
            self.current = shooter.opponent();
        }
        Ok(MoveOutcome::Resolved(result))
    }

    /// Fire at (`row`, `col`), returning `true` for a hit. Rejected moves
    /// return `false` and change nothing.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.fire(row, col)?.is_hit())
    }

    /// The side whose opponent has been sunk, once the game has ended.
    pub fn winning_side(&self) -> Option<Side> {
        if self.phase != Phase::Ended {
            return None;
        }
        Side::BOTH
            .into_iter()
            .find(|s| self.boards[s.opponent().index()].are_all_ships_sunk())
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winning_side().map(|s| self.player(s))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_placing_ships(&self) -> bool {
        self.phase == Phase::Placing
    }

    pub fn is_game_in_progress(&self) -> bool {
        self.phase == Phase::InProgress
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    pub fn turn_rule(&self) -> TurnRule {
        self.turn_rule
    }

    pub fn current_side(&self) -> Side {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// `true` once every fleet slot of `side` holds a ship.
    pub fn fleet_complete(&self, side: Side) -> bool {
        self.placed[side.index()].iter().all(|&p| p)
    }

    /// Lengths `side` still has to place, in fleet order.
    pub fn remaining_lengths(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        FLEET_LENGTHS
            .iter()
            .zip(self.placed[side.index()].iter())
            .filter(|(_, placed)| !**placed)
            .map(|(&len, _)| len)
    }

    /// Resolved moves so far, both sides combined.
    pub fn moves_made(&self) -> usize {
        self.moves
    }
}
