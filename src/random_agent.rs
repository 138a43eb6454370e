//! Uniform-random opponent: random placement, random firing.

use alloc::vec::Vec;

use log::{debug, warn};
use rand::{rngs::SmallRng, Rng};

use crate::{
    agent::Agent,
    common::GameError,
    config::{AUTO_ATTEMPT_CAP, GRID},
    game::Game,
    player::Side,
    ship::Orientation,
};

/// Places and fires uniformly at random. Both searches give up on random
/// draws after `AUTO_ATTEMPT_CAP` tries and fall back to a grid scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomAgent {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        game: &mut Game,
        side: Side,
    ) -> Result<(), GameError> {
        let lengths: Vec<usize> = game.remaining_lengths(side).collect();
        'ships: for length in lengths {
            for attempt in 0..AUTO_ATTEMPT_CAP {
                let row = rng.random_range(0..GRID);
                let col = rng.random_range(0..GRID);
                let orientation = Orientation::from_horizontal(rng.random());
                if game.place_ship(row, col, length, orientation, side)? {
                    debug!("{:?} placed length {} after {} draws", side, length, attempt + 1);
                    continue 'ships;
                }
            }
            warn!(
                "{:?}: no random spot for length {} after {} draws, scanning",
                side, length, AUTO_ATTEMPT_CAP
            );
            let (row, col, orientation) = game
                .board(side)
                .random_placement(rng, length)?
                .ok_or(GameError::UnableToPlaceShip { length })?;
            if !game.place_ship(row, col, length, orientation, side)? {
                return Err(GameError::UnableToPlaceShip { length });
            }
        }
        Ok(())
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        game: &Game,
        side: Side,
    ) -> Option<(usize, usize)> {
        let shots = game.board(side.opponent()).shots();
        if shots.is_full() {
            return None;
        }
        for _ in 0..AUTO_ATTEMPT_CAP {
            let row = rng.random_range(0..GRID);
            let col = rng.random_range(0..GRID);
            if !shots.get(row, col).unwrap_or(true) {
                return Some((row, col));
            }
        }
        shots.iter_clear().next()
    }
}
