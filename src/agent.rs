use rand::rngs::SmallRng;

use crate::{
    common::GameError,
    game::{Game, MoveOutcome},
    player::Side,
};

/// Anything that can drive one side of a match: a bot, a scripted test
/// driver, or a bridge to a human front end.
pub trait Agent {
    /// Place every ship `side` still owes, through `game`.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        game: &mut Game,
        side: Side,
    ) -> Result<(), GameError>;

    /// Choose the next cell to fire at on the board opposite `side`.
    /// `None` when no unshot cell remains.
    fn select_target(&mut self, rng: &mut SmallRng, game: &Game, side: Side)
        -> Option<(usize, usize)>;

    /// Inform the agent of what its last shot did.
    fn handle_outcome(&mut self, _coord: (usize, usize), _outcome: MoveOutcome) {}
}
