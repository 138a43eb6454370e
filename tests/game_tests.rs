use broadside::{
    Game, GameError, GuessResult, MoveOutcome, Orientation, Phase, Player, Side, TurnRule,
    FLEET_LENGTHS,
};

fn new_game() -> Game {
    Game::new(Player::new("alice"), Player::new("bob"))
}

/// Fleet rows 0, 2, 4, 6, 8 starting at column 0.
fn place_fleet(game: &mut Game, side: Side) -> Result<(), GameError> {
    for (i, &len) in FLEET_LENGTHS.iter().enumerate() {
        assert!(game.place_ship(i * 2, 0, len, Orientation::Horizontal, side)?);
    }
    Ok(())
}

fn fleet_cells() -> Vec<(usize, usize)> {
    FLEET_LENGTHS
        .iter()
        .enumerate()
        .flat_map(|(i, &len)| (0..len).map(move |c| (i * 2, c)))
        .collect()
}

fn started_game() -> Result<Game, GameError> {
    let mut game = new_game();
    place_fleet(&mut game, Side::First)?;
    place_fleet(&mut game, Side::Second)?;
    Ok(game)
}

#[test]
fn test_starts_in_placement() {
    let game = new_game();
    assert_eq!(game.phase(), Phase::Placing);
    assert!(game.is_placing_ships());
    assert!(!game.is_game_in_progress());
    assert!(!game.is_game_over());
    assert_eq!(game.current_player().name(), "alice");
    assert_eq!(game.winner(), None);
}

#[test]
fn test_combat_starts_after_last_placement() -> Result<(), GameError> {
    let mut game = new_game();
    place_fleet(&mut game, Side::First)?;
    assert!(game.fleet_complete(Side::First));
    assert!(game.is_placing_ships());

    for (i, &len) in FLEET_LENGTHS.iter().enumerate() {
        assert!(game.is_placing_ships());
        assert!(game.place_ship(i * 2, 0, len, Orientation::Horizontal, Side::Second)?);
    }
    assert!(!game.is_placing_ships());
    assert!(game.is_game_in_progress());
    assert_eq!(game.phase(), Phase::InProgress);
    Ok(())
}

#[test]
fn test_duplicate_length_needs_two_placements() -> Result<(), GameError> {
    let mut game = new_game();
    assert!(game.place_ship(0, 0, 3, Orientation::Horizontal, Side::First)?);
    assert_eq!(
        game.remaining_lengths(Side::First).collect::<Vec<_>>(),
        vec![5, 4, 3, 2]
    );
    assert!(game.place_ship(2, 0, 3, Orientation::Horizontal, Side::First)?);
    assert_eq!(
        game.remaining_lengths(Side::First).collect::<Vec<_>>(),
        vec![5, 4, 2]
    );
    // a third length-3 ship has no slot left
    assert!(!game.place_ship(4, 0, 3, Orientation::Horizontal, Side::First)?);
    assert_eq!(game.board(Side::First).ships_placed(), 2);
    Ok(())
}

#[test]
fn test_placement_rejections() -> Result<(), GameError> {
    let mut game = new_game();
    assert!(!game.place_ship(0, 8, 5, Orientation::Horizontal, Side::First)?);
    assert!(game.place_ship(0, 0, 5, Orientation::Horizontal, Side::First)?);
    assert!(!game.place_ship(0, 2, 4, Orientation::Vertical, Side::First)?);
    // lengths outside the fleet have no slot
    assert!(!game.place_ship(5, 5, 6, Orientation::Horizontal, Side::First)?);
    assert!(!game.place_ship(5, 5, 1, Orientation::Horizontal, Side::First)?);
    // boards are independent
    assert!(game.place_ship(0, 2, 4, Orientation::Vertical, Side::Second)?);
    assert_eq!(
        game.place_ship(0, 0, 0, Orientation::Vertical, Side::Second),
        Err(GameError::InvalidLength { length: 0 })
    );
    assert!(game
        .place_ship(0, 10, 2, Orientation::Vertical, Side::Second)
        .is_err());
    Ok(())
}

#[test]
fn test_no_moves_during_placement() -> Result<(), GameError> {
    let mut game = new_game();
    place_fleet(&mut game, Side::First)?;
    assert!(!game.make_move(0, 0)?);
    assert_eq!(game.fire(0, 0)?, MoveOutcome::NotInCombat);
    assert!(!game.board(Side::Second).is_shot(0, 0)?);
    assert_eq!(game.current_side(), Side::First);
    Ok(())
}

#[test]
fn test_no_placement_during_combat() -> Result<(), GameError> {
    let mut game = started_game()?;
    assert!(!game.place_ship(9, 9, 2, Orientation::Horizontal, Side::First)?);
    Ok(())
}

#[test]
fn test_miss_passes_turn() -> Result<(), GameError> {
    let mut game = started_game()?;
    assert!(!game.board(Side::Second).has_ship(1, 0)?);
    assert!(!game.make_move(1, 0)?);
    assert_eq!(game.current_player().name(), "bob");
    assert!(game.board(Side::Second).is_shot(1, 0)?);
    Ok(())
}

#[test]
fn test_hit_passes_turn_by_default() -> Result<(), GameError> {
    let mut game = started_game()?;
    assert!(game.make_move(0, 0)?);
    assert_eq!(game.current_side(), Side::Second);
    // bob now shoots at alice's board
    assert!(game.make_move(0, 0)?);
    assert!(game.board(Side::First).is_shot(0, 0)?);
    assert_eq!(game.current_side(), Side::First);
    Ok(())
}

#[test]
fn test_extra_turn_on_hit() -> Result<(), GameError> {
    let mut game = Game::with_turn_rule(
        Player::new("alice"),
        Player::new("bob"),
        TurnRule::ExtraTurnOnHit,
    );
    place_fleet(&mut game, Side::First)?;
    place_fleet(&mut game, Side::Second)?;
    assert!(game.make_move(0, 0)?);
    assert_eq!(game.current_side(), Side::First);
    assert!(!game.make_move(9, 9)?);
    assert_eq!(game.current_side(), Side::Second);
    Ok(())
}

#[test]
fn test_repeat_shot_rejected() -> Result<(), GameError> {
    let mut game = started_game()?;
    assert!(game.make_move(0, 0)?);
    assert!(!game.make_move(5, 5)?);
    // alice again, at the already shot (0, 0)
    assert_eq!(game.current_side(), Side::First);
    for _ in 0..3 {
        assert_eq!(game.fire(0, 0)?, MoveOutcome::AlreadyShot);
        assert!(!game.make_move(0, 0)?);
    }
    assert_eq!(game.current_side(), Side::First);
    let ship = game.board(Side::Second).ship_at(0, 0)?.expect("carrier");
    assert_eq!(ship.hit_count(), 1);
    assert_eq!(game.moves_made(), 2);
    Ok(())
}

#[test]
fn test_sinking_last_ship_ends_game() -> Result<(), GameError> {
    let mut game = started_game()?;
    let targets = fleet_cells();
    let (last, rest) = targets.split_last().expect("fleet cells");
    let mut bob_misses = (0..10).flat_map(|c| [(1, c), (3, c), (5, c)]);

    for &(r, c) in rest {
        assert!(game.make_move(r, c)?);
        let (br, bc) = bob_misses.next().expect("spare water");
        assert!(!game.make_move(br, bc)?);
    }
    assert!(game.is_game_in_progress());
    assert_eq!(game.winner(), None);

    assert_eq!(
        game.fire(last.0, last.1)?,
        MoveOutcome::Resolved(GuessResult::Sink(2))
    );
    assert!(!game.is_game_in_progress());
    assert!(game.is_game_over());
    assert_eq!(game.phase(), Phase::Ended);
    assert_eq!(game.winning_side(), Some(Side::First));
    assert_eq!(game.winner().map(Player::name), Some("alice"));
    // active player stays with the winner
    assert_eq!(game.current_side(), Side::First);
    assert!(game.board(Side::Second).are_all_ships_sunk());

    // nothing more is accepted
    assert_eq!(game.fire(9, 9)?, MoveOutcome::NotInCombat);
    assert!(!game.place_ship(9, 9, 2, Orientation::Horizontal, Side::First)?);
    Ok(())
}

#[test]
fn test_out_of_range_move_is_error() -> Result<(), GameError> {
    let mut game = started_game()?;
    assert_eq!(
        game.make_move(10, 3),
        Err(GameError::OutOfRange { row: 10, col: 3 })
    );
    assert_eq!(game.current_side(), Side::First);
    Ok(())
}
