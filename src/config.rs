use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Fleet lengths in placement order.
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random draws an automated placement or target search makes before it
/// switches to a deterministic scan of the grid.
pub const AUTO_ATTEMPT_CAP: usize = 1_000;

/// Grid dimension as a `usize`, for indexing.
pub(crate) const GRID: usize = BOARD_SIZE as usize;

/// Look up the fleet entry for a ship length. Lengths shared by two ships
/// resolve to the first of them.
pub fn ship_type_for_length(length: usize) -> Option<ShipType> {
    SHIPS.iter().copied().find(|def| def.length() == length)
}
