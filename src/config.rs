use crate::ship::Species;

/// Side length of the standard board (rows A–J, columns 1–10).
pub const BOARD_SIZE: usize = 10;

/// Largest supported board; bounded by the 128-bit cell sets.
pub const MAX_BOARD_SIZE: usize = 11;

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [Species; NUM_SHIPS] = [
    Species::new("Carrier", 5),
    Species::new("Battleship", 4),
    Species::new("Cruiser", 3),
    Species::new("Submarine", 3),
    Species::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random placement tries per ship before the fleet is restarted.
pub const PLACEMENT_ATTEMPTS_PER_SHIP: usize = 100;

/// Full fleet restarts before random placement gives up.
pub const PLACEMENT_FLEET_RESTARTS: usize = 20;

/// Untried-cell count at or below which the smart hunt drops the parity
/// restriction and scores every open cell.
pub const EXHAUSTIVE_HUNT_THRESHOLD: usize = 20;

/// Parity class hunted first: cells with `(row + col) % 2 == HUNT_PARITY`.
pub const HUNT_PARITY: usize = 0;

/// Look up a standard species by name.
pub fn species_by_name(name: &str) -> Option<Species> {
    SHIPS.iter().copied().find(|s| s.name().eq_ignore_ascii_case(name))
}
