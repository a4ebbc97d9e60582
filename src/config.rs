use crate::ship::ShipType;

/// Width and height of the square board.
pub const BOARD_SIZE: usize = 8;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Start cells sampled for a whole fleet before giving up.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Endpoints of the fixed player layout, in roster order.
pub const PRESET_LAYOUT: [(&str, &str); NUM_SHIPS] = [
    ("A1", "A5"),
    ("F1", "F4"),
    ("G4", "G6"),
    ("F8", "H8"),
    ("C5", "C6"),
];

/// Tunables for randomized fleet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Upper bound on start cells sampled across the whole fleet.
    pub max_attempts: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Convert a ship name string to the canonical static name used in the
/// configuration. Returns `None` if the name does not match any defined ship.
pub fn ship_name_static(name: &str) -> Option<&'static str> {
    SHIPS
        .iter()
        .find(|def| def.name().eq_ignore_ascii_case(name))
        .map(|def| def.name())
}
