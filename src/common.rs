//! Common types for the engine: placement/board errors and shot outcomes.

/// Result of resolving a shot against a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize), serde(tag = "result", rename_all = "snake_case"))]
pub enum ShotOutcome {
    /// No ship occupies the targeted cell.
    Miss,
    /// The shot struck the named ship, which is still afloat.
    Hit { ship: &'static str },
    /// The shot struck the named ship and every one of its cells is now hit.
    Destroyed { ship: &'static str },
}

impl ShotOutcome {
    /// `true` for both `Hit` and `Destroyed`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    /// Name of the ship that was struck, if any.
    pub fn ship(&self) -> Option<&'static str> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit { ship } | ShotOutcome::Destroyed { ship } => Some(ship),
        }
    }
}

/// Errors returned by placement, shot and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Position text is not a letter followed by a single digit.
    InvalidInputFormat,
    /// Position is well formed but lies off the board.
    OutOfBounds,
    /// Start and end share neither a row nor a column.
    NotCollinear,
    /// Endpoints are collinear but span `actual` cells instead of `expected`.
    WrongLength { expected: usize, actual: usize },
    /// Ship placement intersects another ship of the same fleet.
    Overlap,
    /// Ship already has its positions.
    AlreadyPlaced,
    /// Roster entry has no cells and can never be placed.
    EmptyShip { ship: &'static str },
    /// Random placement ran out of attempts for the named ship.
    PlacementExhausted { ship: &'static str },
    /// Ship index is not part of the fleet roster.
    InvalidIndex,
    /// Position was already fired upon by this shooter.
    AlreadyGuessed,
    /// A session was started with ships that have no positions.
    FleetNotPlaced,
    /// A shot was attempted after the game reached a terminal state.
    GameOver,
}

impl BoardError {
    /// An exhausted placement budget or a bad roster is unrecoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            BoardError::PlacementExhausted { .. } | BoardError::EmptyShip { .. }
        )
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidInputFormat => {
                write!(f, "Position must be a letter A-H followed by a digit 1-8")
            }
            BoardError::OutOfBounds => write!(f, "Position is outside the playing field"),
            BoardError::NotCollinear => {
                write!(f, "Start and end must share a row or a column")
            }
            BoardError::WrongLength { expected, actual } => write!(
                f,
                "Ship needs {} cells but the endpoints span {}",
                expected, actual
            ),
            BoardError::Overlap => write!(f, "Ship placement overlaps with another ship"),
            BoardError::AlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::EmptyShip { ship } => write!(f, "{} has no cells to place", ship),
            BoardError::PlacementExhausted { ship } => {
                write!(f, "Unable to place {}: board cannot fit the fleet", ship)
            }
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            BoardError::FleetNotPlaced => write!(f, "Every ship must be placed before playing"),
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
