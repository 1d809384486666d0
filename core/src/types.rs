use core::time::Duration;

/// Index of a card on the board.
pub type Position = u8;

/// Count type used for pairs on a board and matches found.
pub type PairCount = u8;

/// Count type used for completed two-card comparisons.
pub type AttemptCount = u32;

/// Largest board a [`Position`] can address.
pub const MAX_CARDS: usize = Position::MAX as usize + 1;

/// How long a mismatched pair stays face-up before flipping back.
pub const REVERT_DELAY: Duration = Duration::from_millis(1000);

pub(crate) fn to_position(index: usize) -> Position {
    debug_assert!(index < MAX_CARDS, "board index out of range");
    index as Position
}
