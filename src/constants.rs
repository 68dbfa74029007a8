//! Table sizing constants.

/// Most tables seat at most this many players. Pots pre-size their open
/// layer to this by default.
pub const MAX_PLAYERS: usize = 9;
