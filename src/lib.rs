//! # Sidepot
//!
//! Layered pot and side pot accounting for poker games.
//!
//! This library tracks how chips committed by multiple players accumulate
//! into a shared pot during a betting round, and splits those commitments
//! into side pots whenever a player cannot match the current bet level
//! (the classic all-in). A pot is a stack of layers: finalized side pots
//! plus one open layer still collecting contributions. Chips are never
//! created or destroyed by splitting, so the layers always sum to the
//! total wagered and each player's recorded contribution matches what
//! they actually put in.
//!
//! The surrounding game engine owns turn order, bet legality, hand
//! evaluation, and payouts. It reports each player's total commitment to
//! the current layer via [`Pot::add_chips`], and later reads the settled
//! layers to decide who is eligible to win each side pot.
//!
//! ## Core Modules
//!
//! - [`pot`]: The layered pot ledger, its models, and its errors
//!
//! ## Example
//!
//! ```
//! use sidepot::{Pot, SeatIndex};
//!
//! let mut pot: Pot<SeatIndex> = Pot::default();
//! pot.add_chips(0, 100).unwrap();
//! pot.add_chips(1, 100).unwrap();
//! // Seat 2 is all-in for less: a 150 chip side pot settles at 50 per
//! // player and seats 0 and 1 keep 50 each in the open layer.
//! pot.add_chips(2, 50).unwrap();
//!
//! assert_eq!(pot.get_total(), 250);
//! assert_eq!(pot.get_num_side_pots(), 1);
//! assert_eq!(pot.get_contribution(&0), 100);
//! assert_eq!(pot.get_contribution(&2), 50);
//! ```

/// Capacity constants.
pub mod constants;

/// The layered pot ledger, its models, and its errors.
pub mod pot;
pub use pot::{Chips, Layer, Pot, PotError, PotId, PotResult, PotView, SeatIndex};
