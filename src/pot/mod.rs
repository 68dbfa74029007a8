//! Pot module providing layered chip accounting with side pot splitting.
//!
//! This module implements:
//! - A single open layer collecting uniform contributions
//! - Append-only settled side pots, created whenever commitments diverge
//! - Per-player contribution lookups across all layers
//! - Opaque pot identifiers for cross-referencing by the host engine
//!
//! ## Example
//!
//! ```
//! use sidepot::pot::{Pot, SeatIndex};
//!
//! let mut pot: Pot<SeatIndex> = Pot::default();
//! pot.add_chips(0, 200).unwrap();
//! pot.add_chips(1, 200).unwrap();
//! assert_eq!(pot.get_total(), 400);
//!
//! // New hand, same pot object.
//! pot.reset();
//! assert!(pot.is_empty());
//! ```

pub mod errors;
pub mod ledger;
pub mod models;

pub use errors::{PotError, PotResult};
pub use ledger::Pot;
pub use models::{Chips, Layer, PotId, PotView, SeatIndex};
