//! Pot data models.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};
use uuid::Uuid;

/// Chip amount type
pub type Chips = i64;

/// Seat position type, the usual player key at a table
pub type SeatIndex = usize;

/// A single pot layer, mapping each member to their chips at this level.
pub type Layer<P> = HashMap<P, Chips>;

/// Opaque unique pot identifier.
///
/// Generated once at construction and stable for the pot's lifetime,
/// including across resets. Pot logic never consults it; it exists so the
/// host engine can tell pot instances apart in logs and bookkeeping.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PotId(Uuid);

impl PotId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PotId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Client-facing pot summary.
#[derive(Debug, Deserialize, Serialize)]
pub struct PotView {
    pub id: PotId,
    pub size: Chips,
}

impl fmt::Display for PotView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.size)
    }
}
