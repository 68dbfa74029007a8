//! Layered pot ledger with side pot splitting.

use std::collections::HashMap;
use std::hash::Hash;
use std::{iter, mem};

use crate::constants;

use super::errors::{PotError, PotResult};
use super::models::{Chips, Layer, PotId, PotView};

/// Chip commitments for one betting pot, split into side pots whenever
/// players' commitments at a level diverge.
///
/// The pot is a stack of layers: zero or more settled side pots plus one
/// open layer still collecting contributions. Keyed by an opaque player
/// identity `P`; the pot only ever compares and hashes keys. Amounts
/// passed to [`Pot::add_chips`] are each player's TOTAL commitment to the
/// current layer, not deltas, so the caller must track the betting round.
///
/// Does no validation beyond rejecting negative amounts. The parent must
/// check the player has enough chips and that the bet is legal.
#[derive(Clone, Debug)]
pub struct Pot<P> {
    id: PotId,
    // The layer still collecting contributions. Uniform at rest: every
    // member holds the same amount once the round settles around a level.
    open: Layer<P>,
    // Finalized side pots in creation order. Never touched once pushed.
    settled: Vec<Layer<P>>,
}

impl<P> Pot<P>
where
    P: Clone + Eq + Hash,
{
    #[must_use]
    pub fn new(max_players: usize) -> Self {
        Self {
            id: PotId::new(),
            open: HashMap::with_capacity(max_players),
            settled: Vec::new(),
        }
    }

    /// Record `player`'s total commitment to the current layer.
    ///
    /// Exactly one of three things happens:
    /// - the player already sits in the open layer: the layer is archived
    ///   as a side pot as-is and a fresh one starts with this player's
    ///   new amount;
    /// - the amount matches the layer's uniform level (or the layer is
    ///   empty): the player joins at that level;
    /// - the amount differs: a side pot settles at the lower of the two
    ///   levels for everyone involved, and whichever side still has chips
    ///   above it carries the excess into a fresh open layer.
    pub fn add_chips(&mut self, player: P, n_chips: Chips) -> PotResult<()> {
        if n_chips < 0 {
            return Err(PotError::InvalidAmount(n_chips));
        }
        if self.open.contains_key(&player) {
            // A repeat contribution means the betting level has moved on.
            // The open layer settles as-is, even for members that never
            // matched the final bet; the parent is expected to only
            // revisit a player once the round has gone around the table.
            let archived = mem::take(&mut self.open);
            log::debug!(
                "Pot {}: archiving {} chip layer from {} players",
                self.id,
                archived.values().sum::<Chips>(),
                archived.len(),
            );
            self.settled.push(archived);
            self.open.insert(player, n_chips);
        } else if self.open.values().all(|&chips| chips == n_chips) {
            // Empty layer, or the player matches the uniform level.
            self.open.insert(player, n_chips);
        } else {
            self.split(player, n_chips);
        }
        Ok(())
    }

    // `n_chips` diverges from the open layer's level: settle a side pot at
    // the lower of the two amounts and keep only the excess live.
    fn split(&mut self, player: P, n_chips: Chips) {
        let existing = self.open.values().next().copied().unwrap_or(n_chips);
        let floor = existing.min(n_chips);
        let mut side_pot: Layer<P> = self
            .open
            .keys()
            .cloned()
            .map(|member| (member, floor))
            .collect();
        side_pot.insert(player.clone(), floor);

        // The short side is done at `floor`; the deep side carries the
        // difference forward.
        let leftover = (existing - n_chips).abs();
        let carriers: Vec<P> = if existing > n_chips {
            self.open.keys().cloned().collect()
        } else {
            vec![player]
        };
        log::debug!(
            "Pot {}: settled {} chip side pot across {} players, {} chips live",
            self.id,
            floor * side_pot.len() as Chips,
            side_pot.len(),
            leftover * carriers.len() as Chips,
        );
        self.settled.push(side_pot);
        self.open = carriers
            .into_iter()
            .map(|member| (member, leftover))
            .collect();
    }

    /// Return the player's cumulative contribution across every layer.
    #[must_use]
    pub fn get_contribution(&self, player: &P) -> Chips {
        self.settled
            .iter()
            .chain(iter::once(&self.open))
            .map(|layer| *layer.get(player).unwrap_or(&0))
            .sum()
    }

    /// Return the total chips wagered into the pot, across every layer.
    #[must_use]
    pub fn get_total(&self) -> Chips {
        self.settled
            .iter()
            .chain(iter::once(&self.open))
            .flat_map(HashMap::values)
            .sum()
    }

    /// Finalized side pots in creation order.
    #[must_use]
    pub fn side_pots(&self) -> &[Layer<P>] {
        &self.settled
    }

    /// The layer still collecting contributions.
    #[must_use]
    pub fn open_layer(&self) -> &Layer<P> {
        &self.open
    }

    #[must_use]
    pub fn get_num_side_pots(&self) -> usize {
        self.settled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.get_total() == 0
    }

    #[must_use]
    pub fn id(&self) -> PotId {
        self.id
    }

    #[must_use]
    pub fn view(&self) -> PotView {
        PotView {
            id: self.id,
            size: self.get_total(),
        }
    }

    /// Clear all layers for a fresh betting context. The pot keeps its id.
    pub fn reset(&mut self) {
        self.open.clear();
        self.settled.clear();
    }
}

impl<P> Default for Pot<P>
where
    P: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new(constants::MAX_PLAYERS)
    }
}
