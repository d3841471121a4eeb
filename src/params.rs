//! Tunable parameters and the tier-switch state machine.
//!
//! The store holds the live tunables an interactive tuner edits
//! (`window_dim`, `window_overlap`), the active-tier state, and the owned
//! tier registry. Switching away from a concrete tier flushes the live
//! tunables into that tier's record; switching onto one restores its
//! last-saved values. Values are trusted from setters; the [`ParamDef`]
//! ranges exist for external tuning surfaces, not for enforcement here.

use crate::tier::TierRegistry;
use crate::util::{HeatscanError, HeatscanResult};

/// Default live window size.
pub const DEFAULT_WINDOW_DIM: usize = 150;
/// Default live window overlap.
pub const DEFAULT_WINDOW_OVERLAP: f32 = 0.75;

/// Closed set of tunable parameter keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKey {
    /// Live square window size, pixels.
    WindowDim,
    /// Live window overlap fraction.
    WindowOverlap,
    /// Active tier selector (concrete index or all-tiers).
    ActiveTier,
}

/// Validation metadata for one tunable, surfaced to an external tuner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamDef {
    /// Smallest allowed value.
    pub min: f32,
    /// Largest allowed value.
    pub max: f32,
    /// Tuner increment.
    pub step: f32,
    /// Human-readable label.
    pub description: &'static str,
}

/// Active-tier state: a concrete tier or the all-tiers scan mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveTier {
    /// Scan one tier, driven by the live tunables.
    Specific(usize),
    /// Scan every tier with its own persisted settings.
    All,
}

impl ActiveTier {
    /// Maps a raw tuner index to a state; `index == tier_count` means all.
    pub fn from_index(index: usize, tier_count: usize) -> HeatscanResult<Self> {
        if index < tier_count {
            Ok(Self::Specific(index))
        } else if index == tier_count {
            Ok(Self::All)
        } else {
            Err(HeatscanError::TierOutOfRange {
                index,
                len: tier_count,
            })
        }
    }

    /// Maps the state back to the raw tuner index.
    pub fn to_index(self, tier_count: usize) -> usize {
        match self {
            Self::Specific(index) => index,
            Self::All => tier_count,
        }
    }
}

/// Typed store for the live tunables, active-tier state, and tier registry.
#[derive(Clone, Debug)]
pub struct ParameterStore {
    window_dim: usize,
    window_overlap: f32,
    active_tier: ActiveTier,
    tiers: TierRegistry,
}

impl ParameterStore {
    /// Creates a store with default tunables and all-tiers scanning.
    pub fn new(tiers: TierRegistry) -> Self {
        Self {
            window_dim: DEFAULT_WINDOW_DIM,
            window_overlap: DEFAULT_WINDOW_OVERLAP,
            active_tier: ActiveTier::All,
            tiers,
        }
    }

    /// Returns the live window size.
    pub fn window_dim(&self) -> usize {
        self.window_dim
    }

    /// Sets the live window size.
    pub fn set_window_dim(&mut self, dim: usize) {
        self.window_dim = dim;
    }

    /// Returns the live window overlap.
    pub fn window_overlap(&self) -> f32 {
        self.window_overlap
    }

    /// Sets the live window overlap.
    pub fn set_window_overlap(&mut self, overlap: f32) {
        self.window_overlap = overlap;
    }

    /// Returns the active-tier state.
    pub fn active_tier(&self) -> ActiveTier {
        self.active_tier
    }

    /// Returns the tier registry.
    pub fn tiers(&self) -> &TierRegistry {
        &self.tiers
    }

    /// Returns the tuner metadata for `key`.
    ///
    /// The active-tier range depends on the registry length, so the def is
    /// computed rather than stored.
    pub fn param_def(&self, key: ParamKey) -> ParamDef {
        match key {
            ParamKey::WindowDim => ParamDef {
                min: 50.0,
                max: 200.0,
                step: 5.0,
                description: "window size",
            },
            ParamKey::WindowOverlap => ParamDef {
                min: 0.0,
                max: 1.0,
                step: 0.01,
                description: "window overlap",
            },
            ParamKey::ActiveTier => ParamDef {
                min: 0.0,
                max: self.tiers.len() as f32,
                step: 1.0,
                description: "current tier",
            },
        }
    }

    /// Switches the active tier, persisting and restoring tunables.
    ///
    /// Leaving a concrete tier flushes the live tunables into its record;
    /// entering one loads its stored values. Switching to [`ActiveTier::All`]
    /// neither saves into nor loads from any record beyond that flush.
    /// Re-selecting the current state is a no-op.
    pub fn set_active_tier(&mut self, new: ActiveTier) -> HeatscanResult<()> {
        if let ActiveTier::Specific(index) = new {
            if index >= self.tiers.len() {
                return Err(HeatscanError::TierOutOfRange {
                    index,
                    len: self.tiers.len(),
                });
            }
        }
        if new == self.active_tier {
            return Ok(());
        }

        if let ActiveTier::Specific(prev) = self.active_tier {
            let tier = self.tiers.get_mut(prev)?;
            tier.size = self.window_dim;
            tier.overlap = self.window_overlap;
        }
        if let ActiveTier::Specific(next) = new {
            let tier = self.tiers.get(next)?;
            self.window_dim = tier.size;
            self.window_overlap = tier.overlap;
        }
        self.active_tier = new;
        Ok(())
    }

    /// Raw-index variant of [`set_active_tier`](Self::set_active_tier) for
    /// tuner surfaces; `index == tier_count` selects all-tiers scanning.
    pub fn set_active_tier_index(&mut self, index: usize) -> HeatscanResult<()> {
        let state = ActiveTier::from_index(index, self.tiers.len())?;
        self.set_active_tier(state)
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(TierRegistry::default())
    }
}
