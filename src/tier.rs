//! Scan tiers: vertical image bands searched at one nominal window scale.

use crate::util::{HeatscanError, HeatscanResult};

/// One scan tier covering a vertical band of the image.
///
/// `min_y`/`max_y` are immutable configuration; `size` and `overlap` are the
/// tier's persisted window settings, updated only by the tier-switch
/// transition in [`crate::params::ParameterStore`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tier {
    /// Top of the band, inclusive.
    pub min_y: usize,
    /// Bottom of the band, exclusive.
    pub max_y: usize,
    /// Persisted square window size for this tier.
    pub size: usize,
    /// Persisted window overlap for this tier.
    pub overlap: f32,
}

impl Tier {
    /// Creates a tier definition.
    pub fn new(min_y: usize, max_y: usize, size: usize, overlap: f32) -> Self {
        Self {
            min_y,
            max_y,
            size,
            overlap,
        }
    }
}

/// Ordered arena of tier records, supplied at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct TierRegistry {
    tiers: Vec<Tier>,
}

impl TierRegistry {
    /// Creates a registry from an ordered tier list.
    pub fn new(tiers: Vec<Tier>) -> Self {
        Self { tiers }
    }

    /// Returns the number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Returns true when the registry holds no tiers.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Returns the tier at `index`.
    pub fn get(&self, index: usize) -> HeatscanResult<&Tier> {
        self.tiers.get(index).ok_or(HeatscanError::TierOutOfRange {
            index,
            len: self.tiers.len(),
        })
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> HeatscanResult<&mut Tier> {
        let len = self.tiers.len();
        self.tiers
            .get_mut(index)
            .ok_or(HeatscanError::TierOutOfRange { index, len })
    }

    /// Iterates tiers in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Tier> {
        self.tiers.iter()
    }
}

impl Default for TierRegistry {
    /// Two tiers covering the lower portion of the image at two scales.
    fn default() -> Self {
        Self::new(vec![Tier::new(350, 550, 130, 0.82), Tier::new(350, 720, 170, 0.75)])
    }
}
