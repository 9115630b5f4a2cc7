//! Harmonic index sets.

/// Largest odd-set count whose highest index `2*count - 1` fits in `u32`.
pub const MAX_ODD_COUNT: u32 = u32::MAX / 2 + 1;

/// The harmonic indices `k` a partial sum runs over.
///
/// Iteration is always in ascending `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarmonicSet {
    /// The first `count` odd harmonics: `1, 3, 5, ..., 2*count - 1`.
    /// Counts above [`MAX_ODD_COUNT`] stop at index `u32::MAX`.
    Odd {
        /// Number of terms.
        count: u32,
    },
    /// The first `count` harmonics: `1, 2, ..., count`.
    All {
        /// Number of terms.
        count: u32,
    },
    /// An explicit list of harmonic indices (sorted, deduplicated, no zero).
    Explicit(Vec<u32>),
}

impl HarmonicSet {
    /// Odd harmonics `1, 3, ..., 2*count - 1`.
    pub fn odd(count: u32) -> Self {
        Self::Odd { count }
    }

    /// All harmonics `1..=count`.
    pub fn all(count: u32) -> Self {
        Self::All { count }
    }

    /// Builds an explicit set. Index 0 (the DC term) is dropped.
    pub fn explicit(indices: impl IntoIterator<Item = u32>) -> Self {
        let mut indices: Vec<u32> = indices.into_iter().filter(|&k| k > 0).collect();
        indices.sort_unstable();
        indices.dedup();
        Self::Explicit(indices)
    }

    /// Clamps a signed harmonic count to a term count; negatives give zero terms.
    pub fn count_from_signed(count: i64) -> u32 {
        count.clamp(0, u32::MAX as i64) as u32
    }

    /// Number of terms in the sum.
    pub fn len(&self) -> usize {
        match self {
            HarmonicSet::Odd { count } => (*count).min(MAX_ODD_COUNT) as usize,
            HarmonicSet::All { count } => *count as usize,
            HarmonicSet::Explicit(indices) => indices.len(),
        }
    }

    /// Returns true when the sum has no terms.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest harmonic index in the set.
    pub fn highest(&self) -> Option<u32> {
        match self {
            HarmonicSet::Odd { count: 0 } | HarmonicSet::All { count: 0 } => None,
            HarmonicSet::Odd { count } => {
                u32::try_from(2 * (*count).min(MAX_ODD_COUNT) as u64 - 1).ok()
            }
            HarmonicSet::All { count } => Some(*count),
            HarmonicSet::Explicit(indices) => indices.last().copied(),
        }
    }

    /// Iterates over the harmonic indices in ascending order.
    pub fn indices(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            HarmonicSet::Odd { count } => {
                Box::new((0..(*count).min(MAX_ODD_COUNT)).map(|j| 2 * j + 1))
            }
            HarmonicSet::All { count } => Box::new(1..=*count),
            HarmonicSet::Explicit(indices) => Box::new(indices.iter().copied()),
        }
    }
}
