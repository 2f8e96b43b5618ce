use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for database entries.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        Self(
            NonZeroU32::MIN
                .checked_add(index)
                .expect("id index must be below u32::MAX"),
        )
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a `usize`, for addressing flat arrays.
    pub fn idx(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Position of a species in a species database.
pub type SpeciesId = Id;
