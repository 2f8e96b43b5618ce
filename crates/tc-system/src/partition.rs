//! Addressing of flat per-species arrays by phase.

use std::ops::Range;

use crate::error::{SystemError, SystemResult};

/// Contiguous blocks of species, one block per phase, in phase order.
///
/// Stored as prefix sums: phase `i` owns indices `offsets[i]..offsets[i + 1]`.
/// The last offset is the total number of species.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhasePartition {
    offsets: Vec<usize>,
}

impl Default for PhasePartition {
    fn default() -> Self {
        Self { offsets: vec![0] }
    }
}

impl PhasePartition {
    /// Build from the number of species in each phase.
    pub fn new<I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut offsets = vec![0];
        let mut total = 0;
        for size in sizes {
            total += size;
            offsets.push(total);
        }
        Self { offsets }
    }

    pub fn num_phases(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn num_species(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }

    /// Number of species in phase `i`.
    ///
    /// # Panics
    /// If `i >= num_phases()`.
    pub fn num_species_in_phase(&self, i: usize) -> usize {
        let range = self.phase_range(i);
        range.end - range.start
    }

    /// Index of the first species of phase `i` in the flat arrays.
    ///
    /// # Panics
    /// If `i >= num_phases()`.
    pub fn phase_offset(&self, i: usize) -> usize {
        self.phase_range(i).start
    }

    /// Flat index range of phase `i`.
    ///
    /// # Panics
    /// If `i >= num_phases()`.
    pub fn phase_range(&self, i: usize) -> Range<usize> {
        match self.checked_phase_range(i) {
            Ok(range) => range,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn checked_phase_range(&self, i: usize) -> SystemResult<Range<usize>> {
        if i >= self.num_phases() {
            return Err(SystemError::PhaseIndexOob {
                index: i,
                len: self.num_phases(),
            });
        }
        Ok(self.offsets[i]..self.offsets[i + 1])
    }

    /// Phase owning the flat species index `j`, if any.
    pub fn phase_of_species(&self, j: usize) -> Option<usize> {
        if j >= self.num_species() {
            return None;
        }
        // First offset strictly greater than j closes the owning phase.
        Some(self.offsets.partition_point(|&o| o <= j) - 1)
    }

    /// Iterate over the flat index ranges of all phases.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.offsets.windows(2).map(|w| w[0]..w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_prefix_sums() {
        let p = PhasePartition::new([2, 0, 3]);
        assert_eq!(p.num_phases(), 3);
        assert_eq!(p.num_species(), 5);
        assert_eq!(p.phase_offset(0), 0);
        assert_eq!(p.phase_offset(1), 2);
        assert_eq!(p.phase_offset(2), 2);
        assert_eq!(p.num_species_in_phase(1), 0);
        assert_eq!(p.phase_range(2), 2..5);
        let ranges: Vec<_> = p.ranges().collect();
        assert_eq!(ranges, vec![0..2, 2..2, 2..5]);
    }

    #[test]
    fn phase_of_species_skips_empty_phases() {
        let p = PhasePartition::new([2, 0, 3]);
        assert_eq!(p.phase_of_species(0), Some(0));
        assert_eq!(p.phase_of_species(1), Some(0));
        assert_eq!(p.phase_of_species(2), Some(2));
        assert_eq!(p.phase_of_species(4), Some(2));
        assert_eq!(p.phase_of_species(5), None);
    }

    #[test]
    fn checked_range_reports_out_of_range() {
        let p = PhasePartition::new([1]);
        assert_eq!(
            p.checked_phase_range(1),
            Err(SystemError::PhaseIndexOob { index: 1, len: 1 })
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_phase_panics() {
        PhasePartition::new([1, 2]).num_species_in_phase(2);
    }

    #[test]
    fn default_is_empty() {
        let p = PhasePartition::default();
        assert_eq!(p.num_phases(), 0);
        assert_eq!(p.num_species(), 0);
    }
}
