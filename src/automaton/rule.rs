//! Survival/birth transition rules in `S<digits>B<digits>` notation

use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;

use crate::io::configuration::MAX_NEIGHBORS;
use crate::io::error::SimulationError;

/// Digits a rule string may name: 0 through 9
const RULE_DIGITS: usize = 10;

/// Fixed-size set of neighbor counts
///
/// Holds every decimal digit so that a rule naming 9 can be represented,
/// even though such a count never occurs in a Moore neighborhood.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NeighborSet {
    bits: BitArray<[u16; 1], Lsb0>,
}

impl NeighborSet {
    /// Create a set with no counts present
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a neighbor count
    ///
    /// Counts above 9 cannot be written in a rule string and are ignored.
    pub fn insert(&mut self, count: u8) {
        let index = usize::from(count);
        if index < RULE_DIGITS {
            self.bits.set(index, true);
        }
    }

    /// Test count membership
    pub fn contains(&self, count: u8) -> bool {
        self.bits.get(usize::from(count)).as_deref() == Some(&true)
    }

    /// Test if no counts are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Extract all counts in ascending order
    pub fn to_vec(&self) -> Vec<u8> {
        self.bits.iter_ones().map(|index| index as u8).collect()
    }

    /// Counts that can never match because they exceed the neighborhood size
    pub fn impossible_counts(&self) -> Vec<u8> {
        self.to_vec()
            .into_iter()
            .filter(|&count| count > MAX_NEIGHBORS)
            .collect()
    }
}

impl FromIterator<u8> for NeighborSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for count in iter {
            set.insert(count);
        }
        set
    }
}

impl fmt::Display for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for count in self.to_vec() {
            write!(f, "{count}")?;
        }
        Ok(())
    }
}

/// Outer-totalistic transition rule
///
/// A live cell survives when its live-neighbor count is in `survive`; a dead
/// cell is born when its count is in `birth`. Everything else is dead in the
/// next generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Counts that keep a live cell alive
    pub survive: NeighborSet,
    /// Counts that bring a dead cell to life
    pub birth: NeighborSet,
}

impl Rule {
    /// Build a rule from explicit count lists
    pub fn new(survive: &[u8], birth: &[u8]) -> Self {
        Self {
            survive: survive.iter().copied().collect(),
            birth: birth.iter().copied().collect(),
        }
    }

    /// Conway's Game of Life, `S23B3`
    pub fn conway() -> Self {
        Self::new(&[2, 3], &[3])
    }

    /// Next state of a single cell given its current state and neighbor count
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survive.contains(neighbors)
        } else {
            self.birth.contains(neighbors)
        }
    }

    /// Counts named by the rule that no Moore neighborhood can produce
    pub fn impossible_counts(&self) -> Vec<u8> {
        let mut counts = self.survive.impossible_counts();
        counts.extend(self.birth.impossible_counts());
        counts.sort_unstable();
        counts.dedup();
        counts
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl FromStr for Rule {
    type Err = SimulationError;

    /// Parse the full-match grammar `S\d*B\d*`
    ///
    /// Either digit list may be empty, so `SB` is a valid rule under which
    /// nothing survives and nothing is born.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax_error = || SimulationError::RuleSyntax {
            rule: s.to_string(),
        };

        let body = s.strip_prefix('S').ok_or_else(syntax_error)?;
        let (survive, birth) = body.split_once('B').ok_or_else(syntax_error)?;

        let digits = |part: &str| -> Result<NeighborSet, SimulationError> {
            part.chars()
                .map(|c| c.to_digit(10).map(|d| d as u8).ok_or_else(syntax_error))
                .collect()
        };

        Ok(Self {
            survive: digits(survive)?,
            birth: digits(birth)?,
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}B{}", self.survive, self.birth)
    }
}
