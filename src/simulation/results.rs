// src/simulation/results.rs
use std::collections::BTreeMap;
use std::fmt;

/// Observed basis index -> number of shots that produced it.
///
/// Backed by a `BTreeMap` so iteration runs in ascending index order and ties
/// can be broken deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeTable {
    counts: BTreeMap<usize, u64>,
    /// Register width, used only to label outcomes in `Display`.
    num_qubits: usize,
}

impl OutcomeTable {
    /// Creates an empty table for a register of `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            counts: BTreeMap::new(),
            num_qubits,
        }
    }

    /// Records one observation of `index`.
    pub(crate) fn record(&mut self, index: usize) {
        *self.counts.entry(index).or_insert(0) += 1;
    }

    /// Occurrences of `index`; 0 if never observed.
    pub fn count(&self, index: usize) -> u64 {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Sum of all counts, i.e. the number of shots taken.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(index, count)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }

    /// Index with the highest count, smallest index on a tie.
    pub fn most_frequent(&self) -> Option<(usize, u64)> {
        most_frequent(self.iter())
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }
}

/// Picks the entry with the highest count; on equal counts the smallest index wins.
pub(crate) fn most_frequent<I>(entries: I) -> Option<(usize, u64)>
where
    I: IntoIterator<Item = (usize, u64)>,
{
    entries
        .into_iter()
        .fold(None, |best, (index, count)| match best {
            Some((best_index, best_count))
                if best_count > count || (best_count == count && best_index < index) =>
            {
                best
            }
            _ => Some((index, count)),
        })
}

impl FromIterator<(usize, u64)> for OutcomeTable {
    /// Builds a table from explicit counts. Zero counts are dropped; repeated
    /// indices accumulate. The register width is the smallest that holds the
    /// largest index.
    fn from_iter<T: IntoIterator<Item = (usize, u64)>>(iter: T) -> Self {
        let mut counts = BTreeMap::new();
        for (index, count) in iter {
            if count > 0 {
                *counts.entry(index).or_insert(0) += count;
            }
        }
        let max_index = counts.keys().next_back().copied().unwrap_or(0);
        let num_qubits = (usize::BITS - max_index.leading_zeros()).max(1) as usize;
        Self { counts, num_qubits }
    }
}

impl fmt::Display for OutcomeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Outcomes ({} shots):", self.total())?;
        if self.counts.is_empty() {
            writeln!(f, "  none")?;
        }
        for (index, count) in self.iter() {
            writeln!(
                f,
                "  |{:0width$b}> ({:>2}): {}",
                index,
                index,
                count,
                width = self.num_qubits
            )?;
        }
        Ok(())
    }
}
