use im::{HashMap, HashSet};

use crate::puzzle::{Puzzle, VariableId, Word};

/// The per-solve candidate sets: one word set per variable, shrinking
/// monotonically as consistency is enforced.
///
/// Mutation is always "build a filtered replacement, then [`install`] it";
/// nothing ever removes from a set while iterating it. The persistent `im`
/// collections make cloning a store (or a single set) cheap, so search code
/// can snapshot freely.
///
/// [`install`]: DomainStore::install
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: HashMap<VariableId, HashSet<Word>>,
}

impl DomainStore {
    /// A fresh store giving every variable the entire vocabulary.
    pub fn full(puzzle: &Puzzle) -> Self {
        let domains = puzzle
            .variable_ids()
            .map(|id| (id, puzzle.words().clone()))
            .collect();
        Self { domains }
    }

    /// The current candidate set for `id`.
    pub fn get(&self, id: VariableId) -> &HashSet<Word> {
        self.domains.get(&id).unwrap()
    }

    pub fn len(&self, id: VariableId) -> usize {
        self.get(id).len()
    }

    pub fn is_empty(&self, id: VariableId) -> bool {
        self.get(id).is_empty()
    }

    /// Atomically replaces the candidate set for `id`.
    pub fn install(&mut self, id: VariableId, candidates: HashSet<Word>) {
        self.domains.insert(id, candidates);
    }

    /// Total candidate count across all variables; useful for monotonicity
    /// checks in tests.
    pub fn total_size(&self) -> usize {
        self.domains.values().map(|d| d.len()).sum()
    }
}
