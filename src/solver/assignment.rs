use std::collections::HashSet;

use im::HashMap;

use crate::{
    puzzle::{Puzzle, VariableId, Word},
    solver::letter_at,
};

/// A partial or total variable-to-word mapping.
///
/// Backed by a persistent map, so [`assign`] produces an extended copy in
/// O(log n) without touching the original; the caller keeps its version and
/// simply drops the extension on backtrack.
///
/// [`assign`]: Assignment::assign
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment(HashMap<VariableId, Word>);

impl Assignment {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: VariableId) -> Option<&Word> {
        self.0.get(&id)
    }

    pub fn contains(&self, id: VariableId) -> bool {
        self.0.contains_key(&id)
    }

    /// A copy of this assignment extended with `id → word`.
    pub fn assign(&self, id: VariableId, word: Word) -> Self {
        Self(self.0.update(id, word))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VariableId, &Word)> {
        self.0.iter()
    }

    /// True iff every variable of the puzzle has a non-empty word.
    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        puzzle
            .variable_ids()
            .all(|id| self.0.get(&id).is_some_and(|word| !word.is_empty()))
    }

    /// True iff the three assignment invariants hold over the assigned
    /// variables: length match, pairwise-distinct words, and overlap
    /// agreement between assigned neighbors. Unassigned neighbors impose no
    /// constraint.
    pub fn is_consistent(&self, puzzle: &Puzzle) -> bool {
        for (&id, word) in self.0.iter() {
            if word.chars().count() != puzzle.variable(id).length {
                return false;
            }
        }

        let distinct: HashSet<&Word> = self.0.values().collect();
        if distinct.len() != self.0.len() {
            return false;
        }

        for (&id, word) in self.0.iter() {
            for &neighbor in puzzle.neighbors(id) {
                let Some(other) = self.0.get(&neighbor) else {
                    continue;
                };
                let (i, j) = puzzle.overlap(id, neighbor).unwrap();
                if letter_at(word, i) != letter_at(other, j) {
                    return false;
                }
            }
        }

        true
    }
}
