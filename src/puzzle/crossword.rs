use std::collections::HashMap;

use im::HashSet;

use crate::{
    error::{PuzzleError, Result},
    puzzle::{Overlap, Variable, VariableId, Word},
    solver::assignment::Assignment,
};

/// The immutable facts of one crossword filling problem: the slots, the
/// vocabulary, and where slots cross.
///
/// A `Puzzle` is built once per solve request and never mutated by the
/// solving core. Both ordered entries of every crossing are stored, with
/// index roles swapped, so `overlap(a, b)` and `overlap(b, a)` are both
/// answerable in O(1).
#[derive(Debug, Clone)]
pub struct Puzzle {
    rows: usize,
    cols: usize,
    variables: Vec<Variable>,
    words: HashSet<Word>,
    overlaps: HashMap<(VariableId, VariableId), Overlap>,
    neighbors: Vec<HashSet<VariableId>>,
}

impl Puzzle {
    /// Builds a puzzle from its slots, vocabulary, and crossing list.
    ///
    /// `crossings` lists each crossing once as `((a, b), (i, j))`, meaning
    /// character `i` of `a` shares a cell with character `j` of `b`; the
    /// mirrored entry `((b, a), (j, i))` is installed automatically. The
    /// neighbor relation is derived from the crossings.
    pub fn new(
        rows: usize,
        cols: usize,
        variables: Vec<Variable>,
        words: impl IntoIterator<Item = String>,
        crossings: &[((VariableId, VariableId), Overlap)],
    ) -> Result<Self> {
        for (id, var) in variables.iter().enumerate() {
            if var.length == 0 {
                return Err(PuzzleError::ZeroLengthVariable(id as VariableId).into());
            }
        }

        let mut overlaps = HashMap::new();
        let mut neighbors = vec![HashSet::new(); variables.len()];
        for &((a, b), (i, j)) in crossings {
            if a == b {
                return Err(PuzzleError::SelfCrossing(a).into());
            }
            for id in [a, b] {
                if id as usize >= variables.len() {
                    return Err(PuzzleError::UnknownVariable(id).into());
                }
            }
            for (var, index) in [(a, i), (b, j)] {
                let length = variables[var as usize].length;
                if index >= length {
                    return Err(PuzzleError::OverlapOutOfRange {
                        a,
                        b,
                        var,
                        index,
                        length,
                    }
                    .into());
                }
            }
            overlaps.insert((a, b), (i, j));
            overlaps.insert((b, a), (j, i));
            neighbors[a as usize].insert(b);
            neighbors[b as usize].insert(a);
        }

        Ok(Self {
            rows,
            cols,
            variables,
            words: words.into_iter().map(Word::from).collect(),
            overlaps,
            neighbors,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id as usize]
    }

    /// Iterates over all variable ids, in id order.
    pub fn variable_ids(&self) -> impl Iterator<Item = VariableId> {
        0..self.variables.len() as VariableId
    }

    pub fn words(&self) -> &HashSet<Word> {
        &self.words
    }

    /// The agreement indices for the ordered pair `(a, b)`, or `None` if the
    /// two slots do not cross.
    pub fn overlap(&self, a: VariableId, b: VariableId) -> Option<Overlap> {
        self.overlaps.get(&(a, b)).copied()
    }

    /// The set of variables crossing `id`. Static for the puzzle's lifetime.
    pub fn neighbors(&self, id: VariableId) -> &HashSet<VariableId> {
        &self.neighbors[id as usize]
    }

    /// Every ordered pair of distinct crossing variables, the initial AC-3
    /// work set.
    pub fn all_arcs(&self) -> Vec<(VariableId, VariableId)> {
        let mut arcs: Vec<_> = self.overlaps.keys().copied().collect();
        arcs.sort_unstable();
        arcs
    }

    /// Places each assigned word's characters into a `rows x cols` grid of
    /// cells; unassigned or uncovered cells stay `None`.
    ///
    /// This is the hand-off point to the renderer; the solving core does not
    /// otherwise touch the grid.
    pub fn letter_grid(&self, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        let mut grid = vec![vec![None; self.cols]; self.rows];
        for (&id, word) in assignment.iter() {
            let var = self.variable(id);
            for (i, ch) in word.chars().take(var.length).enumerate() {
                let (row, col) = var.cell(i);
                if row < self.rows && col < self.cols {
                    grid[row][col] = Some(ch);
                }
            }
        }
        grid
    }
}
