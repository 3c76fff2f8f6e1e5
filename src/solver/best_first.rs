use std::collections::{BinaryHeap, HashSet};

use im::HashMap;
use tracing::trace;

use crate::{
    error::Result,
    puzzle::{Puzzle, VariableId, Word},
    solver::{
        assignment::Assignment,
        consistency::pruned_domains,
        domains::DomainStore,
        letter_at,
        stats::{SearchStats, UnsatReason},
        strategy::SearchStrategy,
    },
};

/// A total mapping from every variable to a word or "unassigned".
///
/// Unlike [`Assignment`], a state always carries an entry per variable; two
/// states are equal iff the mappings agree pointwise, which is what the
/// explored-set and frontier-membership checks rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchState(HashMap<VariableId, Option<Word>>);

impl SearchState {
    /// The fully-unassigned state for a puzzle.
    pub fn initial(puzzle: &Puzzle) -> Self {
        Self(puzzle.variable_ids().map(|id| (id, None)).collect())
    }

    /// The word assigned to `id`, if any.
    pub fn word(&self, id: VariableId) -> Option<&Word> {
        self.0.get(&id).and_then(|slot| slot.as_ref())
    }

    /// A copy of this state with `id` assigned to `word`.
    pub fn assign(&self, id: VariableId, word: Word) -> Self {
        Self(self.0.update(id, Some(word)))
    }

    /// True iff every variable is assigned.
    pub fn is_goal(&self) -> bool {
        self.0.values().all(|slot| slot.is_some())
    }

    fn uses_word(&self, word: &Word) -> bool {
        self.0.values().any(|slot| slot.as_ref() == Some(word))
    }

    /// Drops the unassigned entries, yielding a plain assignment.
    pub fn to_assignment(&self) -> Assignment {
        let mut assignment = Assignment::new();
        for (&id, slot) in self.0.iter() {
            if let Some(word) = slot {
                assignment = assignment.assign(id, word.clone());
            }
        }
        assignment
    }
}

/// Every legal `(variable, word)` extension of `state`.
///
/// A word is legal for an unassigned variable when it sits in the variable's
/// pruned domain, is not already used elsewhere in the state, and agrees
/// with every assigned neighbor at the recorded overlap positions.
///
/// An empty result on a non-goal state is a contradiction: either two
/// assigned neighbors demand different letters for the same cell of some
/// unassigned variable, or no domain word meets the joint requirement. The
/// state then has no successors and the branch dies quietly.
pub fn available_actions(
    puzzle: &Puzzle,
    domains: &DomainStore,
    state: &SearchState,
) -> Vec<(VariableId, Word)> {
    let mut actions = Vec::new();

    for id in puzzle.variable_ids() {
        if state.word(id).is_some() {
            continue;
        }

        // Letters forced onto this slot's cells by assigned neighbors.
        let mut required: Vec<Option<char>> = vec![None; puzzle.variable(id).length];
        for &neighbor in puzzle.neighbors(id) {
            let Some(word) = state.word(neighbor) else {
                continue;
            };
            let (i, j) = puzzle.overlap(id, neighbor).unwrap();
            let Some(letter) = letter_at(word, j) else {
                return Vec::new();
            };
            match required[i] {
                None => required[i] = Some(letter),
                Some(existing) if existing == letter => {}
                Some(_) => return Vec::new(),
            }
        }

        let mut candidates = Vec::new();
        for word in domains.get(id) {
            if state.uses_word(word) {
                continue;
            }
            let fits = required.iter().enumerate().all(|(i, req)| match req {
                None => true,
                Some(letter) => letter_at(word, i) == Some(*letter),
            });
            if fits {
                candidates.push((id, word.clone()));
            }
        }

        if candidates.is_empty() {
            return Vec::new();
        }
        actions.extend(candidates);
    }

    actions
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierNode {
    priority: i64,
    seq: u64,
    cost: u64,
    state: SearchState,
}

// BinaryHeap is a max-heap; reverse the comparison to pop the lowest
// priority first, with insertion order as the tie-break.
impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search over total states, the alternative strategy to
/// [`BacktrackingSearch`](crate::solver::backtracking::BacktrackingSearch).
///
/// States are ordered by `heuristic + path_cost`, where the heuristic is the
/// number of actions the pruned initial state offered minus the number the
/// candidate state still offers (a proxy for how many options the partial
/// fill has foreclosed), and path cost counts assignments made. The
/// heuristic is not guaranteed admissible, so the first goal popped is a
/// good solution, not a certified-optimal one; for this problem any complete
/// consistent fill is equally acceptable.
pub struct BestFirstSearch;

impl BestFirstSearch {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BestFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for BestFirstSearch {
    fn solve(&self, puzzle: &Puzzle) -> Result<(Option<Assignment>, SearchStats)> {
        let mut stats = SearchStats::default();
        let Some(domains) = pruned_domains(puzzle, &mut stats) else {
            return Ok((None, stats));
        };

        let initial = SearchState::initial(puzzle);
        if initial.is_goal() {
            // Zero-variable puzzle; the empty assignment is complete.
            return Ok((Some(initial.to_assignment()), stats));
        }

        // The heuristic baseline, computed once per solve from the pruned
        // fully-unassigned state.
        let baseline = available_actions(puzzle, &domains, &initial).len() as i64;

        let mut frontier = BinaryHeap::new();
        let mut in_frontier: HashSet<SearchState> = HashSet::new();
        let mut explored: HashSet<SearchState> = HashSet::new();
        let mut seq: u64 = 0;

        in_frontier.insert(initial.clone());
        frontier.push(FrontierNode {
            priority: 0,
            seq,
            cost: 0,
            state: initial,
        });

        while let Some(node) = frontier.pop() {
            in_frontier.remove(&node.state);

            if node.state.is_goal() {
                return Ok((Some(node.state.to_assignment()), stats));
            }

            stats.states_expanded += 1;
            explored.insert(node.state.clone());

            for (var, word) in available_actions(puzzle, &domains, &node.state) {
                trace!(var, %word, "expanding action");
                let successor = node.state.assign(var, word);
                if explored.contains(&successor) || in_frontier.contains(&successor) {
                    continue;
                }

                let heuristic =
                    baseline - available_actions(puzzle, &domains, &successor).len() as i64;
                let cost = node.cost + 1;
                seq += 1;
                in_frontier.insert(successor.clone());
                frontier.push(FrontierNode {
                    priority: heuristic + cost as i64,
                    seq,
                    cost,
                    state: successor,
                });
            }
        }

        stats.unsat_reason = Some(UnsatReason::SearchExhausted);
        Ok((None, stats))
    }
}
