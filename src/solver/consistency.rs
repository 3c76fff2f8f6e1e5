use std::collections::HashMap;

use im::HashSet;
use tracing::{debug, trace};

use crate::{
    puzzle::{Puzzle, VariableId, Word},
    solver::{
        domains::DomainStore,
        letter_at,
        stats::{SearchStats, UnsatReason},
        work_list::{Arc, WorkList},
    },
};

/// Counting pre-check: for each word length, the variables demanding that
/// length must not outnumber the vocabulary words of that length.
///
/// Necessary but not sufficient; a `false` here proves unsatisfiability
/// without running any propagation or search.
pub fn check_length_feasibility(puzzle: &Puzzle) -> bool {
    let mut available: HashMap<usize, usize> = HashMap::new();
    for word in puzzle.words() {
        *available.entry(word.chars().count()).or_default() += 1;
    }

    let mut required: HashMap<usize, usize> = HashMap::new();
    for var in puzzle.variables() {
        *required.entry(var.length).or_default() += 1;
    }

    required
        .iter()
        .all(|(length, need)| available.get(length).copied().unwrap_or(0) >= *need)
}

/// Node consistency: restrict every domain to length-matching candidates.
/// Runs once, before arc consistency.
pub fn enforce_node_consistency(puzzle: &Puzzle, domains: &mut DomainStore) {
    for id in puzzle.variable_ids() {
        let length = puzzle.variable(id).length;
        let filtered: HashSet<Word> = domains
            .get(id)
            .iter()
            .filter(|word| word.chars().count() == length)
            .cloned()
            .collect();
        domains.install(id, filtered);
    }
}

/// Makes `x` arc-consistent with `y`: drops every candidate of `x` that has
/// no supporting candidate in `y`'s domain at the recorded overlap indices.
///
/// Returns whether anything was removed. A non-crossing pair is a no-op. The
/// new domain is built as a filtered replacement and installed atomically.
pub fn revise(
    puzzle: &Puzzle,
    domains: &mut DomainStore,
    x: VariableId,
    y: VariableId,
    stats: &mut SearchStats,
) -> bool {
    let Some((i, j)) = puzzle.overlap(x, y) else {
        return false;
    };
    stats.revise_calls += 1;

    let y_domain = domains.get(y).clone();
    let x_domain = domains.get(x);
    let filtered: HashSet<Word> = x_domain
        .iter()
        .filter(|x_word| match letter_at(x_word, i) {
            // A candidate too short to reach the overlap supports nothing.
            None => false,
            Some(shared) => y_domain
                .iter()
                .any(|y_word| letter_at(y_word, j) == Some(shared)),
        })
        .cloned()
        .collect();

    let removed = x_domain.len() - filtered.len();
    if removed == 0 {
        return false;
    }
    trace!(x, y, removed, "revise pruned domain");
    stats.prunings += removed as u64;
    domains.install(x, filtered);
    true
}

/// AC-3 propagation over the supplied arcs, or over every ordered pair of
/// crossing variables when `arcs` is `None`.
///
/// Returns `false` as soon as a domain is wiped out (the problem is
/// unsatisfiable); `true` means every domain is arc-consistent with every
/// neighbor. After a successful revision of `x`, the arcs `(z, x)` for each
/// neighbor `z != y` are re-enqueued, since `x`'s shrunken domain may have
/// cost them their support.
pub fn ac3(
    puzzle: &Puzzle,
    domains: &mut DomainStore,
    arcs: Option<Vec<Arc>>,
    stats: &mut SearchStats,
) -> bool {
    let mut worklist = WorkList::new();
    for arc in arcs.unwrap_or_else(|| puzzle.all_arcs()) {
        worklist.push_back(arc);
    }

    while let Some((x, y)) = worklist.pop_front() {
        if revise(puzzle, domains, x, y, stats) {
            if domains.is_empty(x) {
                debug!(x, "domain wiped out during propagation");
                return false;
            }
            for &z in puzzle.neighbors(x) {
                if z != y {
                    worklist.push_back((z, x));
                }
            }
        }
    }

    debug!("propagation finished; all arcs consistent");
    true
}

/// The shared solve prologue: pre-check, then node consistency, then full
/// AC-3, producing the pruned store both search strategies start from.
///
/// Returns `None` (with `stats.unsat_reason` set) when pruning already proves
/// the puzzle unsatisfiable.
pub fn pruned_domains(puzzle: &Puzzle, stats: &mut SearchStats) -> Option<DomainStore> {
    if !check_length_feasibility(puzzle) {
        stats.unsat_reason = Some(UnsatReason::InfeasibleByCount);
        return None;
    }

    let mut domains = DomainStore::full(puzzle);
    enforce_node_consistency(puzzle, &mut domains);
    if !ac3(puzzle, &mut domains, None, stats) {
        stats.unsat_reason = Some(UnsatReason::DomainExhausted);
        return None;
    }
    Some(domains)
}
