use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Why a solve call produced no assignment.
///
/// All three collapse to "no solution" at the caller boundary; none of them
/// is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnsatReason {
    /// Some word length is required by more variables than the vocabulary
    /// can supply; detected before any propagation or search.
    InfeasibleByCount,
    /// Arc propagation emptied a variable's domain; search never started.
    DomainExhausted,
    /// The search explored its entire reachable space without finding a
    /// complete consistent assignment.
    SearchExhausted,
}

/// Counters accumulated over one solve call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Calls to `revise` during propagation.
    pub revise_calls: u64,
    /// Candidate words removed from domains by `revise`.
    pub prunings: u64,
    /// Backtracking search tree nodes entered.
    pub nodes_visited: u64,
    /// Candidate values abandoned by the backtracking search.
    pub backtracks: u64,
    /// States expanded by the best-first search.
    pub states_expanded: u64,
    /// Set when the solve call returns no assignment.
    pub unsat_reason: Option<UnsatReason>,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Counter"), Cell::new("Value")]));

    let rows: [(&str, u64); 5] = [
        ("Revise Calls", stats.revise_calls),
        ("Prunings", stats.prunings),
        ("Nodes Visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
        ("States Expanded", stats.states_expanded),
    ];
    for (name, value) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&value.to_string()),
        ]));
    }
    let outcome = match stats.unsat_reason {
        None => "solution found".to_string(),
        Some(reason) => format!("{reason:?}"),
    };
    table.add_row(Row::new(vec![Cell::new("Outcome"), Cell::new(&outcome)]));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_counters() {
        let stats = SearchStats {
            revise_calls: 4,
            prunings: 2,
            nodes_visited: 7,
            backtracks: 1,
            states_expanded: 0,
            unsat_reason: None,
        };
        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("Revise Calls"));
        assert!(rendered.contains("solution found"));
    }
}
