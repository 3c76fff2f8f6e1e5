use std::collections::{HashSet, VecDeque};

use crate::puzzle::VariableId;

/// An ordered pair of crossing variables awaiting revision: revise the
/// first's domain against the second's.
pub type Arc = (VariableId, VariableId);

/// FIFO queue of arcs for AC-3 with membership tracking, so an arc already
/// pending is not enqueued a second time.
pub struct WorkList {
    queue: VecDeque<Arc>,
    queue_members: HashSet<Arc>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, arc: Arc) {
        if self.queue_members.insert(arc) {
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pops_in_fifo_order() {
        let mut list = WorkList::new();
        list.push_back((0, 1));
        list.push_back((1, 0));
        list.push_back((2, 0));

        assert_eq!(list.pop_front(), Some((0, 1)));
        assert_eq!(list.pop_front(), Some((1, 0)));
        assert_eq!(list.pop_front(), Some((2, 0)));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn pending_arcs_are_not_duplicated() {
        let mut list = WorkList::new();
        list.push_back((0, 1));
        list.push_back((0, 1));

        assert_eq!(list.pop_front(), Some((0, 1)));
        assert!(list.is_empty());

        // Once popped, the arc may be enqueued again.
        list.push_back((0, 1));
        assert_eq!(list.pop_front(), Some((0, 1)));
    }
}
