use crate::core::models::placement::Placement;
use std::collections::VecDeque;

/// Inclusive cell range covered by a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

impl Span {
    fn of(placement: &Placement) -> Self {
        let (bottom, right) = placement.end();
        Self {
            top: placement.start_row,
            left: placement.start_col,
            bottom,
            right,
        }
    }

    fn overlaps(&self, other: &Span) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }
}

/// Number of groups the placements fall into when crossing words are linked.
///
/// Two placements are linked when their cell ranges overlap. For validated
/// one-cell-thick words this happens exactly when they cross.
pub fn component_count(placements: &[Placement]) -> usize {
    let spans: Vec<Span> = placements.iter().map(Span::of).collect();
    let mut visited = vec![false; spans.len()];
    let mut components = 0;

    for start in 0..spans.len() {
        if visited[start] {
            continue;
        }
        components += 1;
        visited[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for next in 0..spans.len() {
                if !visited[next] && spans[current].overlaps(&spans[next]) {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    components
}

/// True when every placement is reachable from the first; empty and single
/// placement sets are trivially connected.
pub fn is_connected(placements: &[Placement]) -> bool {
    component_count(placements) <= 1
}
