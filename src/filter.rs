//! Decides whether a range scan needs a range-element-property filter
//! iterator. Pure: this module produces a descriptor for the engine's
//! iterator framework to consume, it never touches the engine itself.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeEdges {
    All,
    Directed,
    Undirected,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Both,
    Incoming,
    Outgoing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub include_entities: bool,
    pub include_edges: IncludeEdges,
    pub direction: Direction,
}

/// Returns `None` when no filter is needed: the query asks for entities
/// and edges of every direction, both incoming and outgoing. Any other
/// combination needs a filter parameterised by the requested shape.
pub fn filter_policy(include_entities: bool, include_edges: IncludeEdges, direction: Direction) -> Option<FilterSpec> {
    if include_entities && include_edges == IncludeEdges::All && direction == Direction::Both {
        None
    } else {
        Some(FilterSpec { include_entities, include_edges, direction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elides_filter_only_for_everything() {
        assert_eq!(filter_policy(true, IncludeEdges::All, Direction::Both), None);
    }

    #[test]
    fn every_other_combination_needs_a_filter() {
        assert!(filter_policy(false, IncludeEdges::All, Direction::Both).is_some());
        assert!(filter_policy(true, IncludeEdges::Directed, Direction::Both).is_some());
        assert!(filter_policy(true, IncludeEdges::All, Direction::Incoming).is_some());
        assert!(filter_policy(true, IncludeEdges::None, Direction::Outgoing).is_some());
    }
}
