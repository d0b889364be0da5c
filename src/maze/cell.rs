use std::fmt;

/// Edge numbers start at 1. Square cells use `1..=4`, hexagonal and brick cells `1..=6`.
pub type EdgeIndex = u8;

/// Row/column position of a cell.
///
/// Coordinates are signed because neighbors of boundary cells (e.g. `(-1, 0)`) are
/// addressable even though they are not part of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex {
    pub row: i32,
    pub col: i32,
}

impl NodeIndex {
    /// Returned by lookups that have no answer, e.g. `next_node` with an edge number out of range.
    pub const INVALID: NodeIndex = NodeIndex { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        NodeIndex { row, col }
    }
}

impl From<(i32, i32)> for NodeIndex {
    fn from((row, col): (i32, i32)) -> Self {
        NodeIndex { row, col }
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Lifecycle of a cell during generation.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// Not yet part of the maze.
    #[default]
    Open,
    /// Part of the spanning tree.
    Visited,
    /// On the random walk currently being grown.
    OnPath,
    /// Removed by region invalidation. Never handed out by `open_node`.
    Excluded,
}

/// Lifecycle of a connection between two cells.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStatus {
    /// Traversable but unused: a wall.
    #[default]
    Open,
    /// Passage of the maze.
    Visited,
    /// Step of the random walk currently being grown.
    OnPath,
    /// Can never be traversed (grid or region boundary).
    Invalid,
}

impl EdgeStatus {
    /// Whether a random walk may step across this edge.
    pub fn is_traversable(self) -> bool {
        matches!(self, EdgeStatus::Open | EdgeStatus::OnPath)
    }

    /// Whether a renderer should draw a wall for this edge.
    pub fn is_wall(self) -> bool {
        matches!(self, EdgeStatus::Open | EdgeStatus::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EdgeStatus::Open, true, true)]
    #[case(EdgeStatus::OnPath, true, false)]
    #[case(EdgeStatus::Visited, false, false)]
    #[case(EdgeStatus::Invalid, false, true)]
    fn test_edge_status_predicates(
        #[case] status: EdgeStatus,
        #[case] traversable: bool,
        #[case] wall: bool,
    ) {
        assert_eq!(status.is_traversable(), traversable);
        assert_eq!(status.is_wall(), wall);
    }
}
