use std::{fmt, ops::RangeInclusive};

use super::cell::{EdgeIndex, NodeIndex};

/// Tessellation strategy: how a cell's numbered edges map onto its neighbors.
///
/// Implementations are zero-sized and resolved at compile time, so `Grid<S>` pays no
/// dispatch cost in the generator's hot loop.
///
/// Edges `1..=EDGE_COUNT / 2` are the *forward* edges; edge `e` and
/// `reverse_edge(e)` always denote the same connection seen from both ends.
pub trait Shape: Copy + Default + fmt::Debug {
    /// Number of edges per cell.
    const EDGE_COUNT: EdgeIndex;
    /// Human readable name, used in logs.
    const NAME: &'static str;
    /// Edges opened by `add_exits`: the first on the top-left cell, the second on the
    /// bottom-right cell. Both must leave the grid.
    const EXITS: (EdgeIndex, EdgeIndex);

    /// Returns the cell reached from `node` through `edge`, or [`NodeIndex::INVALID`] if
    /// `edge` is not in `1..=EDGE_COUNT`.
    ///
    /// The result may lie outside of any particular grid; bounds are the grid's concern.
    fn next_node(node: NodeIndex, edge: EdgeIndex) -> NodeIndex;

    /// All edge numbers of a cell, in ascending order.
    fn edges() -> RangeInclusive<EdgeIndex> {
        1..=Self::EDGE_COUNT
    }

    fn is_valid_edge(edge: EdgeIndex) -> bool {
        (1..=Self::EDGE_COUNT).contains(&edge)
    }

    fn is_forward(edge: EdgeIndex) -> bool {
        edge <= Self::EDGE_COUNT / 2
    }

    /// The edge number on `next_node(node, edge)` that points back at `node`.
    ///
    /// # Panics
    /// If `edge` is out of range.
    fn reverse_edge(edge: EdgeIndex) -> EdgeIndex {
        assert!(
            Self::is_valid_edge(edge),
            "edge {edge} is out of range for {} cells",
            Self::NAME
        );
        (edge - 1 + Self::EDGE_COUNT / 2) % Self::EDGE_COUNT + 1
    }

    /// Edges of `node` that cross the perimeter of `region`.
    fn boundary_edges(node: NodeIndex, region: Region) -> impl Iterator<Item = EdgeIndex> {
        Self::edges().filter(move |&edge| !region.contains(Self::next_node(node, edge)))
    }
}

/// Row or column parity, as an index into a shape's offset table.
pub(crate) fn parity(index: i32) -> usize {
    index.rem_euclid(2) as usize
}

/// Axis-aligned, inclusive rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top_left: NodeIndex,
    pub bottom_right: NodeIndex,
}

impl Region {
    /// # Panics
    /// If `top_left` lies below or to the right of `bottom_right`.
    pub fn new(top_left: NodeIndex, bottom_right: NodeIndex) -> Self {
        assert!(
            top_left.row <= bottom_right.row && top_left.col <= bottom_right.col,
            "inverted region: top left {top_left} is past bottom right {bottom_right}"
        );
        Region {
            top_left,
            bottom_right,
        }
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        (self.top_left.row..=self.bottom_right.row).contains(&node.row)
            && (self.top_left.col..=self.bottom_right.col).contains(&node.col)
    }

    /// Cells of the region in row-major order.
    pub fn nodes(self) -> impl Iterator<Item = NodeIndex> {
        let (cols, rows) = (
            self.top_left.col..=self.bottom_right.col,
            self.top_left.row..=self.bottom_right.row,
        );
        rows.flat_map(move |row| cols.clone().map(move |col| NodeIndex::new(row, col)))
    }

    /// Cells on the outer ring of the region, in row-major order.
    ///
    /// Interior cells of every supported shape only have neighbors inside the region, so
    /// these are the only cells that can own boundary edges.
    pub fn perimeter(self) -> impl Iterator<Item = NodeIndex> {
        let region = self;
        self.nodes().filter(move |node| {
            node.row == region.top_left.row
                || node.row == region.bottom_right.row
                || node.col == region.top_left.col
                || node.col == region.bottom_right.col
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region = Region::new((1, 1).into(), (2, 3).into());
        assert!(region.contains((1, 1).into()));
        assert!(region.contains((2, 3).into()));
        assert!(!region.contains((0, 1).into()));
        assert!(!region.contains((2, 4).into()));
    }

    #[test]
    fn test_region_perimeter_skips_interior() {
        let region = Region::new((0, 0).into(), (2, 2).into());
        let perimeter = region.perimeter().collect::<Vec<_>>();
        assert_eq!(perimeter.len(), 8);
        assert!(!perimeter.contains(&NodeIndex::new(1, 1)));
    }

    #[test]
    fn test_single_cell_region() {
        let region = Region::new((1, 1).into(), (1, 1).into());
        assert_eq!(region.nodes().collect::<Vec<_>>(), vec![NodeIndex::new(1, 1)]);
        assert_eq!(region.perimeter().count(), 1);
    }

    #[test]
    #[should_panic(expected = "inverted region")]
    fn test_inverted_region_panics() {
        Region::new((2, 0).into(), (1, 0).into());
    }

    #[test]
    fn test_parity_of_negative_index() {
        assert_eq!(parity(-1), 1);
        assert_eq!(parity(-2), 0);
        assert_eq!(parity(3), 1);
    }
}
