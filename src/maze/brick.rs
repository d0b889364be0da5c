use super::{
    cell::{EdgeIndex, NodeIndex},
    shape::{Shape, parity},
};

/// Bricks laid in rows; odd rows are shifted right by half a brick.
///
/// Each brick touches two bricks above, two below and one on each side. Edges:
/// SW, SE, E, NE, NW, W.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Brick;

impl Brick {
    pub const SOUTH_WEST: EdgeIndex = 1;
    pub const SOUTH_EAST: EdgeIndex = 2;
    pub const EAST: EdgeIndex = 3;
    pub const NORTH_EAST: EdgeIndex = 4;
    pub const NORTH_WEST: EdgeIndex = 5;
    pub const WEST: EdgeIndex = 6;

    /// (row, col) offsets, indexed by row parity and `edge - 1`.
    const OFFSETS: [[(i32, i32); 6]; 2] = [
        [(1, -1), (1, 0), (0, 1), (-1, 0), (-1, -1), (0, -1)],
        [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (0, -1)],
    ];
}

impl Shape for Brick {
    const EDGE_COUNT: EdgeIndex = 6;
    const NAME: &'static str = "brick";
    const EXITS: (EdgeIndex, EdgeIndex) = (Brick::NORTH_WEST, Brick::SOUTH_EAST);

    fn next_node(node: NodeIndex, edge: EdgeIndex) -> NodeIndex {
        if !Self::is_valid_edge(edge) {
            return NodeIndex::INVALID;
        }
        let (d_row, d_col) = Self::OFFSETS[parity(node.row)][edge as usize - 1];
        NodeIndex::new(node.row + d_row, node.col + d_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case((0, 0), 1, (1, -1))]
    #[case((0, 0), 2, (1, 0))]
    #[case((0, 0), 3, (0, 1))]
    #[case((0, 0), 4, (-1, 0))]
    #[case((0, 0), 5, (-1, -1))]
    #[case((0, 0), 6, (0, -1))]
    #[case((0, 1), 1, (1, 0))]
    #[case((0, 1), 2, (1, 1))]
    #[case((0, 1), 3, (0, 2))]
    #[case((0, 1), 4, (-1, 1))]
    #[case((0, 1), 5, (-1, 0))]
    #[case((0, 1), 6, (0, 0))]
    #[case((1, 0), 1, (2, 0))]
    #[case((1, 0), 2, (2, 1))]
    #[case((1, 0), 3, (1, 1))]
    #[case((1, 0), 4, (0, 1))]
    #[case((1, 0), 5, (0, 0))]
    #[case((1, 0), 6, (1, -1))]
    #[case((1, 1), 1, (2, 1))]
    #[case((1, 1), 2, (2, 2))]
    #[case((1, 1), 3, (1, 2))]
    #[case((1, 1), 4, (0, 2))]
    #[case((1, 1), 5, (0, 1))]
    #[case((1, 1), 6, (1, 0))]
    fn test_next_node(
        #[case] node: (i32, i32),
        #[case] edge: EdgeIndex,
        #[case] expected: (i32, i32),
    ) {
        assert_eq!(Brick::next_node(node.into(), edge), expected.into());
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    fn test_next_node_out_of_range(#[case] edge: EdgeIndex) {
        assert_eq!(Brick::next_node((0, 0).into(), edge), NodeIndex::INVALID);
    }

    #[rstest]
    #[case(1, 4)]
    #[case(2, 5)]
    #[case(3, 6)]
    #[case(4, 1)]
    #[case(5, 2)]
    #[case(6, 3)]
    fn test_reverse_edge(#[case] edge: EdgeIndex, #[case] reverse: EdgeIndex) {
        assert_eq!(Brick::reverse_edge(edge), reverse);
        for node in [NodeIndex::new(2, 2), NodeIndex::new(3, 2)] {
            assert_eq!(Brick::next_node(Brick::next_node(node, edge), reverse), node);
        }
    }
}
