use super::{
    cell::{EdgeIndex, NodeIndex},
    shape::Shape,
};

/// Square cells. Edges point south, east, north and west.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

impl Square {
    pub const SOUTH: EdgeIndex = 1;
    pub const EAST: EdgeIndex = 2;
    pub const NORTH: EdgeIndex = 3;
    pub const WEST: EdgeIndex = 4;

    /// (row, col) offsets, indexed by `edge - 1`.
    const OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
}

impl Shape for Square {
    const EDGE_COUNT: EdgeIndex = 4;
    const NAME: &'static str = "square";
    const EXITS: (EdgeIndex, EdgeIndex) = (Square::NORTH, Square::SOUTH);

    fn next_node(node: NodeIndex, edge: EdgeIndex) -> NodeIndex {
        if !Self::is_valid_edge(edge) {
            return NodeIndex::INVALID;
        }
        let (d_row, d_col) = Self::OFFSETS[edge as usize - 1];
        NodeIndex::new(node.row + d_row, node.col + d_col)
    }
}
