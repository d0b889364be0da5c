use super::{
    cell::{EdgeIndex, NodeIndex},
    shape::{Shape, parity},
};

/// Flat-topped hexagons in columns; odd columns sit half a cell lower than even ones.
///
/// Edges, clockwise from the lower left: SW, S, SE, NE, N, NW.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hex;

impl Hex {
    pub const SOUTH_WEST: EdgeIndex = 1;
    pub const SOUTH: EdgeIndex = 2;
    pub const SOUTH_EAST: EdgeIndex = 3;
    pub const NORTH_EAST: EdgeIndex = 4;
    pub const NORTH: EdgeIndex = 5;
    pub const NORTH_WEST: EdgeIndex = 6;

    /// (row, col) offsets, indexed by column parity and `edge - 1`.
    const OFFSETS: [[(i32, i32); 6]; 2] = [
        [(0, -1), (1, 0), (0, 1), (-1, 1), (-1, 0), (-1, -1)],
        [(1, -1), (1, 0), (1, 1), (0, 1), (-1, 0), (0, -1)],
    ];
}

impl Shape for Hex {
    const EDGE_COUNT: EdgeIndex = 6;
    const NAME: &'static str = "hex";
    const EXITS: (EdgeIndex, EdgeIndex) = (Hex::NORTH_WEST, Hex::SOUTH_EAST);

    fn next_node(node: NodeIndex, edge: EdgeIndex) -> NodeIndex {
        if !Self::is_valid_edge(edge) {
            return NodeIndex::INVALID;
        }
        let (d_row, d_col) = Self::OFFSETS[parity(node.col)][edge as usize - 1];
        NodeIndex::new(node.row + d_row, node.col + d_col)
    }
}
