use std::{collections::VecDeque, marker::PhantomData, sync::mpsc::Sender};

use super::{
    MazeGrid,
    cell::{EdgeIndex, EdgeStatus, NodeIndex, NodeStatus},
    shape::{Region, Shape},
};

/// A single state change, sent to the observer right after it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    Node {
        node: NodeIndex,
        old: NodeStatus,
        new: NodeStatus,
    },
    Edge {
        node: NodeIndex,
        edge: EdgeIndex,
        old: EdgeStatus,
        new: EdgeStatus,
    },
}

/// A `rows x cols` grid of cells of shape `S`, owning all node and edge state.
///
/// Every connection has exactly one storage slot: forward edges live on the cell they
/// leave, the other half on the neighbor under the reverse edge number. Edge storage is
/// padded by one ring of virtual cells so connections leaving the grid have a slot too.
pub struct Grid<S: Shape> {
    nodes: Box<[NodeStatus]>,
    edges: Box<[EdgeStatus]>,
    rows: u16,
    cols: u16,
    sender: Option<Sender<GridEvent>>,
    _shape: PhantomData<S>,
}

impl<S: Shape> Grid<S> {
    /// Creates a grid with every cell and edge open, except edges leaving the grid,
    /// which are invalid.
    ///
    /// # Panics
    /// If `rows` or `cols` is zero.
    pub fn new(rows: u16, cols: u16) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "grid dimensions must be positive, got {rows}x{cols}"
        );
        let padded = (rows as usize + 2) * (cols as usize + 2);
        let half = (S::EDGE_COUNT / 2) as usize;
        let mut grid = Grid {
            nodes: vec![NodeStatus::Open; rows as usize * cols as usize].into_boxed_slice(),
            edges: vec![EdgeStatus::Open; padded * half].into_boxed_slice(),
            rows,
            cols,
            sender: None,
            _shape: PhantomData,
        };
        grid.invalidate_region_edges(grid.region());
        tracing::debug!("[grid] created {} grid of {rows}x{cols} cells", S::NAME);
        grid
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// The region covering the whole grid.
    pub fn region(&self) -> Region {
        Region::new(
            NodeIndex::new(0, 0),
            NodeIndex::new(self.rows as i32 - 1, self.cols as i32 - 1),
        )
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        (0..self.rows as i32).contains(&node.row) && (0..self.cols as i32).contains(&node.col)
    }

    /// Attaches an observer that receives a [`GridEvent`] for every state change.
    ///
    /// Events are sent synchronously; a dropped receiver is ignored.
    pub fn set_observer(&mut self, sender: Sender<GridEvent>) {
        self.sender = Some(sender);
    }

    fn ravel_index(&self, node: NodeIndex) -> usize {
        assert!(
            self.contains(node),
            "node {node} is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        node.row as usize * self.cols as usize + node.col as usize
    }

    /// Storage slot of the connection leaving `node` through `edge`.
    fn edge_slot(&self, node: NodeIndex, edge: EdgeIndex) -> usize {
        assert!(
            self.contains(node),
            "node {node} is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        assert!(
            S::is_valid_edge(edge),
            "edge {edge} is out of range for {} cells",
            S::NAME
        );
        let (owner, direction) = if S::is_forward(edge) {
            (node, edge)
        } else {
            (S::next_node(node, edge), S::reverse_edge(edge))
        };
        // Neighbors of in-grid cells are at most one step outside, i.e. inside the padding.
        let padded_index =
            (owner.row + 1) as usize * (self.cols as usize + 2) + (owner.col + 1) as usize;
        padded_index * (S::EDGE_COUNT / 2) as usize + direction as usize - 1
    }

    fn write_node(&mut self, node: NodeIndex, status: NodeStatus) {
        let idx = self.ravel_index(node);
        let old = self.nodes[idx];
        if old != status {
            self.nodes[idx] = status;
            if let Some(sender) = &self.sender {
                let _ = sender.send(GridEvent::Node {
                    node,
                    old,
                    new: status,
                });
            }
        }
    }

    fn write_edge(&mut self, node: NodeIndex, edge: EdgeIndex, status: EdgeStatus) {
        let idx = self.edge_slot(node, edge);
        let old = self.edges[idx];
        if old != status {
            self.edges[idx] = status;
            if let Some(sender) = &self.sender {
                let _ = sender.send(GridEvent::Edge {
                    node,
                    edge,
                    old,
                    new: status,
                });
            }
        }
    }

    /// Marks every edge crossing the perimeter of `region` as invalid.
    fn invalidate_region_edges(&mut self, region: Region) {
        for node in region.perimeter() {
            for edge in S::boundary_edges(node, region) {
                self.write_edge(node, edge, EdgeStatus::Invalid);
            }
        }
    }

    /// Permanently removes the cells from `top_left` to `bottom_right` (inclusive) from the
    /// maze. Their perimeter becomes an invalid wall and the cells are never handed out by
    /// [`MazeGrid::open_node`].
    ///
    /// # Panics
    /// If the region is inverted or not fully inside the grid.
    pub fn invalidate_region(&mut self, top_left: NodeIndex, bottom_right: NodeIndex) {
        let region = Region::new(top_left, bottom_right);
        assert!(
            self.contains(top_left) && self.contains(bottom_right),
            "region {top_left}..{bottom_right} is not inside the {}x{} grid",
            self.rows,
            self.cols
        );
        self.invalidate_region_edges(region);
        for node in region.nodes() {
            self.write_node(node, NodeStatus::Excluded);
        }
        tracing::debug!("[grid] invalidated region {top_left}..{bottom_right}");
    }

    /// Opens an entrance next to the top-left corner and an exit next to the bottom-right
    /// corner. Must be called before generation to become part of the maze.
    ///
    /// A corner cell removed by [`Grid::invalidate_region`] gets no opening.
    pub fn add_exits(&mut self) {
        let (entrance, exit) = S::EXITS;
        let bottom_right = NodeIndex::new(self.rows as i32 - 1, self.cols as i32 - 1);
        for (corner, edge) in [(NodeIndex::new(0, 0), entrance), (bottom_right, exit)] {
            if self.node(corner) == NodeStatus::Excluded {
                tracing::warn!("[grid] no exit at {corner}, the cell is excluded");
                continue;
            }
            self.write_edge(corner, edge, EdgeStatus::Visited);
            tracing::debug!("[grid] added exit at {corner}");
        }
    }

    /// All cells with their status, in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, NodeStatus)> + '_ {
        self.region()
            .nodes()
            .map(move |node| (node, self.nodes[self.ravel_index(node)]))
    }

    /// Every connection touching the grid, each reported once from the cell that owns it:
    /// forward edges, plus edges leading out of the grid.
    pub fn connections(&self) -> impl Iterator<Item = (NodeIndex, EdgeIndex, EdgeStatus)> + '_ {
        self.region().nodes().flat_map(move |node| {
            S::edges()
                .filter(move |&edge| {
                    S::is_forward(edge) || !self.contains(S::next_node(node, edge))
                })
                .map(move |edge| (node, edge, self.edges[self.edge_slot(node, edge)]))
        })
    }

    /// Number of distinct connections with the given status.
    pub fn count_edges(&self, status: EdgeStatus) -> usize {
        self.connections().filter(|&(_, _, s)| s == status).count()
    }

    /// Whether every cell that is not excluded can be reached from every other one
    /// through edges that are not invalid. A maze can only be generated on a connected
    /// grid; a grid without such cells counts as connected.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.nodes().find(|&(_, s)| s != NodeStatus::Excluded) else {
            return true;
        };
        let mut seen = vec![false; self.nodes.len()];
        let mut queue = VecDeque::from([first.0]);
        seen[self.ravel_index(first.0)] = true;
        let mut reached = 1;
        while let Some(node) = queue.pop_front() {
            for edge in S::edges() {
                let next = S::next_node(node, edge);
                if !self.contains(next) || self.edge(node, edge) == EdgeStatus::Invalid {
                    continue;
                }
                let idx = self.ravel_index(next);
                if !seen[idx] && self.nodes[idx] != NodeStatus::Excluded {
                    seen[idx] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }
        reached
            == self
                .nodes
                .iter()
                .filter(|&&s| s != NodeStatus::Excluded)
                .count()
    }
}

impl<S: Shape> MazeGrid for Grid<S> {
    type Node = NodeIndex;

    fn node(&self, node: NodeIndex) -> NodeStatus {
        self.nodes[self.ravel_index(node)]
    }

    fn set_node(&mut self, node: NodeIndex, status: NodeStatus) {
        self.write_node(node, status);
    }

    fn open_edges_into(&self, node: NodeIndex, edges: &mut Vec<EdgeIndex>) {
        edges.clear();
        edges.extend(S::edges().filter(|&edge| self.edge(node, edge).is_traversable()));
    }

    fn edge(&self, node: NodeIndex, edge: EdgeIndex) -> EdgeStatus {
        self.edges[self.edge_slot(node, edge)]
    }

    fn set_edge(&mut self, node: NodeIndex, edge: EdgeIndex, status: EdgeStatus) {
        self.write_edge(node, edge, status);
    }

    fn open_node(&self) -> Option<NodeIndex> {
        self.nodes
            .iter()
            .position(|&status| status == NodeStatus::Open)
            .map(|idx| {
                NodeIndex::new(
                    (idx / self.cols as usize) as i32,
                    (idx % self.cols as usize) as i32,
                )
            })
    }

    fn next_node(&self, node: NodeIndex, edge: EdgeIndex) -> NodeIndex {
        S::next_node(node, edge)
    }
}
