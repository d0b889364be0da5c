use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::CreateMazeError,
    maze::{EdgeIndex, EdgeStatus, MazeGrid, NodeIndex, NodeStatus},
};

/// One step of a random walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathItem<N> {
    /// Edge taken from the previous node of the walk (the start node for the first step).
    pub edge: EdgeIndex,
    /// Node reached by this step.
    pub target: N,
}

/// Maze generator based on Wilson's algorithm.
///
/// Every cell is connected to the growing tree by a loop-erased random walk, which makes
/// each spanning tree of the grid equally likely. The generator keeps its random source
/// across runs, so a sequence of mazes is reproducible from the seed.
pub struct Wilson<N = NodeIndex> {
    rng: StdRng,
    /// Scratch buffer for the open edges of the current node
    open_edges: Vec<EdgeIndex>,
    /// The walk being grown, without loops
    current_path: Vec<PathItem<N>>,
}

impl<N: Copy + Eq + std::fmt::Debug> Wilson<N> {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Wilson {
            rng,
            open_edges: Vec::new(),
            current_path: Vec::new(),
        }
    }

    /// Turns every open node of `grid` into part of a single spanning tree.
    ///
    /// On success every non-excluded node is `Visited` and the `Visited` edges form a tree.
    /// Edges already `Visited` before the call (exits) are left as they are.
    pub fn create_maze<G>(&mut self, grid: &mut G) -> Result<(), CreateMazeError>
    where
        G: MazeGrid<Node = N>,
    {
        let root = grid.open_node().ok_or(CreateMazeError::NoFirstOpenNode)?;
        grid.set_node(root, NodeStatus::Visited);
        tracing::debug!("[wilson] tree rooted at {:?}", root);

        let (mut num_walks, mut num_steps, mut num_erased) = (0usize, 0usize, 0usize);
        while let Some(start) = grid.open_node() {
            grid.set_node(start, NodeStatus::OnPath);
            self.current_path.clear();
            let mut current = start;

            loop {
                let step = self.random_step(grid, current)?;
                grid.set_edge(current, step.edge, EdgeStatus::OnPath);
                self.current_path.push(step);
                num_steps += 1;

                match grid.node(step.target) {
                    // Reached the tree
                    NodeStatus::Visited => break,
                    NodeStatus::OnPath => {
                        let before = self.current_path.len();
                        current = self.erase_loop(grid, start, step.target);
                        num_erased += before - self.current_path.len();
                    }
                    NodeStatus::Open => {
                        grid.set_node(step.target, NodeStatus::OnPath);
                        current = step.target;
                    }
                    NodeStatus::Excluded => {
                        panic!("random walk entered excluded node {:?}", step.target)
                    }
                }
            }

            self.commit_path(grid, start);
            num_walks += 1;
        }

        tracing::debug!(
            "[wilson] done: {num_walks} walks, {num_steps} steps, {num_erased} erased"
        );
        Ok(())
    }

    /// Picks one of the open edges of `node` uniformly at random.
    fn random_step<G>(&mut self, grid: &G, node: N) -> Result<PathItem<N>, CreateMazeError>
    where
        G: MazeGrid<Node = N>,
    {
        grid.open_edges_into(node, &mut self.open_edges);
        if self.open_edges.is_empty() {
            tracing::debug!("[wilson] no open edges at {:?}", node);
            return Err(CreateMazeError::NoOpenEdges);
        }
        let edge = self.open_edges[self.rng.random_range(0..self.open_edges.len())];
        Ok(PathItem {
            edge,
            target: grid.next_node(node, edge),
        })
    }

    /// Node the last step of the current path was taken from.
    fn last_source(&self, start: N) -> N {
        self.current_path
            .iter()
            .rev()
            .nth(1)
            .map_or(start, |step| step.target)
    }

    /// Removes the loop closed by the last step, which led back to `revisited`.
    ///
    /// Returns the node the walk continues from: `revisited` itself.
    fn erase_loop<G>(&mut self, grid: &mut G, start: N, revisited: N) -> N
    where
        G: MazeGrid<Node = N>,
    {
        tracing::trace!("[wilson] erasing loop back to {:?}", revisited);
        // The closing step: its target stays on the path
        let source = self.last_source(start);
        if let Some(closing) = self.current_path.pop() {
            grid.set_edge(source, closing.edge, EdgeStatus::Open);
        }

        while let Some(&last) = self.current_path.last() {
            if last.target == revisited {
                break;
            }
            let source = self.last_source(start);
            grid.set_node(last.target, NodeStatus::Open);
            grid.set_edge(source, last.edge, EdgeStatus::Open);
            self.current_path.pop();
        }

        self.current_path.last().map_or(start, |step| step.target)
    }

    /// Adds the start node and the whole current path to the tree.
    fn commit_path<G>(&self, grid: &mut G, start: N)
    where
        G: MazeGrid<Node = N>,
    {
        grid.set_node(start, NodeStatus::Visited);
        let mut prev = start;
        for step in &self.current_path {
            grid.set_edge(prev, step.edge, EdgeStatus::Visited);
            grid.set_node(step.target, NodeStatus::Visited);
            prev = step.target;
        }
    }
}
