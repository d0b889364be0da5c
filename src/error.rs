use thiserror::Error;

/// Why a maze could not be generated. Retrying needs a different grid or seed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateMazeError {
    #[error("the grid has no open node to start the maze from")]
    NoFirstOpenNode,

    #[error("the random walk reached a node without open edges")]
    NoOpenEdges,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaperSizeError {
    #[error("unknown paper format {0:?}, expected A3, A4 or A5")]
    UnknownFormat(String),

    #[error("unknown paper orientation {0:?}, expected portrait (p) or landscape (l)")]
    UnknownOrientation(String),
}
