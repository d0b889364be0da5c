pub mod error;
pub mod generators;
pub mod maze;
pub mod paper;
pub mod render;
