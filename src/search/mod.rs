pub mod partial;
pub mod solve;

pub use partial::PartialAssignment;
pub use solve::{solve, Solutions};
