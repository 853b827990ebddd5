pub mod game;
pub mod simulation;
pub mod values;

pub use game::*;
pub use simulation::*;
pub use values::*;
