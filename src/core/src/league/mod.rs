pub mod data;
pub mod game;
pub mod standings;
pub mod starters;

pub use data::*;
pub use game::*;
pub use standings::*;
pub use starters::*;
