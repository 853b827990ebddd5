pub mod injury;
pub mod player;
pub mod position;

pub use injury::*;
pub use player::*;
pub use position::*;
