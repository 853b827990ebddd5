pub mod draft;
pub mod player;
pub mod roster;
pub mod team;

pub use draft::*;
pub use player::*;
pub use roster::*;
pub use team::*;
