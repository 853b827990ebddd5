pub mod breakdown;
pub mod clock;
pub mod description;
pub mod impact;
pub mod timeline;

pub use breakdown::*;
pub use clock::*;
pub use description::*;
pub use impact::*;
pub use timeline::*;
