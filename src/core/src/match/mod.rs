pub mod box_score;
pub mod plays;
pub mod random;
pub mod result;
pub mod score;
pub mod seed;
pub mod simulator;
pub mod stats;

pub use box_score::*;
pub use plays::*;
pub use random::*;
pub use result::*;
pub use score::*;
pub use seed::*;
pub use simulator::*;
pub use stats::*;
