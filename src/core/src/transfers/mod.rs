pub mod asset;
pub mod trade;
pub mod valuation;

pub use asset::*;
pub use trade::*;
pub use valuation::*;
