pub mod error;
pub mod tier;
pub mod reputation;
pub mod listing;

pub use error::*;
pub use tier::*;
pub use reputation::*;
pub use listing::*;
