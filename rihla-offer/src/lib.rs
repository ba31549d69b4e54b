pub mod models;
pub mod kiwi;
pub mod ranker;

pub use kiwi::{KiwiClient, KiwiError};
pub use ranker::{rank_direct_first, SearchSummary};
