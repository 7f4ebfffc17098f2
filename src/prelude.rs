//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{minimax, search, SearchOutcome, SearchStrategy};
pub use crate::board::{Board, Cell, Player};
pub use crate::evaluate::{GameStatus, BASE_SCORE};
