//! Persistence for the score tally.

mod error;
mod score_store;

pub use error::StoreError;
pub use score_store::{SCORE_STORAGE_KEY, ScoreStore};
