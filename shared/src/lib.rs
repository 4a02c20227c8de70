pub mod error;
pub mod models;
pub mod validation;
pub mod tally;

pub use error::{Result, VoteError};
pub use models::*;
pub use validation::*;
pub use tally::{cast_vote, rank_by_votes, VoteReceipt};

#[cfg(test)]
mod tests;
