use shared::tally::{self, VoteReceipt};
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::store::CatStore;

pub struct VoteProcessor;

impl VoteProcessor {
    /// Records one vote for the cat at `raw_index` and writes the listing back.
    ///
    /// The store lock is held from parsing through the write, so concurrent
    /// votes are applied one at a time. A failed write is logged and the vote
    /// still counts in memory.
    pub fn cast_vote(store: &CatStore, raw_index: &str) -> Result<VoteReceipt, ApiError> {
        let mut cats = store.lock()?;

        let receipt = match tally::cast_vote(&mut cats, raw_index, store.sort_by_votes()) {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!("Rejected vote for cat index {:?}: {}", raw_index, e);
                return Err(e.into());
            }
        };
        info!("🐾 Vote for {} ({} votes)", receipt.name, receipt.votes);

        if let Err(e) = store.save(&cats) {
            error!("Failed to save cat data: {}", e);
        }

        Ok(receipt)
    }
}
