use serde::Serialize;

use crate::error::Result;
use crate::models::Cat;
use crate::validation::parse_vote_index;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VoteReceipt {
    pub index: usize,
    pub name: String,
    pub votes: u64,
}

/// Applies one vote to `cats`. Nothing is mutated when the index is rejected.
///
/// With `sort` set the listing is re-ranked after the increment, so the
/// receipt's `index` is the position the vote was cast for, not the cat's
/// new position.
pub fn cast_vote(cats: &mut [Cat], raw_index: &str, sort: bool) -> Result<VoteReceipt> {
    let index = parse_vote_index(raw_index, cats.len())?;
    let cat = &mut cats[index];
    let votes = cat.record_vote();
    let receipt = VoteReceipt {
        index,
        name: cat.name().to_string(),
        votes,
    };

    if sort {
        rank_by_votes(cats);
    }

    Ok(receipt)
}

/// Orders by descending vote count. Stable, so ties keep their prior order.
pub fn rank_by_votes(cats: &mut [Cat]) {
    cats.sort_by(|a, b| b.votes().cmp(&a.votes()));
}
