use crate::error::{Result, VoteError};
use crate::models::Cat;

/// Turns the raw `cat` form value into a position in a listing of `len` cats.
pub fn parse_vote_index(raw: &str, len: usize) -> Result<usize> {
    let index: i128 = raw
        .parse()
        .map_err(|_| VoteError::InvalidIndex(raw.to_string()))?;

    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(VoteError::IndexOutOfRange { index, len }),
    }
}

pub fn validate_cats(cats: &[Cat]) -> Result<()> {
    match cats.iter().position(|cat| cat.name().trim().is_empty()) {
        Some(position) => Err(VoteError::EmptyName(position)),
        None => Ok(()),
    }
}
