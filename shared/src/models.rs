use serde::{Deserialize, Serialize};

/// One entry in the cat listing.
///
/// The serialized keys match the data files produced by earlier deployments,
/// so an existing `cats.json` keeps loading after an upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cat {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "ImageURL", default)]
    image_url: String,
    #[serde(rename = "Votes", default)]
    votes: u64,
}

impl Cat {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            votes: 0,
        }
    }

    pub fn with_votes(mut self, votes: u64) -> Self {
        self.votes = votes;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn votes(&self) -> u64 {
        self.votes
    }

    /// Adds exactly one vote and returns the new count.
    pub fn record_vote(&mut self) -> u64 {
        self.votes = self.votes.saturating_add(1);
        self.votes
    }
}

pub const SEED_NAMES: [&str; 5] = ["Susanna", "Walter", "Pan-Pan", "Busby", "Keaton"];

/// The listing written to disk when no data file exists yet.
pub fn seed_cats() -> Vec<Cat> {
    SEED_NAMES.iter().map(|name| Cat::new(*name, "")).collect()
}
