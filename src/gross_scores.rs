use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};


// Raw gross strokes keyed by player ID and hole number. A missing entry means the player has not
// finished the hole yet.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrossScores {
    scores: HashMap<String, BTreeMap<u32, u32>>,
}

impl GrossScores {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, player_id: &str, hole_number: u32) -> Option<u32> {
        self.scores.get(player_id)?.get(&hole_number).copied()
    }

    pub fn set(&mut self, player_id: &str, hole_number: u32, gross: u32) {
        self.scores.entry(player_id.to_owned()).or_default().insert(hole_number, gross);
    }

    pub fn remove(&mut self, player_id: &str, hole_number: u32) -> Option<u32> {
        let player_scores = self.scores.get_mut(player_id)?;
        let removed = player_scores.remove(&hole_number);
        if player_scores.is_empty() {
            self.scores.remove(player_id);
        }
        removed
    }

    pub fn clear(&mut self) { self.scores.clear(); }

    pub fn is_empty(&self) -> bool { self.scores.is_empty() }

    pub fn len(&self) -> usize { self.scores.values().map(BTreeMap::len).sum() }

    // Entries as `(player_id, hole_number, gross)`. Player order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32, u32)> + '_ {
        self.scores.iter().flat_map(|(player_id, holes)| {
            holes.iter().map(move |(&hole_number, &gross)| (player_id.as_str(), hole_number, gross))
        })
    }
}

impl<S: Into<String>> FromIterator<(S, u32, u32)> for GrossScores {
    fn from_iter<I: IntoIterator<Item = (S, u32, u32)>>(iter: I) -> Self {
        let mut scores = GrossScores::new();
        for (player_id, hole_number, gross) in iter {
            scores.scores.entry(player_id.into()).or_default().insert(hole_number, gross);
        }
        scores
    }
}
