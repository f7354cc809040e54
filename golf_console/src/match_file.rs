use anyhow::Context;
use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use golf_match::{
    HoleInfo, MatchRules, Player, ScoreError, Scorecard, ScorecardSetup, Team, default_holes,
};


// A gross score as written in the file. Text is accepted so that hand-edited files can use the
// same input path as an interactive scorecard, e.g. `gross: "5"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GrossEntry {
    Strokes(i32),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreEntry {
    pub player: String,
    pub hole: u32,
    pub gross: GrossEntry,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchFile {
    pub players: Vec<Player>,
    // The placeholder 18-hole course is used when omitted.
    #[serde(default)]
    pub holes: Option<Vec<HoleInfo>>,
    #[serde(default)]
    pub team_labels: Option<EnumMap<Team, String>>,
    #[serde(default)]
    pub scores: Vec<ScoreEntry>,
}

impl MatchFile {
    pub fn rules(&self) -> MatchRules {
        match &self.team_labels {
            Some(labels) => MatchRules::default().with_team_labels(&labels[Team::A], &labels[Team::B]),
            None => MatchRules::default(),
        }
    }

    // Entries that the scorecard rejects, or that refer to an unknown player or hole, are
    // skipped with a warning.
    pub fn into_scorecard(self) -> Scorecard {
        let rules = self.rules();
        let mut scorecard = Scorecard::new(ScorecardSetup {
            players: self.players,
            holes: self.holes.unwrap_or_else(default_holes),
            rules,
            ..ScorecardSetup::default()
        });
        for entry in self.scores {
            if !scorecard.players().iter().any(|p| p.id == entry.player) {
                log::warn!("Skipping score for unknown player {:?}", entry.player);
                continue;
            }
            if !scorecard.holes().iter().any(|h| h.hole_number == entry.hole) {
                log::warn!("Skipping score for {:?} on unknown hole {}", entry.player, entry.hole);
                continue;
            }
            if let Err(err) = apply_score(&mut scorecard, &entry) {
                log::warn!(
                    "Skipping score {:?} for {:?} on hole {}: {}",
                    entry.gross, entry.player, entry.hole, err
                );
            }
        }
        scorecard
    }
}

fn apply_score(scorecard: &mut Scorecard, entry: &ScoreEntry) -> Result<(), ScoreError> {
    match &entry.gross {
        GrossEntry::Strokes(gross) => scorecard.update_score(&entry.player, entry.hole, *gross),
        GrossEntry::Text(gross) => scorecard.update_score_str(&entry.player, entry.hole, gross),
    }
}

pub fn parse_match_file(contents: &str) -> anyhow::Result<MatchFile> {
    serde_yaml::from_str(contents).context("Failed to parse match file.")
}

pub fn read_match_file(path: &str) -> anyhow::Result<MatchFile> {
    let contents =
        std::fs::read_to_string(path).context(format!("Failed to read file '{path}'."))?;
    parse_match_file(&contents).context(format!("Invalid match file '{path}'."))
}
