use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn opponent(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}


#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub course_handicap: u32,
    #[serde(rename = "teamId")]
    pub team: Team,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, course_handicap: u32, team: Team) -> Self {
        Player {
            id: id.into(),
            name: name.into(),
            course_handicap,
            team,
        }
    }

    pub fn apply_update(&mut self, update: PlayerUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(course_handicap) = update.course_handicap {
            self.course_handicap = course_handicap;
        }
    }
}

// Partial player edit. Fields left as `None` keep their current value.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub course_handicap: Option<u32>,
}


// A player together with the handicap allowance relative to the rest of the match.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguredPlayer {
    #[serde(flatten)]
    pub player: Player,
    // Course handicap minus the lowest course handicap in the match.
    pub strokes_received: u32,
    // One entry per hole, in scorecard order: 1 if the player gets a stroke there, 0 otherwise.
    pub handicap_strokes: Vec<u8>,
}

impl ConfiguredPlayer {
    pub fn id(&self) -> &str { &self.player.id }
    pub fn name(&self) -> &str { &self.player.name }
    pub fn team(&self) -> Team { self.player.team }
}
