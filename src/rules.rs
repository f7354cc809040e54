use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::player::Team;


#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRules {
    pub players_per_team: usize,
    // Used verbatim in match status messages, e.g. "Team A 2 Up".
    pub team_labels: EnumMap<Team, String>,
}

impl MatchRules {
    pub fn two_man_best_ball() -> Self {
        MatchRules {
            players_per_team: 2,
            team_labels: enum_map! {
                Team::A => "Team A".to_owned(),
                Team::B => "Team B".to_owned(),
            },
        }
    }

    pub fn with_team_labels(self, a: impl Into<String>, b: impl Into<String>) -> Self {
        MatchRules {
            // Array order follows `Team` declaration order.
            team_labels: EnumMap::from_array([a.into(), b.into()]),
            ..self
        }
    }

    pub fn total_players(&self) -> usize { self.players_per_team * Team::LENGTH }

    pub fn team_label(&self, team: Team) -> &str { &self.team_labels[team] }
}

impl Default for MatchRules {
    fn default() -> Self { Self::two_man_best_ball() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_labels_keep_team_order() {
        let rules = MatchRules::default().with_team_labels("Aviators", String::from("Producers"));
        assert_eq!(rules.team_label(Team::A), "Aviators");
        assert_eq!(rules.team_label(Team::B), "Producers");
        assert_eq!(rules.players_per_team, 2);
        assert_eq!(rules.total_players(), 4);
    }
}
