use std::fmt;

use enum_map::{EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::hole::HoleInfo;
use crate::player::{Player, Team};
use crate::rules::MatchRules;


// Reasons why a scorecard cannot be scored yet. This is a regular state rather than a failure:
// the scorecard keeps accepting edits and simply reports degraded results until setup is fixed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SetupError {
    NotEnoughPlayers,
    TooManyPlayers,
    UnbalancedTeams,
    NoHoles,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SetupError::NotEnoughPlayers => "not enough players",
            SetupError::TooManyPlayers => "too many players",
            SetupError::UnbalancedTeams => "teams must have the same number of players",
            SetupError::NoHoles => "no holes configured",
        };
        write!(f, "{message}")
    }
}

pub fn num_players_per_team<'a>(players: impl Iterator<Item = &'a Player>) -> EnumMap<Team, usize> {
    let mut num_players_per_team = enum_map! { _ => 0 };
    for p in players {
        num_players_per_team[p.team] += 1;
    }
    num_players_per_team
}

pub fn verify_setup(
    rules: &MatchRules, players: &[Player], holes: &[HoleInfo]
) -> Result<(), SetupError> {
    // Check total player number first: callers report a missing player differently from other
    // problems.
    if players.len() < rules.total_players() {
        return Err(SetupError::NotEnoughPlayers);
    }
    if players.len() > rules.total_players() {
        return Err(SetupError::TooManyPlayers);
    }
    let players_per_team = num_players_per_team(players.iter());
    if players_per_team.values().any(|&n| n != rules.players_per_team) {
        return Err(SetupError::UnbalancedTeams);
    }
    if holes.is_empty() {
        return Err(SetupError::NoHoles);
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::default_holes;
    use crate::test_util::sample_players;

    #[test]
    fn complete_setup() {
        let rules = MatchRules::default();
        assert_eq!(verify_setup(&rules, &sample_players(), &default_holes()), Ok(()));
    }

    #[test]
    fn player_count() {
        let rules = MatchRules::default();
        let mut players = sample_players();
        players.pop();
        assert_eq!(verify_setup(&rules, &players, &[]), Err(SetupError::NotEnoughPlayers));
        assert_eq!(verify_setup(&rules, &[], &default_holes()), Err(SetupError::NotEnoughPlayers));

        let mut players = sample_players();
        players.push(Player::new("p5", "Player B3", 4, Team::B));
        assert_eq!(verify_setup(&rules, &players, &default_holes()), Err(SetupError::TooManyPlayers));
    }

    #[test]
    fn three_against_one() {
        let rules = MatchRules::default();
        let mut players = sample_players();
        players[2].team = Team::A;
        assert_eq!(verify_setup(&rules, &players, &default_holes()), Err(SetupError::UnbalancedTeams));
    }

    #[test]
    fn missing_holes() {
        let rules = MatchRules::default();
        assert_eq!(verify_setup(&rules, &sample_players(), &[]), Err(SetupError::NoHoles));
    }
}
