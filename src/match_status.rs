use std::cmp::Ordering;

use enum_map::{EnumMap, enum_map};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::hole_result::{HoleOutcome, HoleResultDetails};
use crate::player::Team;
use crate::rules::MatchRules;
use crate::setup::SetupError;


// Match play position, before it is turned into words. `margin` is always the absolute
// difference in holes won; `remaining` is the number of holes without a result yet.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MatchState {
    SetupIncomplete(SetupError),
    NotStarted,
    InProgress { leader: Option<Team>, margin: u32, remaining: u32 },
    // The leader is ahead by more holes than are left to play.
    Clinched { winner: Team, margin: u32, remaining: u32 },
    Finished { winner: Option<Team>, margin: u32 },
}

impl MatchState {
    pub fn describe(&self, rules: &MatchRules) -> String {
        match *self {
            MatchState::SetupIncomplete(SetupError::NotEnoughPlayers) => {
                format!("Setup incomplete: Requires {} players.", rules.total_players())
            }
            MatchState::SetupIncomplete(_) => "Setup incomplete.".to_owned(),
            MatchState::NotStarted => "Match not started".to_owned(),
            MatchState::InProgress { leader, margin, remaining } => {
                let standing = match leader {
                    Some(team) => format!("{} {} Up", rules.team_label(team), margin),
                    None => "All Square".to_owned(),
                };
                if remaining > 0 {
                    format!("{standing} with {remaining} to play")
                } else {
                    standing
                }
            }
            MatchState::Clinched { winner, margin, remaining } => {
                format!("{} wins {} & {}", rules.team_label(winner), margin, remaining)
            }
            MatchState::Finished { winner: None, .. } => "Match Tied".to_owned(),
            MatchState::Finished { winner: Some(team), margin } => {
                format!("{} wins {} Up", rules.team_label(team), margin)
            }
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, MatchState::Clinched { .. } | MatchState::Finished { .. })
    }
}


#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(into = "MatchStatusWire", from = "MatchStatusWire")]
pub struct MatchStatus {
    pub status: String,
    pub state: MatchState,
    pub wins: EnumMap<Team, u32>,
    pub ties: u32,
    // Holes with a result (won or tied), not holes with any score entered.
    pub holes_played: u32,
    // Sum of best ball net scores over all holes. A hole without a best ball counts as 0, so the
    // sum is only a real net score once every hole is complete. Saturates instead of overflowing.
    pub team_scores: EnumMap<Team, i32>,
}

impl MatchStatus {
    pub fn setup_incomplete(rules: &MatchRules, error: SetupError) -> Self {
        let state = MatchState::SetupIncomplete(error);
        MatchStatus {
            status: state.describe(rules),
            state,
            wins: enum_map! { _ => 0 },
            ties: 0,
            holes_played: 0,
            team_scores: enum_map! { _ => 0 },
        }
    }

    pub fn team_a_wins(&self) -> u32 { self.wins[Team::A] }
    pub fn team_b_wins(&self) -> u32 { self.wins[Team::B] }
    pub fn team_a_score(&self) -> i32 { self.team_scores[Team::A] }
    pub fn team_b_score(&self) -> i32 { self.team_scores[Team::B] }
}

// Serialized form: per-team values are flattened into `teamA*` / `teamB*` fields.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchStatusWire {
    status: String,
    state: MatchState,
    team_a_wins: u32,
    team_b_wins: u32,
    ties: u32,
    holes_played: u32,
    team_a_score: i32,
    team_b_score: i32,
}

impl From<MatchStatus> for MatchStatusWire {
    fn from(status: MatchStatus) -> Self {
        MatchStatusWire {
            team_a_wins: status.team_a_wins(),
            team_b_wins: status.team_b_wins(),
            team_a_score: status.team_a_score(),
            team_b_score: status.team_b_score(),
            status: status.status,
            state: status.state,
            ties: status.ties,
            holes_played: status.holes_played,
        }
    }
}

impl From<MatchStatusWire> for MatchStatus {
    fn from(wire: MatchStatusWire) -> Self {
        MatchStatus {
            status: wire.status,
            state: wire.state,
            wins: enum_map! { Team::A => wire.team_a_wins, Team::B => wire.team_b_wins },
            ties: wire.ties,
            holes_played: wire.holes_played,
            team_scores: enum_map! { Team::A => wire.team_a_score, Team::B => wire.team_b_score },
        }
    }
}

fn leader(wins: &EnumMap<Team, u32>) -> Option<Team> {
    match wins[Team::A].cmp(&wins[Team::B]) {
        Ordering::Greater => Some(Team::A),
        Ordering::Less => Some(Team::B),
        Ordering::Equal => None,
    }
}

pub fn match_state(wins: &EnumMap<Team, u32>, holes_played: u32, total_holes: u32) -> MatchState {
    let margin = wins[Team::A].abs_diff(wins[Team::B]);
    let remaining = total_holes.saturating_sub(holes_played);
    let leader = leader(wins);
    if holes_played == 0 {
        MatchState::NotStarted
    } else if let Some(winner) = leader.filter(|_| margin > remaining && holes_played < total_holes) {
        MatchState::Clinched { winner, margin, remaining }
    } else if holes_played >= total_holes {
        MatchState::Finished { winner: leader, margin }
    } else {
        MatchState::InProgress { leader, margin, remaining }
    }
}

// `total_holes` is the length of the match, which may be more than the number of hole results
// passed in when the caller only evaluated a prefix of the round.
pub fn match_status(
    hole_results: &[HoleResultDetails], total_holes: u32, rules: &MatchRules
) -> MatchStatus {
    let mut wins = enum_map! { _ => 0 };
    let mut ties = 0;
    let mut holes_played = 0;
    let mut team_scores: EnumMap<Team, i32> = enum_map! { _ => 0 };
    for hole in hole_results.iter().sorted_by_key(|h| h.hole_number) {
        if let Some(outcome) = hole.winning_team {
            holes_played += 1;
            match outcome {
                HoleOutcome::Won(team) => wins[team] += 1,
                HoleOutcome::Tie => ties += 1,
            }
        }
        for (team, result) in hole.team_results.iter() {
            team_scores[team] =
                team_scores[team].saturating_add(result.best_ball_net_score.unwrap_or(0));
        }
    }
    let state = match_state(&wins, holes_played, total_holes);
    MatchStatus {
        status: state.describe(rules),
        state,
        wins,
        ties,
        holes_played,
        team_scores,
    }
}
