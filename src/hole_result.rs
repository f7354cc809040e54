use std::cmp::Ordering;

use enum_map::EnumMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::gross_scores::GrossScores;
use crate::hole::HoleInfo;
use crate::net_score::{PlayerHoleResult, player_hole_result};
use crate::player::{ConfiguredPlayer, Team};


// Serialized as "A", "B" or "Tie".
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(into = "OutcomeWire", from = "OutcomeWire")]
pub enum HoleOutcome {
    Won(Team),
    Tie,
}

#[derive(Serialize, Deserialize)]
enum OutcomeWire {
    A,
    B,
    Tie,
}

impl From<HoleOutcome> for OutcomeWire {
    fn from(outcome: HoleOutcome) -> Self {
        match outcome {
            HoleOutcome::Won(Team::A) => OutcomeWire::A,
            HoleOutcome::Won(Team::B) => OutcomeWire::B,
            HoleOutcome::Tie => OutcomeWire::Tie,
        }
    }
}

impl From<OutcomeWire> for HoleOutcome {
    fn from(wire: OutcomeWire) -> Self {
        match wire {
            OutcomeWire::A => HoleOutcome::Won(Team::A),
            OutcomeWire::B => HoleOutcome::Won(Team::B),
            OutcomeWire::Tie => HoleOutcome::Tie,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamHoleResult {
    pub team: Team,
    pub player_results: Vec<PlayerHoleResult>,
    // Lowest net score among the team's players who finished the hole.
    pub best_ball_net_score: Option<i32>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(into = "HoleResultWire", from = "HoleResultWire")]
pub struct HoleResultDetails {
    pub hole_number: u32,
    pub hole_info: HoleInfo,
    pub team_results: EnumMap<Team, TeamHoleResult>,
    // None until both teams have a best ball.
    pub winning_team: Option<HoleOutcome>,
}

impl HoleResultDetails {
    pub fn team_result(&self, team: Team) -> &TeamHoleResult { &self.team_results[team] }
    pub fn best_ball(&self, team: Team) -> Option<i32> { self.team_results[team].best_ball_net_score }
    pub fn is_decided(&self) -> bool { self.winning_team.is_some() }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HoleResultWire {
    hole_number: u32,
    hole_info: HoleInfo,
    team_a_result: TeamHoleResult,
    team_b_result: TeamHoleResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    winning_team: Option<HoleOutcome>,
}

impl From<HoleResultDetails> for HoleResultWire {
    fn from(details: HoleResultDetails) -> Self {
        HoleResultWire {
            hole_number: details.hole_number,
            hole_info: details.hole_info,
            team_a_result: details.team_results[Team::A].clone(),
            team_b_result: details.team_results[Team::B].clone(),
            winning_team: details.winning_team,
        }
    }
}

impl From<HoleResultWire> for HoleResultDetails {
    fn from(wire: HoleResultWire) -> Self {
        HoleResultDetails {
            hole_number: wire.hole_number,
            hole_info: wire.hole_info,
            team_results: EnumMap::from_array([wire.team_a_result, wire.team_b_result]),
            winning_team: wire.winning_team,
        }
    }
}

pub fn best_ball(results: &[PlayerHoleResult]) -> Option<i32> {
    results.iter().filter_map(|r| r.net_score).min()
}

pub fn hole_outcome(best_balls: EnumMap<Team, Option<i32>>) -> Option<HoleOutcome> {
    let (Some(a), Some(b)) = (best_balls[Team::A], best_balls[Team::B]) else {
        return None;
    };
    Some(match a.cmp(&b) {
        Ordering::Less => HoleOutcome::Won(Team::A),
        Ordering::Greater => HoleOutcome::Won(Team::B),
        Ordering::Equal => HoleOutcome::Tie,
    })
}

// Holes are independent of each other: only the players' strokes received and the scores on this
// very hole matter.
pub fn evaluate_hole(
    hole: &HoleInfo, players: &[ConfiguredPlayer], scores: &GrossScores
) -> HoleResultDetails {
    let team_results = EnumMap::from_fn(|team| {
        let player_results = players
            .iter()
            .filter(|p| p.team() == team)
            .map(|p| player_hole_result(p, hole, scores.get(p.id(), hole.hole_number)))
            .collect_vec();
        let best_ball_net_score = best_ball(&player_results);
        TeamHoleResult { team, player_results, best_ball_net_score }
    });
    let winning_team =
        hole_outcome(EnumMap::from_fn(|team| team_results[team].best_ball_net_score));
    HoleResultDetails {
        hole_number: hole.hole_number,
        hole_info: *hole,
        team_results,
        winning_team,
    }
}

// Results are ordered by hole number regardless of the order of `holes`.
pub fn evaluate_holes(
    holes: &[HoleInfo], players: &[ConfiguredPlayer], scores: &GrossScores
) -> Vec<HoleResultDetails> {
    holes
        .iter()
        .sorted_by_key(|hole| hole.hole_number)
        .map(|hole| evaluate_hole(hole, players, scores))
        .collect()
}
