// The scorecard owns the raw inputs of a match (roster, holes, gross scores) and keeps a fully
// derived summary next to them. Every mutation recomputes the summary from scratch before
// returning, so a stale summary is never observable. The data set is tiny (a handful of players
// times eighteen holes), so there is no incremental update logic.

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::gross_scores::GrossScores;
use crate::handicap::{configure_players, lowest_course_handicap};
use crate::hole::{HoleInfo, default_holes};
use crate::hole_result::{HoleResultDetails, evaluate_holes};
use crate::match_status::{MatchStatus, match_status};
use crate::player::{ConfiguredPlayer, Player, PlayerUpdate, Team};
use crate::rules::MatchRules;
use crate::setup::{SetupError, verify_setup};
use crate::totals::{PlayerScoreRow, TeamTotals, player_rows, team_totals};


// Initial configuration. `Scorecard::reset_scorecard` goes back to the players, holes and rules
// given here.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScorecardSetup {
    pub players: Vec<Player>,
    pub holes: Vec<HoleInfo>,
    pub gross_scores: GrossScores,
    pub rules: MatchRules,
}

impl Default for ScorecardSetup {
    fn default() -> Self {
        ScorecardSetup {
            players: Vec::new(),
            holes: default_holes(),
            gross_scores: GrossScores::new(),
            rules: MatchRules::default(),
        }
    }
}


// Everything derived from the scorecard inputs.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardSummary {
    pub setup_error: Option<SetupError>,
    // Zero until setup is complete.
    pub lowest_course_handicap: u32,
    pub configured_players: Vec<ConfiguredPlayer>,
    // Empty until setup is complete.
    pub hole_results: Vec<HoleResultDetails>,
    pub match_status: MatchStatus,
    pub team_totals: EnumMap<Team, TeamTotals>,
    // Empty until setup is complete.
    pub player_rows: Vec<PlayerScoreRow>,
}

impl ScorecardSummary {
    pub fn compute(
        rules: &MatchRules, players: &[Player], holes: &[HoleInfo], scores: &GrossScores
    ) -> Self {
        let setup_error = verify_setup(rules, players, holes).err();
        let setup_complete = setup_error.is_none();
        let configured_players = configure_players(players, holes, setup_complete);
        let (lowest_course_handicap, hole_results, match_status) = match setup_error {
            None => {
                let hole_results = evaluate_holes(holes, &configured_players, scores);
                // Both values fit easily: the match has at most a few dozen holes.
                let total_holes = u32::try_from(holes.len()).unwrap_or(u32::MAX);
                let status = match_status(&hole_results, total_holes, rules);
                (lowest_course_handicap(players), hole_results, status)
            }
            Some(error) => (0, Vec::new(), MatchStatus::setup_incomplete(rules, error)),
        };
        let team_totals = team_totals(&hole_results);
        let player_rows = if setup_complete {
            player_rows(&configured_players, &hole_results)
        } else {
            Vec::new()
        };
        ScorecardSummary {
            setup_error,
            lowest_course_handicap,
            configured_players,
            hole_results,
            match_status,
            team_totals,
            player_rows,
        }
    }

    pub fn is_setup_complete(&self) -> bool { self.setup_error.is_none() }
}


#[derive(Clone, Debug)]
pub struct Scorecard {
    initial: ScorecardSetup,
    players: Vec<Player>,
    holes: Vec<HoleInfo>,
    gross_scores: GrossScores,
    rules: MatchRules,
    summary: ScorecardSummary,
}

impl Scorecard {
    pub fn new(setup: ScorecardSetup) -> Self {
        let summary = ScorecardSummary::compute(
            &setup.rules, &setup.players, &setup.holes, &setup.gross_scores
        );
        Scorecard {
            players: setup.players.clone(),
            holes: setup.holes.clone(),
            gross_scores: setup.gross_scores.clone(),
            rules: setup.rules.clone(),
            initial: setup,
            summary,
        }
    }

    pub fn with_players_and_holes(players: Vec<Player>, holes: Vec<HoleInfo>) -> Self {
        Self::new(ScorecardSetup { players, holes, ..ScorecardSetup::default() })
    }

    // Must be called after every change to the inputs.
    fn recompute(&mut self) {
        self.summary = ScorecardSummary::compute(
            &self.rules, &self.players, &self.holes, &self.gross_scores
        );
        log::debug!(
            "Scorecard recomputed: {} player(s), {} hole(s), {} score(s): {}",
            self.players.len(), self.holes.len(), self.gross_scores.len(), self.summary.match_status.status
        );
    }

    // Replaces the roster. Scores are cleared since they may belong to players who are gone.
    pub fn set_players(&mut self, players: Vec<Player>) {
        self.players = players;
        self.gross_scores.clear();
        self.recompute();
    }

    // Replaces the course. Scores are cleared since hole numbers may now mean different holes.
    pub fn set_hole_data(&mut self, holes: Vec<HoleInfo>) {
        self.holes = holes;
        self.gross_scores.clear();
        self.recompute();
    }

    // Edits name and/or course handicap of one player. Scores are kept, strokes are reallocated.
    // Unknown player IDs are ignored.
    pub fn update_player_info(&mut self, player_id: &str, update: PlayerUpdate) {
        let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) else {
            log::debug!("Ignoring update for unknown player {player_id:?}");
            return;
        };
        player.apply_update(update);
        self.recompute();
    }

    // Records or overwrites a gross score. Rejected values leave the scorecard untouched, so
    // callers that don't care about the reason can simply drop the error.
    pub fn update_score(
        &mut self, player_id: &str, hole_number: u32, gross: i32
    ) -> Result<(), ScoreError> {
        let Ok(gross) = u32::try_from(gross) else {
            log::debug!("Rejected gross score {gross} for {player_id:?} on hole {hole_number}");
            return Err(ScoreError::Negative);
        };
        self.gross_scores.set(player_id, hole_number, gross);
        self.recompute();
        Ok(())
    }

    // Same as `update_score`, but takes the score as typed by a user.
    pub fn update_score_str(
        &mut self, player_id: &str, hole_number: u32, gross: &str
    ) -> Result<(), ScoreError> {
        let Ok(gross) = gross.trim().parse::<i32>() else {
            log::debug!("Rejected gross score {gross:?} for {player_id:?} on hole {hole_number}");
            return Err(ScoreError::NotANumber);
        };
        self.update_score(player_id, hole_number, gross)
    }

    pub fn clear_score(&mut self, player_id: &str, hole_number: u32) {
        if self.gross_scores.remove(player_id, hole_number).is_some() {
            self.recompute();
        }
    }

    pub fn clear_scores(&mut self) {
        self.gross_scores.clear();
        self.recompute();
    }

    // Initial gross scores are not restored: a reset always starts an empty round.
    pub fn reset_scorecard(&mut self) {
        self.players = self.initial.players.clone();
        self.holes = self.initial.holes.clone();
        self.rules = self.initial.rules.clone();
        self.gross_scores.clear();
        self.recompute();
    }

    pub fn players(&self) -> &[Player] { &self.players }
    pub fn holes(&self) -> &[HoleInfo] { &self.holes }
    pub fn rules(&self) -> &MatchRules { &self.rules }
    pub fn gross_scores(&self) -> &GrossScores { &self.gross_scores }
    pub fn gross_score(&self, player_id: &str, hole_number: u32) -> Option<u32> {
        self.gross_scores.get(player_id, hole_number)
    }

    pub fn summary(&self) -> &ScorecardSummary { &self.summary }
    pub fn is_setup_complete(&self) -> bool { self.summary.is_setup_complete() }
    pub fn setup_error(&self) -> Option<SetupError> { self.summary.setup_error }
    pub fn lowest_course_handicap(&self) -> u32 { self.summary.lowest_course_handicap }
    pub fn configured_players(&self) -> &[ConfiguredPlayer] { &self.summary.configured_players }
    pub fn configured_player(&self, player_id: &str) -> Option<&ConfiguredPlayer> {
        self.summary.configured_players.iter().find(|p| p.id() == player_id)
    }
    pub fn hole_results(&self) -> &[HoleResultDetails] { &self.summary.hole_results }
    pub fn hole_result(&self, hole_number: u32) -> Option<&HoleResultDetails> {
        self.summary.hole_results.iter().find(|h| h.hole_number == hole_number)
    }
    pub fn match_status(&self) -> &MatchStatus { &self.summary.match_status }
    pub fn team_totals(&self, team: Team) -> TeamTotals { self.summary.team_totals[team] }
    pub fn player_rows(&self) -> &[PlayerScoreRow] { &self.summary.player_rows }
}

impl Default for Scorecard {
    fn default() -> Self { Self::new(ScorecardSetup::default()) }
}
