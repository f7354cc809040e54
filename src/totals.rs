use enum_map::{EnumMap, enum_map};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::hole::Nine;
use crate::hole_result::HoleResultDetails;
use crate::player::{ConfiguredPlayer, Team};


// Best ball sums per nine. Holes without a best ball are skipped. Sums saturate.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TeamTotals {
    pub front: i32,
    pub back: i32,
    pub total: i32,
}

impl TeamTotals {
    pub fn nine(&self, nine: Nine) -> i32 {
        match nine {
            Nine::Front => self.front,
            Nine::Back => self.back,
        }
    }
}

// Nines are determined by position in `hole_results`, which is expected to be sorted by hole
// number. Anything after the ninth hole is counted towards the back nine.
pub fn team_totals(hole_results: &[HoleResultDetails]) -> EnumMap<Team, TeamTotals> {
    let mut totals: EnumMap<Team, TeamTotals> = enum_map! { _ => TeamTotals::default() };
    for (position, hole) in hole_results.iter().enumerate() {
        for (team, result) in hole.team_results.iter() {
            let Some(best_ball) = result.best_ball_net_score else {
                continue;
            };
            let entry = &mut totals[team];
            let nine = match Nine::for_position(position) {
                Nine::Front => &mut entry.front,
                Nine::Back => &mut entry.back,
            };
            *nine = nine.saturating_add(best_ball);
            entry.total = entry.total.saturating_add(best_ball);
        }
    }
    totals
}


// One scorecard line for a player. All vectors are indexed by hole position.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreRow {
    pub player_id: String,
    pub player_name: String,
    pub team: Team,
    pub gross_scores: Vec<Option<u32>>,
    pub net_scores: Vec<Option<i32>>,
    // True where the player's net score is the one that counts for the team.
    pub is_best_ball: Vec<bool>,
    pub handicap_strokes: Vec<u8>,
}

impl PlayerScoreRow {
    pub fn gross_total(&self) -> u32 {
        self.gross_scores.iter().flatten().fold(0u32, |sum, &g| sum.saturating_add(g))
    }
    pub fn net_total(&self) -> i32 {
        self.net_scores.iter().flatten().fold(0i32, |sum, &n| sum.saturating_add(n))
    }
}

pub fn player_rows(
    players: &[ConfiguredPlayer], hole_results: &[HoleResultDetails]
) -> Vec<PlayerScoreRow> {
    players
        .iter()
        .map(|player| {
            let team = player.team();
            let (gross_scores, net_scores, is_best_ball): (Vec<_>, Vec<_>, Vec<_>) = hole_results
                .iter()
                .map(|hole| {
                    let team_result = hole.team_result(team);
                    let result = team_result.player_results.iter().find(|r| r.player_id == player.id());
                    let gross = result.and_then(|r| r.gross_score);
                    let net = result.and_then(|r| r.net_score);
                    let best = net.is_some() && net == team_result.best_ball_net_score;
                    (gross, net, best)
                })
                .multiunzip();
            PlayerScoreRow {
                player_id: player.id().to_owned(),
                player_name: player.name().to_owned(),
                team,
                gross_scores,
                net_scores,
                is_best_ball,
                handicap_strokes: player.handicap_strokes.clone(),
            }
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::gross_scores::GrossScores;
    use crate::handicap::configure_players;
    use crate::hole::default_holes;
    use crate::hole_result::evaluate_holes;
    use crate::test_util::sample_players;

    #[test]
    fn nines_and_total() {
        let holes = default_holes();
        let players = configure_players(&sample_players(), &holes, true);
        // p3 plays every hole in 4; p1 plays only hole 1 and hole 10 in 5.
        let mut scores: GrossScores = (1..=18).map(|hole| ("p3", hole, 4)).collect();
        scores.set("p1", 1, 5);
        scores.set("p1", 10, 5);
        let results = evaluate_holes(&holes, &players, &scores);
        let totals = team_totals(&results);
        // p1 gets strokes on stroke indices 1 and 2 only.
        assert_eq!(totals[Team::A], TeamTotals { front: 4, back: 5, total: 9 });
        assert_eq!(totals[Team::B], TeamTotals { front: 36, back: 36, total: 72 });
        assert_eq!(totals[Team::B].nine(Nine::Back), 36);
    }

    #[test]
    fn rows_mark_best_ball() {
        let holes = default_holes();
        let players = configure_players(&sample_players(), &holes, true);
        let scores: GrossScores =
            [("p1", 1, 5), ("p2", 1, 6), ("p1", 2, 6), ("p2", 2, 5)].into_iter().collect();
        let results = evaluate_holes(&holes, &players, &scores);
        let rows = player_rows(&players, &results);
        assert_eq!(rows.len(), 4);

        let p1 = &rows[0];
        assert_eq!(p1.player_id, "p1");
        assert_eq!(p1.gross_scores[..3].to_vec(), vec![Some(5), Some(6), None]);
        assert_eq!(p1.net_scores[..3].to_vec(), vec![Some(4), Some(5), None]);
        let p2 = &rows[1];
        assert_eq!(p2.net_scores[..3].to_vec(), vec![Some(5), Some(4), None]);
        assert_eq!(p1.is_best_ball[..3].to_vec(), vec![true, false, false]);
        assert_eq!(p2.is_best_ball[..3].to_vec(), vec![false, true, false]);
        assert_eq!(p1.gross_total(), 11);
        assert_eq!(p1.net_total(), 9);

        // Unplayed holes are never marked, even though neither teammate has a score there.
        let p3 = &rows[2];
        assert!(p3.is_best_ball.iter().all(|&b| !b));
        assert_eq!(p3.handicap_strokes, vec![0; 18]);
    }

    #[test]
    fn tied_teammates_both_count() {
        let holes = default_holes();
        let players = configure_players(&sample_players(), &holes, true);
        // Both nets are 4 on hole 1.
        let scores: GrossScores = [("p1", 1, 5), ("p2", 1, 5)].into_iter().collect();
        let results = evaluate_holes(&holes, &players, &scores);
        let rows = player_rows(&players, &results);
        assert!(rows[0].is_best_ball[0]);
        assert!(rows[1].is_best_ball[0]);
    }
}
