// Handicap allocation. Every player receives strokes relative to the best player in the match,
// one stroke per hole, starting from the hardest hole (stroke index 1).
//
// Improvement potential: Support a second stroke per hole when the handicap difference exceeds
//   the number of holes. Currently a player can get at most one stroke on any hole.

use crate::hole::HoleInfo;
use crate::player::{ConfiguredPlayer, Player};


pub fn lowest_course_handicap<'a>(players: impl IntoIterator<Item = &'a Player>) -> u32 {
    players.into_iter().map(|p| p.course_handicap).min().unwrap_or(0)
}

pub fn receives_stroke(strokes_received: u32, hole: &HoleInfo) -> bool {
    strokes_received >= hole.handicap_rating
}

pub fn handicap_strokes(strokes_received: u32, holes: &[HoleInfo]) -> Vec<u8> {
    holes.iter().map(|hole| u8::from(receives_stroke(strokes_received, hole))).collect()
}

// When setup is incomplete nobody receives strokes: relative handicaps are meaningless until the
// whole roster is known.
pub fn configure_players(
    players: &[Player], holes: &[HoleInfo], setup_complete: bool
) -> Vec<ConfiguredPlayer> {
    let lowest = lowest_course_handicap(players);
    players
        .iter()
        .map(|player| {
            let strokes_received =
                if setup_complete { player.course_handicap - lowest } else { 0 };
            let handicap_strokes = if setup_complete {
                handicap_strokes(strokes_received, holes)
            } else {
                vec![0; holes.len()]
            };
            ConfiguredPlayer {
                player: player.clone(),
                strokes_received,
                handicap_strokes,
            }
        })
        .collect()
}
