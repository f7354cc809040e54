// Test utilities that cannot be moved to the "tests" folder, because unit tests in the library
// and the console app tests use them too.

use itertools::Itertools;

use crate::handicap::receives_stroke;
use crate::hole::HoleInfo;
use crate::player::{Player, Team};
use crate::scorecard::Scorecard;


// Lowest handicap is 8 (p3), so strokes received are p1: 2, p2: 7, p3: 0, p4: 4.
pub fn sample_players() -> Vec<Player> {
    vec![
        Player::new("p1", "Player A1", 10, Team::A),
        Player::new("p2", "Player A2", 15, Team::A),
        Player::new("p3", "Player B1", 8, Team::B),
        Player::new("p4", "Player B2", 12, Team::B),
    ]
}

// A three-hole match: hole 1 is the hardest, hole 2 the easiest.
pub fn sample_holes() -> Vec<HoleInfo> {
    vec![
        HoleInfo::new(1, 1),
        HoleInfo::new(2, 3),
        HoleInfo::new(3, 2),
    ]
}

// Enters gross scores for all sample players on one hole, in `sample_players` order.
pub fn play_hole(scorecard: &mut Scorecard, hole_number: u32, gross: [i32; 4]) {
    for (player_id, gross) in ["p1", "p2", "p3", "p4"].into_iter().zip(gross) {
        scorecard.update_score(player_id, hole_number, gross).unwrap();
    }
}

// Enters gross scores for every configured player so that the hole ends with the given result
// after handicap strokes: the winners net 3 and the losers net 6, or everybody nets 4 when
// `winner` is `None`.
pub fn play_hole_with_winner(scorecard: &mut Scorecard, hole_number: u32, winner: Option<Team>) {
    let hole = *scorecard
        .holes()
        .iter()
        .find(|h| h.hole_number == hole_number)
        .unwrap_or_else(|| panic!("No hole {hole_number} on the scorecard"));
    let entries = scorecard
        .configured_players()
        .iter()
        .map(|p| {
            let net = match winner {
                Some(team) if team == p.team() => 3,
                Some(_) => 6,
                None => 4,
            };
            let stroke = receives_stroke(p.strokes_received, &hole);
            (p.id().to_owned(), net + i32::from(stroke))
        })
        .collect_vec();
    for (player_id, gross) in entries {
        scorecard.update_score(&player_id, hole_number, gross).unwrap();
    }
}
