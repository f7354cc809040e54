// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use golf_match::test_util::{play_hole_with_winner, sample_players};
use golf_match::{HoleInfo, Scorecard, Team, default_holes};


#[allow(dead_code)]
pub fn sample_scorecard_18() -> Scorecard {
    Scorecard::with_players_and_holes(sample_players(), default_holes())
}

#[allow(dead_code)]
pub fn sample_scorecard(num_holes: u32) -> Scorecard {
    let holes = (1..=num_holes).map(|n| HoleInfo::new(n, n)).collect();
    Scorecard::with_players_and_holes(sample_players(), holes)
}

// Plays holes in order starting from hole 1. One character per hole:
//   "A" / "B" - the team wins the hole,
//   "=" - the hole is halved,
//   "." - the hole is skipped (no scores entered).
// Whitespace is ignored.
#[allow(dead_code)]
pub fn replay_outcomes(scorecard: &mut Scorecard, log: &str) {
    let outcomes = log.chars().filter(|ch| !ch.is_whitespace());
    for (hole_number, notation) in (1..).zip(outcomes) {
        let winner = match notation {
            'A' => Some(Team::A),
            'B' => Some(Team::B),
            '=' => None,
            '.' => continue,
            _ => panic!("Unexpected hole outcome notation: {}", notation),
        };
        play_hole_with_winner(scorecard, hole_number, winner);
    }
}
