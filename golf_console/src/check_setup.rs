use enum_map::EnumMap;
use itertools::Itertools;
use strum::IntoEnumIterator;

use golf_match::setup::num_players_per_team;
use golf_match::{MatchRules, Scorecard, Team};

use crate::match_file::read_match_file;


fn roster_summary(rules: &MatchRules, players_per_team: &EnumMap<Team, usize>) -> String {
    Team::iter()
        .map(|team| format!("{}: {}/{}", rules.team_label(team), players_per_team[team], rules.players_per_team))
        .join(", ")
}

pub fn describe_setup(scorecard: &Scorecard) -> Result<(), String> {
    let Some(error) = scorecard.setup_error() else {
        return Ok(());
    };
    let players_per_team = num_players_per_team(scorecard.players().iter());
    Err(format!("{} ({})", error, roster_summary(scorecard.rules(), &players_per_team)))
}

pub fn run(match_file: &str) -> anyhow::Result<()> {
    let scorecard = read_match_file(match_file)?.into_scorecard();
    match describe_setup(&scorecard) {
        Ok(()) => {
            println!("OK");
            Ok(())
        }
        Err(message) => Err(anyhow::anyhow!("Setup incomplete in {match_file}: {message}")),
    }
}
