// Legend for fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod tui;

mod check_setup;
mod match_file;
mod score_main;

use clap::{Command, arg};


fn main() -> anyhow::Result<()> {
    // Logs go to stderr: stdout is reserved for the scorecard itself, which may be JSON.
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Best ball")
        .version(clap::crate_version!())
        .about("Two-man best ball net match play scorer")
        .subcommand_required(true)
        .subcommand(
            Command::new("score")
                .about("Scores a match and prints the scorecard")
                .arg(arg!(<match_file> "Path to the match file: yaml-serialized MatchFile."))
                .arg(arg!(--"json" "Print the full derived scorecard as JSON instead of a table.")),
        )
        .subcommand(
            Command::new("check-setup")
                .about("Verifies whether a match file describes a complete setup.")
                .arg(arg!(<match_file> "Path to the match file: yaml-serialized MatchFile.")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("score", sub_matches)) => score_main::run(score_main::ScoreConfig {
            match_file: required_arg(sub_matches, "match_file")?,
            json: sub_matches.get_flag("json"),
        }),
        Some(("check-setup", sub_matches)) => {
            check_setup::run(&required_arg(sub_matches, "match_file")?)
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}

fn required_arg(matches: &clap::ArgMatches, name: &str) -> anyhow::Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Missing argument <{name}>"))
}
