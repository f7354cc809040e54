use crate::match_file::read_match_file;
use crate::tui;


pub struct ScoreConfig {
    pub match_file: String,
    pub json: bool,
}

pub fn run(config: ScoreConfig) -> anyhow::Result<()> {
    let scorecard = read_match_file(&config.match_file)?.into_scorecard();
    log::info!(
        "Loaded {} player(s), {} hole(s), {} score(s) from {}",
        scorecard.players().len(),
        scorecard.holes().len(),
        scorecard.gross_scores().len(),
        config.match_file
    );
    if config.json {
        println!("{}", serde_json::to_string_pretty(scorecard.summary())?);
    } else {
        print!("{}", tui::render_scorecard(&scorecard));
    }
    Ok(())
}
