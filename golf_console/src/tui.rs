// Plain text scorecard. Cells are padded before styling, so column widths do not depend on
// whether the terminal supports colors.
//
// Improvement potential: Wrap the table for narrow terminals (an 18-hole card is ~100 columns).

use console::Style;
use itertools::Itertools;
use strum::IntoEnumIterator;

use golf_match::{HoleOutcome, HoleResultDetails, PlayerScoreRow, Scorecard, Team};


const CELL_WIDTH: usize = 4;

fn pad(text: &str) -> String { format!("{:>width$}", text, width = CELL_WIDTH) }

fn optional_cell<T: ToString>(value: Option<T>) -> String {
    pad(&value.map_or_else(|| "-".to_owned(), |v| v.to_string()))
}

fn render_row(label: &str, label_width: usize, cells: impl IntoIterator<Item = String>) -> String {
    format!("{:<label_width$}{}", label, cells.into_iter().join(""))
}

fn render_player_cells(row: &PlayerScoreRow) -> Vec<String> {
    let holes = row
        .gross_scores
        .iter()
        .zip_eq(&row.handicap_strokes)
        .zip_eq(&row.is_best_ball)
        .map(|((gross, &stroke), &is_best_ball)| {
            let marker = if stroke > 0 { "*" } else { "" };
            let text = gross.map_or_else(|| "-".to_owned(), |g| format!("{g}{marker}"));
            let cell = pad(&text);
            if is_best_ball { Style::new().bold().apply_to(cell).to_string() } else { cell }
        });
    let totals = [pad(""), pad(""), pad(&row.gross_total().to_string())];
    holes.chain(totals).collect()
}

fn render_team_cells(scorecard: &Scorecard, team: Team) -> Vec<String> {
    let totals = scorecard.team_totals(team);
    let holes = scorecard.hole_results().iter().map(|hole| optional_cell(hole.best_ball(team)));
    let totals = [totals.front, totals.back, totals.total].map(|sum| pad(&sum.to_string()));
    holes.chain(totals).collect()
}

fn render_outcome(hole: &HoleResultDetails) -> String {
    match hole.winning_team {
        None => pad(""),
        Some(HoleOutcome::Tie) => pad("="),
        Some(HoleOutcome::Won(team)) => {
            let cell = pad(&format!("{team:?}"));
            Style::new().green().apply_to(cell).to_string()
        }
    }
}

pub fn render_scorecard(scorecard: &Scorecard) -> String {
    let status = Style::new().bold().apply_to(&scorecard.match_status().status).to_string();
    if !scorecard.is_setup_complete() {
        return format!("{status}\n");
    }
    let rules = scorecard.rules();
    let label_width = scorecard
        .player_rows()
        .iter()
        .map(|row| row.player_name.len())
        .chain(Team::iter().map(|team| rules.team_label(team).len()))
        .chain(["Result".len()])
        .max()
        .unwrap_or(0)
        + 2;

    let mut lines = Vec::new();
    let totals_header = ["Out", "In", "Tot"].map(pad);
    let hole_numbers = scorecard.holes().iter().map(|h| pad(&h.hole_number.to_string()));
    lines.push(render_row("Hole", label_width, hole_numbers.chain(totals_header)));
    if scorecard.holes().iter().any(|h| h.par.is_some()) {
        let pars = scorecard.holes().iter().map(|h| optional_cell(h.par));
        lines.push(render_row("Par", label_width, pars));
    }
    let ratings = scorecard.holes().iter().map(|h| pad(&h.handicap_rating.to_string()));
    lines.push(render_row("Index", label_width, ratings));
    for team in Team::iter() {
        for row in scorecard.player_rows().iter().filter(|row| row.team == team) {
            lines.push(render_row(&row.player_name, label_width, render_player_cells(row)));
        }
        lines.push(render_row(rules.team_label(team), label_width, render_team_cells(scorecard, team)));
    }
    let outcomes = scorecard.hole_results().iter().map(render_outcome);
    lines.push(render_row("Result", label_width, outcomes));
    lines.push(String::new());
    lines.push(status);
    lines.iter().map(|line| format!("{}\n", line.trim_end())).collect()
}
