use serde::{Deserialize, Serialize};

use crate::handicap::receives_stroke;
use crate::hole::HoleInfo;
use crate::player::ConfiguredPlayer;


#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHoleResult {
    pub player_id: String,
    pub gross_score: Option<u32>,
    // Always false while the hole has no gross score.
    pub receives_stroke_on_hole: bool,
    pub net_score: Option<i32>,
}

impl PlayerHoleResult {
    pub fn is_played(&self) -> bool { self.gross_score.is_some() }
}

// Not clamped: a gross score of 0 with a stroke nets -1.
pub fn net_score(gross: u32, receives_stroke: bool) -> i32 {
    i32::try_from(gross).unwrap_or(i32::MAX) - i32::from(receives_stroke)
}

pub fn player_hole_result(
    player: &ConfiguredPlayer, hole: &HoleInfo, gross: Option<u32>
) -> PlayerHoleResult {
    let player_id = player.id().to_owned();
    match gross {
        None => PlayerHoleResult {
            player_id,
            gross_score: None,
            receives_stroke_on_hole: false,
            net_score: None,
        },
        Some(gross) => {
            let stroke = receives_stroke(player.strokes_received, hole);
            PlayerHoleResult {
                player_id,
                gross_score: Some(gross),
                receives_stroke_on_hole: stroke,
                net_score: Some(net_score(gross, stroke)),
            }
        }
    }
}
