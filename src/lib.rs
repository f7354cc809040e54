#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod error;
pub mod gross_scores;
pub mod handicap;
pub mod hole;
pub mod hole_result;
pub mod match_status;
pub mod net_score;
pub mod player;
pub mod rules;
pub mod scorecard;
pub mod setup;
pub mod test_util;
pub mod totals;

pub use error::ScoreError;
pub use gross_scores::GrossScores;
pub use hole::{HoleInfo, Nine, default_holes};
pub use hole_result::{HoleOutcome, HoleResultDetails, TeamHoleResult};
pub use match_status::{MatchState, MatchStatus};
pub use net_score::PlayerHoleResult;
pub use player::{ConfiguredPlayer, Player, PlayerUpdate, Team};
pub use rules::MatchRules;
pub use scorecard::{Scorecard, ScorecardSetup, ScorecardSummary};
pub use setup::SetupError;
pub use totals::{PlayerScoreRow, TeamTotals};
