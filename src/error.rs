use std::fmt;


// Why a gross score update was turned down. A rejected update never changes the scorecard.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScoreError {
    Negative,
    NotANumber,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Negative => write!(f, "gross score cannot be negative"),
            ScoreError::NotANumber => write!(f, "gross score must be a whole number"),
        }
    }
}

impl std::error::Error for ScoreError {}
