use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;


pub const DEFAULT_NUM_HOLES: u32 = 18;
pub const HOLES_PER_NINE: usize = 9;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleInfo {
    pub hole_number: u32,
    // Stroke index: 1 is the hardest hole. Expected to be distinct within a course, but this is
    // not enforced.
    pub handicap_rating: u32,
    // Informational only, scoring never looks at par.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par: Option<u32>,
}

impl HoleInfo {
    pub fn new(hole_number: u32, handicap_rating: u32) -> Self {
        HoleInfo { hole_number, handicap_rating, par: None }
    }

    pub fn with_par(self, par: u32) -> Self {
        HoleInfo { par: Some(par), ..self }
    }
}

// Placeholder course used when no real hole data is given: the stroke index of every hole equals
// its number.
pub fn default_holes() -> Vec<HoleInfo> {
    (1..=DEFAULT_NUM_HOLES).map(|n| HoleInfo::new(n, n)).collect()
}


#[derive(Clone, Copy, PartialEq, Eq, Debug, Enum, EnumIter, Serialize, Deserialize)]
pub enum Nine {
    Front,
    Back,
}

impl Nine {
    // `position` is the zero-based index of the hole on the scorecard, not the hole number.
    pub fn for_position(position: usize) -> Self {
        if position < HOLES_PER_NINE { Nine::Front } else { Nine::Back }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_course() {
        let holes = default_holes();
        assert_eq!(holes.len(), 18);
        assert_eq!(holes[0], HoleInfo::new(1, 1));
        assert_eq!(holes[17], HoleInfo::new(18, 18));
        assert!(holes.iter().all(|h| h.par.is_none()));
    }

    #[test]
    fn nines() {
        assert_eq!(Nine::for_position(0), Nine::Front);
        assert_eq!(Nine::for_position(8), Nine::Front);
        assert_eq!(Nine::for_position(9), Nine::Back);
        assert_eq!(Nine::for_position(17), Nine::Back);
    }
}
