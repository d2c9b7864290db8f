use serde::{Deserialize, Serialize};

use super::membership::DegreeTriple;

const DOMINANT: f64 = 0.5;

/// Threshold verdict read straight off the degree triples, without defuzzifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningVerdict {
    Eligible,
    NotEligible,
    UnderConsideration,
}

impl ScreeningVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            ScreeningVerdict::Eligible => "eligible",
            ScreeningVerdict::NotEligible => "not eligible",
            ScreeningVerdict::UnderConsideration => "under consideration",
        }
    }
}

/// Strong credit with a light debt load passes; weak credit or a heavy debt load fails;
/// anything else is left for consideration.
pub fn quick_screen(credit: &DegreeTriple, debt_ratio: &DegreeTriple) -> ScreeningVerdict {
    if credit.high > DOMINANT && debt_ratio.low > DOMINANT {
        ScreeningVerdict::Eligible
    } else if credit.low > DOMINANT || debt_ratio.high > DOMINANT {
        ScreeningVerdict::NotEligible
    } else {
        ScreeningVerdict::UnderConsideration
    }
}
