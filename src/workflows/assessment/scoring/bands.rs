use serde::{Deserialize, Serialize};

/// Lower bound of the green band on the 0-100 scale.
pub const GOOD_THRESHOLD: u8 = 75;
/// Lower bound of the amber band on the 0-100 scale.
pub const MIXED_THRESHOLD: u8 = 50;

/// Traffic-light band shared by domain and overall scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Good,
    Mixed,
    NeedsWork,
}

impl Band {
    pub const fn from_score(score: u8) -> Self {
        if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= MIXED_THRESHOLD {
            Self::Mixed
        } else {
            Self::NeedsWork
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Mixed => "Mixed",
            Self::NeedsWork => "Needs work",
        }
    }

    /// ASCII label used by text exports.
    pub const fn export_label(self) -> &'static str {
        match self {
            Self::Good => "GOOD",
            Self::Mixed => "MIXED",
            Self::NeedsWork => "NEEDS WORK",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Good => Tone::Good,
            Self::Mixed => Tone::Warn,
            Self::NeedsWork => Tone::Bad,
        }
    }

    pub const fn takeaway(self) -> &'static str {
        match self {
            Self::Good => "Solid foundations in place — keep reviewing quarterly.",
            Self::Mixed => "Some practices exist — standardize and close the obvious gaps.",
            Self::NeedsWork => "High exposure — establish minimum controls for this area first.",
        }
    }
}

/// Colour class for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Good,
    Warn,
    Bad,
}

impl Tone {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warn => "warn",
            Self::Bad => "bad",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Good => "green",
            Self::Warn => "amber",
            Self::Bad => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        assert_eq!(Band::from_score(100), Band::Good);
        assert_eq!(Band::from_score(75), Band::Good);
        assert_eq!(Band::from_score(74), Band::Mixed);
        assert_eq!(Band::from_score(50), Band::Mixed);
        assert_eq!(Band::from_score(49), Band::NeedsWork);
        assert_eq!(Band::from_score(0), Band::NeedsWork);
    }

    #[test]
    fn tones_follow_bands() {
        assert_eq!(Band::Good.tone().color(), "green");
        assert_eq!(Band::Mixed.tone().as_str(), "warn");
        assert_eq!(Band::NeedsWork.tone().color(), "red");
    }
}
