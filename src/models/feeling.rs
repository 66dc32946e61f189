use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subjective feeling recorded for a completed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feeling {
    Awful,
    Bad,
    Okay,
    Good,
    Great,
}

impl Feeling {
    /// Glyph shown in the exported spreadsheet.
    pub fn glyph(&self) -> &'static str {
        match self {
            Feeling::Awful => "😩",
            Feeling::Bad => "😟",
            Feeling::Okay => "😐",
            Feeling::Good => "🙂",
            Feeling::Great => "🤩",
        }
    }
}

impl fmt::Display for Feeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feeling::Awful => write!(f, "awful"),
            Feeling::Bad => write!(f, "bad"),
            Feeling::Okay => write!(f, "okay"),
            Feeling::Good => write!(f, "good"),
            Feeling::Great => write!(f, "great"),
        }
    }
}

impl FromStr for Feeling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "awful" => Ok(Feeling::Awful),
            "bad" => Ok(Feeling::Bad),
            "okay" => Ok(Feeling::Okay),
            "good" => Ok(Feeling::Good),
            "great" => Ok(Feeling::Great),
            _ => Err(format!(
                "Invalid feeling '{}'. Valid options: awful, bad, okay, good, great",
                s
            )),
        }
    }
}
