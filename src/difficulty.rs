//! Grades and difficulty tiers.
//!
//! A [`Tier`] drives three knobs at once: the share of above-grade vocabulary,
//! the sentence structures the generator may use, and how much inference the
//! comprehension questions demand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grades the question endpoints accept.
pub const VALID_GRADES: [u8; 3] = [7, 8, 9];

/// Difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown difficulty tier: {0:?}")]
pub struct UnknownTier(pub String);

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
        }
    }

    /// Fraction of the word list drawn from higher grades.
    pub fn high_word_ratio(self) -> f64 {
        match self {
            Tier::Easy => 0.0,
            Tier::Medium => 0.1,
            Tier::Hard => 0.3,
        }
    }

    /// Sentence-structure instruction embedded in every prompt.
    pub fn sentence_rule(self) -> &'static str {
        match self {
            Tier::Easy => "Use simple sentences (subject-verb-object). Avoid complex clauses.",
            Tier::Medium => "Use compound sentences with 'but', 'and', 'or', 'because'.",
            Tier::Hard => {
                "Use complex sentences with relative clauses like 'which', 'when', 'who', 'that'."
            }
        }
    }

    /// Instruction on how far comprehension questions reach beyond the literal text.
    pub fn inference_rule(self) -> &'static str {
        match self {
            Tier::Easy => "Questions should be answerable from details stated directly in the text.",
            Tier::Medium => {
                "Include at least one question that requires connecting information from different sentences."
            }
            Tier::Hard => {
                "Include questions that require inferring implied meaning, the speakers' attitude, or their purpose."
            }
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Tier::Easy),
            "medium" => Ok(Tier::Medium),
            "hard" => Ok(Tier::Hard),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

/// A school grade accepted by the generation endpoints (7, 8 or 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Grade(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("grade {0} is outside 7..=9")]
pub struct InvalidGrade(pub i64);

impl Grade {
    pub fn new(value: i64) -> Result<Self, InvalidGrade> {
        VALID_GRADES
            .iter()
            .copied()
            .find(|g| i64::from(*g) == value)
            .map(Grade)
            .ok_or(InvalidGrade(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
