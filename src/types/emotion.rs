//! Emotion vocabulary and classification output types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed vocabulary of emotions the classifier can detect.
///
/// Declaration order matters: the classifier iterates tags in this order and
/// a later tag must score strictly higher to displace an earlier one, so the
/// grief family wins ties against the positive tags. `Mixed` is the default
/// when no pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionTag {
    Grief,
    Sadness,
    Longing,
    Anger,
    Guilt,
    Anxiety,
    Numbness,
    Acceptance,
    Love,
    Hope,
    Mixed,
}

impl EmotionTag {
    /// All tags in declaration (tie-break) order
    pub const ALL: [EmotionTag; 11] = [
        EmotionTag::Grief,
        EmotionTag::Sadness,
        EmotionTag::Longing,
        EmotionTag::Anger,
        EmotionTag::Guilt,
        EmotionTag::Anxiety,
        EmotionTag::Numbness,
        EmotionTag::Acceptance,
        EmotionTag::Love,
        EmotionTag::Hope,
        EmotionTag::Mixed,
    ];

    /// Lowercase label used in replies and transcripts
    pub fn label(&self) -> &'static str {
        match self {
            EmotionTag::Grief => "grief",
            EmotionTag::Sadness => "sadness",
            EmotionTag::Longing => "longing",
            EmotionTag::Anger => "anger",
            EmotionTag::Guilt => "guilt",
            EmotionTag::Anxiety => "anxiety",
            EmotionTag::Numbness => "numbness",
            EmotionTag::Acceptance => "acceptance",
            EmotionTag::Love => "love",
            EmotionTag::Hope => "hope",
            EmotionTag::Mixed => "mixed",
        }
    }
}

impl fmt::Display for EmotionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse sentiment bucket derived from the lexicon score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    Negative,
    Neutral,
    Positive,
}

/// Lexicon-based sentiment reading, auxiliary to the emotion tags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Average per-word lexicon score in [-1.0, 1.0]
    pub score: f64,
    pub category: SentimentCategory,
}

impl Sentiment {
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            category: SentimentCategory::Neutral,
        }
    }
}

/// One emotional reading of a user utterance.
///
/// Immutable once produced; created once per utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalReading {
    /// Highest-scoring detected emotion, or `Mixed` if nothing matched
    pub primary: EmotionTag,
    /// Strength of the primary emotion, always in 1..=10
    pub intensity: u8,
    /// Other detected emotions, in declaration order
    pub secondary: Vec<EmotionTag>,
    /// Auxiliary sentiment signal
    pub sentiment: Sentiment,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_order_puts_grief_family_first() {
        let grief_pos = EmotionTag::ALL
            .iter()
            .position(|t| *t == EmotionTag::Grief)
            .unwrap();
        let love_pos = EmotionTag::ALL
            .iter()
            .position(|t| *t == EmotionTag::Love)
            .unwrap();
        assert!(grief_pos < love_pos);
    }

    #[test]
    fn test_tag_serde_labels() {
        let json = serde_json::to_string(&EmotionTag::Grief).unwrap();
        assert_eq!(json, "\"grief\"");
        assert_eq!(EmotionTag::Acceptance.to_string(), "acceptance");
    }
}
