//! Emotion classification from raw text
//!
//! Scores each [`EmotionTag`]'s fixed phrase list by substring containment
//! against the lowercased input. The highest-scoring tag becomes the primary
//! emotion; ties go to the earlier tag in declaration order. Intensity starts
//! from a baseline of 5 and moves by fixed per-phrase deltas, clamped to
//! 1..=10. Always returns a reading; there is no failure mode.

pub(crate) mod patterns;

use std::sync::Arc;

use crate::clock::Clock;
use crate::types::{EmotionTag, EmotionalReading, Sentiment, SentimentCategory};

/// Intensity baseline before any modifier phrases are applied
const BASELINE_INTENSITY: i32 = 5;

/// Sentiment thresholds for the three-way category split
const SENTIMENT_CUTOFF: f64 = 0.3;

/// Rule-based emotion classifier
pub struct EmotionClassifier {
    clock: Arc<dyn Clock>,
}

impl EmotionClassifier {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Classify one utterance into an emotional reading.
    ///
    /// Empty or whitespace-only input deterministically yields `Mixed` at the
    /// intensity floor with no secondary emotions.
    pub fn classify(&self, text: &str) -> EmotionalReading {
        let timestamp = self.clock.now();
        let lowered = text.to_lowercase();

        if lowered.trim().is_empty() {
            return EmotionalReading {
                primary: EmotionTag::Mixed,
                intensity: 1,
                secondary: Vec::new(),
                sentiment: Sentiment::neutral(),
                timestamp,
            };
        }

        // Score every tag; first-seen wins ties because displacement
        // requires a strictly greater score.
        let mut primary = EmotionTag::Mixed;
        let mut best_score = 0usize;
        let mut detected = Vec::new();

        for tag in EmotionTag::ALL {
            let score = patterns::phrases(tag)
                .iter()
                .filter(|phrase| lowered.contains(*phrase))
                .count();
            if score > 0 {
                detected.push(tag);
                if score > best_score {
                    best_score = score;
                    primary = tag;
                }
            }
        }

        let secondary: Vec<EmotionTag> =
            detected.into_iter().filter(|tag| *tag != primary).collect();

        EmotionalReading {
            primary,
            intensity: score_intensity(&lowered),
            secondary,
            sentiment: score_sentiment(&lowered),
            timestamp,
        }
    }
}

/// Apply intensity phrase deltas and the mixed-emotion bump, then clamp
fn score_intensity(lowered: &str) -> u8 {
    let mut intensity = BASELINE_INTENSITY;

    for (phrase, delta) in patterns::INTENSITY_PHRASES {
        if lowered.contains(phrase) {
            intensity += delta;
        }
    }

    // Transitional phrasing ("but then", ...) marks deeper processing
    if patterns::TRANSITION_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
    {
        intensity += 1;
    }

    intensity.clamp(1, 10) as u8
}

/// Average per-word lexicon score, bucketed at +/- 0.3
fn score_sentiment(lowered: &str) -> Sentiment {
    let words: Vec<&str> = lowered
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return Sentiment::neutral();
    }

    let total: f64 = words
        .iter()
        .map(|word| {
            patterns::SENTIMENT_LEXICON
                .iter()
                .find(|&&(entry, _)| entry == *word)
                .map_or(0.0, |&(_, score)| score)
        })
        .sum();

    let score = total / words.len() as f64;
    let category = if score < -SENTIMENT_CUTOFF {
        SentimentCategory::Negative
    } else if score > SENTIMENT_CUTOFF {
        SentimentCategory::Positive
    } else {
        SentimentCategory::Neutral
    };

    Sentiment { score, category }
}
