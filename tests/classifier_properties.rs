//! Property tests for the classifier's contracts

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use quickcheck_macros::quickcheck;
use solace::{EmotionClassifier, EmotionTag, ManualClock};

fn classifier() -> EmotionClassifier {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap());
    EmotionClassifier::new(Arc::new(clock))
}

#[quickcheck]
fn intensity_is_always_in_range(text: String) -> bool {
    let reading = classifier().classify(&text);
    (1..=10).contains(&reading.intensity)
}

#[quickcheck]
fn primary_never_appears_in_secondary(text: String) -> bool {
    let reading = classifier().classify(&text);
    !reading.secondary.contains(&reading.primary)
}

#[quickcheck]
fn classification_is_deterministic(text: String) -> bool {
    let c = classifier();
    let a = c.classify(&text);
    let b = c.classify(&text);
    a.primary == b.primary && a.intensity == b.intensity && a.secondary == b.secondary
}

#[quickcheck]
fn sentiment_score_is_bounded(text: String) -> bool {
    let reading = classifier().classify(&text);
    (-1.0..=1.0).contains(&reading.sentiment.score)
}

#[test]
fn whitespace_variants_share_the_default() {
    let c = classifier();
    for input in ["", " ", "\t", "\n\n", "   \r\n"] {
        let reading = c.classify(input);
        assert_eq!(reading.primary, EmotionTag::Mixed);
        assert_eq!(reading.intensity, 1);
    }
}
