//! Fixed phrase tables behind the classifier.
//!
//! Matching is substring containment against the lowercased input, not
//! word-boundary matching. Short phrases can match inside longer words; the
//! tables avoid the worst offenders ("love" alone rather than "love" plus
//! "loved", no bare "so") but the simplification itself is deliberate.

use crate::types::EmotionTag;

/// Phrases whose presence scores one point for the tag
pub(crate) fn phrases(tag: EmotionTag) -> &'static [&'static str] {
    match tag {
        EmotionTag::Grief => &[
            "miss",
            "gone forever",
            "never again",
            "cant believe",
            "can't believe",
            "lost",
            "without you",
            "alone now",
            "empty inside",
            "heart hurts",
        ],
        EmotionTag::Sadness => &[
            "hurts",
            "crying",
            "cried",
            "tears",
            "heartbroken",
            "feeling down",
            "heavy",
            "blue",
            "awful",
            "rough day",
        ],
        EmotionTag::Longing => &[
            "wish",
            "remember when",
            "used to",
            "one more time",
            "want to hear",
            "think about them",
            "miss your",
        ],
        EmotionTag::Anger => &[
            "angry",
            "mad",
            "unfair",
            "hate",
            "frustrated",
            "upset",
            "why did this happen",
            "taken away",
            "fed up",
        ],
        EmotionTag::Guilt => &[
            "guilt",
            "should have",
            "wish i had",
            "if only",
            "my fault",
            "regret",
            "blame",
            "sorry",
            "didnt get to",
            "never told",
        ],
        EmotionTag::Anxiety => &[
            "worried",
            "scared",
            "nervous",
            "panic",
            "stress",
            "cant sleep",
            "restless",
            "on edge",
            "how will i",
            "what if",
        ],
        EmotionTag::Numbness => &[
            "numb",
            "empty",
            "nothing",
            "blank",
            "cant feel",
            "going through the motions",
            "robot",
            "disconnected",
        ],
        EmotionTag::Acceptance => &[
            "trying",
            "learning",
            "day by day",
            "small steps",
            "getting through",
            "surviving",
            "little better",
            "somehow",
        ],
        EmotionTag::Love => &[
            "love",
            "special",
            "precious",
            "grateful",
            "thankful",
            "blessed",
            "treasure",
            "cherish",
        ],
        EmotionTag::Hope => &[
            "better",
            "okay",
            "managing",
            "good moment",
            "good day",
            "smiled",
            "peaceful",
            "comfort",
            "warm",
            "strength",
        ],
        EmotionTag::Mixed => &[],
    }
}

/// Intensity deltas applied on top of the baseline of 5
pub(crate) const INTENSITY_PHRASES: &[(&str, i32)] = &[
    ("cant even breathe", 4),
    ("can't even breathe", 4),
    ("cant stop", 3),
    ("can't stop", 3),
    ("completely", 3),
    ("extremely", 3),
    ("so much", 3),
    ("really", 2),
    ("very", 2),
    ("just", -1),
    ("a bit", -1),
    ("sometimes", -1),
];

/// Phrases signaling mixed emotion; any hit adds one point of intensity
pub(crate) const TRANSITION_PHRASES: &[&str] = &[
    "but then",
    "and then",
    "but also",
    "while also",
    "at the same time",
    "other times",
];

/// Per-word sentiment lexicon, scores in [-1.0, 1.0]
pub(crate) const SENTIMENT_LEXICON: &[(&str, f64)] = &[
    // Positive
    ("good", 0.5),
    ("great", 0.7),
    ("wonderful", 0.8),
    ("happy", 0.6),
    ("joy", 0.7),
    ("love", 0.8),
    ("loved", 0.8),
    ("beautiful", 0.6),
    ("grateful", 0.7),
    ("thankful", 0.7),
    ("blessed", 0.7),
    ("peaceful", 0.5),
    ("calm", 0.4),
    ("hope", 0.5),
    ("hopeful", 0.6),
    // Negative
    ("bad", -0.5),
    ("terrible", -0.7),
    ("awful", -0.7),
    ("horrible", -0.8),
    ("sad", -0.6),
    ("grief", -0.7),
    ("miss", -0.5),
    ("missing", -0.5),
    ("lost", -0.6),
    ("angry", -0.7),
    ("mad", -0.6),
    ("upset", -0.5),
    ("afraid", -0.6),
    ("scared", -0.6),
    ("anxious", -0.6),
    ("worried", -0.5),
    ("pain", -0.6),
    ("hurt", -0.6),
    ("alone", -0.5),
    ("lonely", -0.6),
    ("empty", -0.5),
];
