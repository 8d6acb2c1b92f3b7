//! Emotion to memory-category affinity, and reminiscence prompt pools.
//!
//! The affinity table decides which kinds of saved memories help with which
//! feelings: heavy grief is met with warm memories, agitation with records
//! of difficult times already weathered, hopeful moods with shared wins.

use crate::types::{EmotionTag, MemoryCategory};

/// Categories worth surfacing for a given emotion
pub(crate) fn categories(tag: EmotionTag) -> &'static [MemoryCategory] {
    match tag {
        EmotionTag::Grief | EmotionTag::Sadness | EmotionTag::Longing => &[
            MemoryCategory::MagicalMoments,
            MemoryCategory::HeartfeltFeelings,
        ],
        EmotionTag::Anger | EmotionTag::Anxiety | EmotionTag::Guilt => {
            &[MemoryCategory::DifficultTimes]
        }
        EmotionTag::Hope | EmotionTag::Acceptance => {
            &[MemoryCategory::MagicalMoments, MemoryCategory::SharedWins]
        }
        EmotionTag::Love => &[
            MemoryCategory::HeartfeltFeelings,
            MemoryCategory::MagicalMoments,
        ],
        EmotionTag::Numbness => &[MemoryCategory::HeartfeltFeelings],
        EmotionTag::Mixed => &MemoryCategory::ALL,
    }
}

/// Emotion-keyed prompts offered when no saved memory fits
pub(crate) fn prompt_pool(tag: EmotionTag) -> &'static [&'static str] {
    match tag {
        EmotionTag::Grief | EmotionTag::Sadness => &[
            "Is there a moment with them you find yourself returning to? I'd love to hear about it.",
            "Would it help to tell me about a time when being with them felt easy?",
            "If you feel up to it, tell me about a day with them you wish you could live again.",
        ],
        EmotionTag::Longing => &[
            "What do you miss most about the everyday moments you shared?",
            "Is there something they used to say that you can still hear?",
        ],
        EmotionTag::Anger | EmotionTag::Guilt => &[
            "Was there a hard time the two of you got through together? Sometimes those memories hold a lot.",
            "Would it help to talk about a moment when things between you felt resolved?",
        ],
        EmotionTag::Anxiety => &[
            "Can you think of a time they helped you feel safe? I'd like to hear about it.",
            "What would they have said to you on a day like today?",
        ],
        EmotionTag::Numbness => &[
            "No pressure to feel anything right now. Is there a small, ordinary memory of them you could describe?",
            "Sometimes details help - a place, a smell, a song. Does one come to mind?",
        ],
        EmotionTag::Acceptance | EmotionTag::Hope => &[
            "Is there something of theirs you've carried forward into your own life?",
            "What's a memory of them that makes you smile these days?",
        ],
        EmotionTag::Love => &[
            "What's something about them you never got tired of?",
            "Tell me about a moment when you felt how much they loved you.",
        ],
        EmotionTag::Mixed => &[
            "Whatever you're feeling, a memory can be a good place to start. Is there one close to the surface?",
            "Would you like to tell me about them? Anything at all.",
        ],
    }
}
