//! Reply template pools and layered sentences.
//!
//! Base pools carry at least three variants per emotion so repeated turns
//! don't go stale; the composer picks one with its injected RNG.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::memory::UpcomingDate;
use crate::types::EmotionTag;

/// Deterministic fallback when a tag somehow has no pool
pub(crate) const FALLBACK_REPLY: &str = "I hear you. Tell me more?";

/// Appended to the base reply when intensity reaches the support threshold
pub(crate) const SUPPORT_OFFER: &str =
    "Do you need someone to talk to right now? I can help you find support.";

/// Pattern-layer acknowledgment of persistently intense feelings
pub(crate) const PERSISTENT_INTENSITY: &str = "I've noticed these feelings have been \
particularly intense for you lately. Remember that it's okay to take breaks when you \
need to, and there's no timeline for grief. Would you like to talk about what's making \
these feelings so strong?";

/// Pattern-layer acknowledgment of a shift in the dominant emotion
pub(crate) const EMOTIONAL_SHIFT: &str = "I notice your feelings have been shifting \
lately. That's completely natural - grief isn't a straight line, and each day can bring \
different emotions. How are you making sense of these changes?";

pub(crate) fn base_pool(tag: EmotionTag) -> &'static [&'static str] {
    match tag {
        EmotionTag::Grief => &[
            "I hear the depth of your loss, and I want you to know that your pain matters. Would you like to tell me more about what you're missing most right now?",
            "The weight of their absence is so heavy, and it's completely natural to feel this overwhelmed. I'm here to sit with you in this space for as long as you need.",
            "When someone we love becomes a memory, it can feel like the world has stopped making sense. Take all the time you need - there's no timeline for healing.",
        ],
        EmotionTag::Sadness => &[
            "Yeah, this is really tough. Want to tell me more?",
            "That sounds so hard. I'm right here with you.",
            "It's okay to not be okay. What's on your mind?",
        ],
        EmotionTag::Longing => &[
            "Those memories you're holding are so precious - they show how deep your connection was. Would you like to tell me about one you keep coming back to?",
            "Missing them is another way of loving them, and that love doesn't end. What do you wish you could share with them right now?",
            "The way you miss them speaks to how meaningful your relationship was. Those moments are forever part of your story.",
        ],
        EmotionTag::Anger => &[
            "I get why you're angry. This whole thing is unfair.",
            "You have every right to feel this way.",
            "I'd be mad too. Let it out if you need to.",
        ],
        EmotionTag::Guilt => &[
            "Hey, try not to be so hard on yourself.",
            "We all have those 'what if' thoughts. It's normal.",
            "You did the best you could with what you knew then.",
        ],
        EmotionTag::Anxiety => &[
            "One step at a time, okay? What's worrying you the most?",
            "That sounds really overwhelming. Need to talk it through?",
            "Sometimes just naming what's making us anxious helps a bit.",
        ],
        EmotionTag::Numbness => &[
            "Sometimes not feeling anything is the body's way of coping.",
            "That numbness you're feeling? Totally normal after what you've been through.",
            "It won't always feel this empty. Promise.",
        ],
        EmotionTag::Acceptance => &[
            "I hear you finding ways to move forward while keeping their memory close. Each small step is significant.",
            "Moving forward doesn't mean leaving them behind - it means finding new ways to carry their love with you.",
            "The way you're navigating this shows real resilience. It's okay to have better moments.",
        ],
        EmotionTag::Love => &[
            "The love you're expressing is so beautiful - it's clear how deeply they touched your life. What made your relationship so special?",
            "I can hear how much love there is in your memories. That kind of love leaves an imprint time can't erase.",
            "The way you speak about them shows such deep love. What qualities do you cherish most about them?",
        ],
        EmotionTag::Hope => &[
            "It's good to hear you had a better moment.",
            "Those little glimpses of okay are important.",
            "Yeah, hold onto those good memories.",
        ],
        EmotionTag::Mixed => &[
            "Sounds like you're feeling a lot of different things. That's normal.",
            "Grief isn't just one feeling, is it?",
            "There's no right or wrong way to feel about this.",
        ],
    }
}

/// Base-reply tail naming both feelings when emotions are mixed
pub(crate) fn mixed_ack(primary: EmotionTag, secondary: EmotionTag) -> String {
    format!(
        "It's okay to feel {primary} and {secondary} at the same time."
    )
}

/// Short-circuit reply for empty input
pub(crate) fn invitation(user_name: &str) -> String {
    format!("I'm here, {user_name}. Tell me more whenever you're ready?")
}

/// Person-layer sentence referencing a retrieved saved memory
pub(crate) fn memory_reference(content: &str) -> String {
    format!(
        "I remember you telling me about {content}. Would you like to share more memories like that?"
    )
}

/// Person-layer sentence listing stored qualities
pub(crate) fn qualities_sentence(name: &str, qualities: &BTreeSet<String>) -> String {
    let list = qualities.iter().cloned().collect::<Vec<_>>().join(", ");
    format!(
        "The way you describe {name} - {list} - it really shows the beautiful connection you shared. Would you like to tell me more about these special qualities?"
    )
}

/// Person-layer acknowledgment of the latest anecdote
pub(crate) fn anecdote_sentence(name: &str) -> String {
    format!(
        "Thank you for sharing that story about {name}. These stories keep their spirit alive in such a meaningful way."
    )
}

/// Calendar-layer sentence for the soonest upcoming occasion
pub(crate) fn upcoming_date_sentence(upcoming: &UpcomingDate) -> String {
    format!(
        "I know {occasion} for {name} is coming up on {date}. These dates can bring up a lot of emotions. Would you like to talk about how you're feeling about it?",
        occasion = upcoming.occasion,
        name = upcoming.person_name,
        date = format_date(upcoming.date),
    )
}

fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}
