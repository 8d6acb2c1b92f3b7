//! Relevance-scored retrieval over the saved-memory catalog
//!
//! Two modes: person-scoped retrieval filtered through the emotion-category
//! affinity table and ordered by recency, and catalog-wide ranking by
//! keyword overlap with the emotion's phrase list. Both degrade to an empty
//! result, never an error.

pub(crate) mod affinity;

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::MemoryCatalog;
use crate::classifier::patterns;
use crate::types::{EmotionTag, SavedMemory};

/// Fallback when an emotion's prompt pool is somehow empty
const FALLBACK_PROMPT: &str = "Would you like to share a memory of them?";

/// Scores and ranks saved memories against a target emotion
pub struct MemoryRetriever {
    catalog: Arc<dyn MemoryCatalog>,
}

impl MemoryRetriever {
    pub fn new(catalog: Arc<dyn MemoryCatalog>) -> Self {
        Self { catalog }
    }

    /// Top `limit` memories for a person and emotion, most recent first.
    ///
    /// The person filter is case-insensitive when given; the affinity table
    /// narrows categories; recency orders equally-relevant matches.
    pub fn relevant_memories(
        &self,
        person: Option<&str>,
        emotion: EmotionTag,
        limit: usize,
    ) -> Vec<SavedMemory> {
        let categories = affinity::categories(emotion);

        let mut matches: Vec<SavedMemory> = self
            .catalog
            .saved_memories()
            .into_iter()
            .filter(|memory| match person {
                Some(target) => memory
                    .person_name
                    .as_deref()
                    .is_some_and(|name| name.eq_ignore_ascii_case(target)),
                None => true,
            })
            .filter(|memory| categories.contains(&memory.category))
            .collect();

        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches.truncate(limit);
        matches
    }

    /// Rank the whole catalog by occurrences of the emotion's keywords in
    /// title+content. Stable sort: ties keep catalog order.
    pub fn rank_by_keyword_overlap(&self, emotion: EmotionTag) -> Vec<SavedMemory> {
        let keywords = patterns::phrases(emotion);

        let mut scored: Vec<(usize, SavedMemory)> = self
            .catalog
            .saved_memories()
            .into_iter()
            .filter_map(|memory| {
                let haystack =
                    format!("{} {}", memory.title, memory.content).to_lowercase();
                let score: usize = keywords
                    .iter()
                    .map(|keyword| haystack.matches(keyword).count())
                    .sum();
                (score > 0).then_some((score, memory))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, memory)| memory).collect()
    }

    /// A reminiscence prompt for the emotion, RNG-selected from its pool
    pub fn memory_prompt<R: Rng>(&self, emotion: EmotionTag, rng: &mut R) -> &'static str {
        affinity::prompt_pool(emotion)
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_PROMPT)
    }
}
