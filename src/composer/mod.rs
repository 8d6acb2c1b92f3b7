//! Response composition pipeline
//!
//! Orchestrates the engine end to end: classify the utterance, record it,
//! fold any mentioned person into the store, then build the reply from a
//! templated base plus pattern, person, and calendar layers. Every layer is
//! gated only by data availability; the pipeline is linear and never fails.

pub(crate) mod templates;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::classifier::EmotionClassifier;
use crate::clock::Clock;
use crate::extraction::{self, PersonMention};
use crate::memory::MemoryStore;
use crate::retrieval::MemoryRetriever;
use crate::types::{ComposedReply, UserProfile};

/// Thresholds the composition layers key off
#[derive(Debug, Clone)]
pub struct ComposerTuning {
    /// Average intensity above which the persistence acknowledgment fires
    pub intense_threshold: f64,
    /// A different emotion needs more than this many occurrences to count
    /// as the historical dominant
    pub shift_floor: usize,
    /// ... while the current emotion has at most this many
    pub shift_ceiling: usize,
    /// Reading intensity at which the base reply offers support
    pub support_intensity: u8,
    /// Person-scoped retrieval limit
    pub retrieval_limit: usize,
    /// Calendar look-ahead for the date layer
    pub upcoming_window_days: i64,
}

impl Default for ComposerTuning {
    fn default() -> Self {
        Self {
            intense_threshold: 7.0,
            shift_floor: 3,
            shift_ceiling: 2,
            support_intensity: 8,
            retrieval_limit: 3,
            upcoming_window_days: 14,
        }
    }
}

/// Merges an emotional base reply with personalized context
pub struct ResponseComposer {
    classifier: EmotionClassifier,
    store: MemoryStore,
    retriever: MemoryRetriever,
    tuning: ComposerTuning,
    rng: StdRng,
}

impl ResponseComposer {
    /// Build a composer with OS-seeded template selection
    pub fn new(store: MemoryStore, retriever: MemoryRetriever, clock: Arc<dyn Clock>) -> Self {
        Self::with_rng(store, retriever, clock, StdRng::from_entropy())
    }

    /// Build a composer with a fixed seed so template choice is reproducible
    pub fn with_seed(
        store: MemoryStore,
        retriever: MemoryRetriever,
        clock: Arc<dyn Clock>,
        seed: u64,
    ) -> Self {
        Self::with_rng(store, retriever, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        store: MemoryStore,
        retriever: MemoryRetriever,
        clock: Arc<dyn Clock>,
        rng: StdRng,
    ) -> Self {
        Self {
            classifier: EmotionClassifier::new(clock),
            store,
            retriever,
            tuning: ComposerTuning::default(),
            rng,
        }
    }

    pub fn set_tuning(&mut self, tuning: ComposerTuning) {
        self.tuning = tuning;
    }

    /// Read access to the session's memory store
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Run the full pipeline for one utterance
    pub fn compose(&mut self, text: &str, profile: &UserProfile) -> ComposedReply {
        let reading = self.classifier.classify(text);

        // Empty input short-circuits to a plain invitation
        if text.trim().is_empty() {
            return ComposedReply {
                text: templates::invitation(&profile.user_name),
                reading,
            };
        }

        self.store.record_emotion(reading.primary, reading.intensity);

        let mention = extraction::extract_person(text);
        if let Some(mention) = &mention {
            self.store.upsert_person(mention.to_update());
        }

        let mut sections: Vec<String> = Vec::new();
        sections.push(self.base_section(&reading));
        sections.extend(self.pattern_section(&reading));
        sections.extend(self.person_sections(&reading, mention.as_ref()));
        if let Some(section) = self.calendar_section() {
            sections.push(section);
        }

        ComposedReply {
            text: sections.join("\n\n"),
            reading,
        }
    }

    /// RNG-selected base template plus the support or mixed-feelings tail
    fn base_section(&mut self, reading: &crate::types::EmotionalReading) -> String {
        let mut base = templates::base_pool(reading.primary)
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(templates::FALLBACK_REPLY)
            .to_string();

        if reading.intensity >= self.tuning.support_intensity {
            base.push(' ');
            base.push_str(templates::SUPPORT_OFFER);
        } else if let Some(secondary) = reading.secondary.first() {
            base.push(' ');
            base.push_str(&templates::mixed_ack(reading.primary, *secondary));
        }

        base
    }

    /// Persistent-intensity and emotional-shift acknowledgments, if warranted.
    ///
    /// The two checks are independent: a first high-intensity reading of a
    /// new emotion against a window dominated by another one fires both.
    fn pattern_section(&self, reading: &crate::types::EmotionalReading) -> Vec<String> {
        let pattern = self.store.emotional_pattern();
        let current = pattern.get(&reading.primary);

        let mut sections = Vec::new();

        if current.is_some_and(|stat| stat.average_intensity > self.tuning.intense_threshold) {
            sections.push(templates::PERSISTENT_INTENSITY.to_string());
        }

        let current_count = current.map_or(0, |stat| stat.count);
        let other_dominates = pattern
            .iter()
            .any(|(tag, stat)| *tag != reading.primary && stat.count > self.tuning.shift_floor);
        if other_dominates && current_count <= self.tuning.shift_ceiling {
            sections.push(templates::EMOTIONAL_SHIFT.to_string());
        }

        sections
    }

    /// Memory reference (or prompt), qualities, and anecdote sentences.
    ///
    /// Falls back to the most recently discussed person when the current
    /// utterance names nobody, so follow-up turns stay on topic.
    fn person_sections(
        &mut self,
        reading: &crate::types::EmotionalReading,
        mention: Option<&PersonMention>,
    ) -> Vec<String> {
        let name = match mention {
            Some(mention) => Some(mention.name.clone()),
            None => self.store.recent_person().map(|p| p.name.clone()),
        };
        let Some(name) = name else {
            return Vec::new();
        };
        let Some(person) = self.store.person_context(&name) else {
            return Vec::new();
        };

        let mut sections = Vec::new();

        let memories =
            self.retriever
                .relevant_memories(Some(&name), reading.primary, self.tuning.retrieval_limit);
        match memories.first() {
            Some(memory) => sections.push(templates::memory_reference(&memory.content)),
            None => sections.push(
                self.retriever
                    .memory_prompt(reading.primary, &mut self.rng)
                    .to_string(),
            ),
        }

        if !person.qualities.is_empty() {
            sections.push(templates::qualities_sentence(&person.name, &person.qualities));
        }

        if !person.anecdotes.is_empty() {
            sections.push(templates::anecdote_sentence(&person.name));
        }

        sections
    }

    /// Single sentence for the soonest upcoming significant date
    fn calendar_section(&self) -> Option<String> {
        self.store
            .upcoming_dates(self.tuning.upcoming_window_days)
            .first()
            .map(templates::upcoming_date_sentence)
    }
}
