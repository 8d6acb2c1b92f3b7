//! Solace - rule-based emotional conversation engine
//!
//! Converts free-form user text into an emotionally-aware, personalized
//! reply for grief-support conversations. No model, no network: a phrase
//! classifier, a rolling per-person and per-emotion memory store,
//! relevance-scored retrieval over a host-supplied memory catalog, and a
//! layered composition pipeline.
//!
//! # Architecture
//!
//! - [`classifier`]: text -> emotion tag + intensity + secondary emotions
//! - [`memory`]: per-session emotional history and person entities
//! - [`retrieval`]: affinity- and keyword-scored saved-memory ranking
//! - [`composer`]: classify -> record -> retrieve -> layered reply
//!
//! The store, catalog, clock, and RNG are all constructor-injected; one
//! session owns one store, and multiple sessions are fully independent.

pub mod errors;
pub mod types;
pub mod clock;
pub mod catalog;
pub mod classifier;
pub mod extraction;
pub mod memory;
pub mod retrieval;
pub mod composer;
pub mod session;
pub mod config;
pub mod repl;

// Re-export commonly used types
pub use catalog::{InMemoryCatalog, MemoryCatalog};
pub use classifier::EmotionClassifier;
pub use clock::{Clock, ManualClock, SystemClock};
pub use composer::{ComposerTuning, ResponseComposer};
pub use errors::{EngineError, Result};
pub use memory::{MemoryStore, PersonEntity, PersonUpdate, UpcomingDate};
pub use retrieval::MemoryRetriever;
pub use session::ConversationSession;
pub use types::{
    ComposedReply, EmotionTag, EmotionalReading, MemoryCategory, MonthDay, SavedMemory,
    UserProfile,
};
