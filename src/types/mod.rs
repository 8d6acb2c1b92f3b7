//! Type definitions module
//!
//! Core types shared across the classifier, memory store, retriever,
//! and composer.

pub mod emotion;
pub mod memory;
pub mod reply;

// Re-export commonly used types
pub use emotion::{EmotionTag, EmotionalReading, Sentiment, SentimentCategory};
pub use memory::{MemoryCategory, MonthDay, SavedMemory};
pub use reply::{ComposedReply, Message, UserProfile};
